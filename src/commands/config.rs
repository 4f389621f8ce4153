//! Config command - show and change persistent settings

use truthforge::config::{GlobalConfig, Theme};
use truthforge::output::OutputMode;

use crate::cli::{ConfigAction, ThemeAction};

/// Show or change the persistent configuration
pub fn config_cmd(action: ConfigAction, mode: OutputMode) -> anyhow::Result<()> {
    match action {
        ConfigAction::Show => {
            let config = GlobalConfig::load();
            if mode == OutputMode::Json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                println!("api_url: {}", config.api_url);
                println!("theme: {}", config.ui.theme);
            }
            Ok(())
        },
        ConfigAction::SetUrl { url } => {
            let mut config = GlobalConfig::load();
            config.api_url = url;
            config.save()?;
            println!("Updated service origin: {}", config.api_url);
            Ok(())
        },
        ConfigAction::Theme { action } => theme_cmd(action),
    }
}

fn theme_cmd(action: ThemeAction) -> anyhow::Result<()> {
    match action {
        ThemeAction::Show => {
            let config = GlobalConfig::load();
            println!("{}", config.ui.theme);
        },
        ThemeAction::Set { value } => {
            let theme: Theme = value.parse().map_err(|e: String| anyhow::anyhow!(e))?;
            let mut config = GlobalConfig::load();
            config.ui.theme = theme;
            config.save()?;
            println!("Theme set to {theme}");
        },
        ThemeAction::Toggle => {
            let mut config = GlobalConfig::load();
            let theme = config.toggle_theme();
            config.save()?;
            println!("Theme set to {theme}");
        },
    }
    Ok(())
}
