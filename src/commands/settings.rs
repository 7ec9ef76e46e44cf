use crate::{
    libs::{
        messages::Message,
        settings::{SettingChange, Settings},
        view::View,
    },
    msg_error, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct SettingsArgs {
    #[command(subcommand)]
    command: Option<SettingsCommand>,
}

#[derive(Debug, Subcommand)]
enum SettingsCommand {
    /// Show every setting with its current value
    List,
    /// Show a single setting
    Get {
        /// Setting key, e.g. theme
        key: String,
    },
    /// Change a setting; the value is read as the setting's own type
    Set {
        /// Setting key, e.g. notificationTimeout
        key: String,
        /// New value, e.g. dark, true or 1500
        value: String,
    },
    /// Restore all defaults
    Reset,
}

pub fn cmd(args: SettingsArgs) -> Result<()> {
    let mut settings = Settings::default();
    settings.subscribe(|change: &SettingChange| {
        tracing::debug!(%change, "settings change observed");
    });

    match args.command {
        None | Some(SettingsCommand::List) => {
            msg_print!(Message::SettingsHeader, true);
            View::settings(&settings)?;
        }
        Some(SettingsCommand::Get { key }) => match settings.get(&key) {
            Some(value) => msg_print!(Message::SettingValue(key, value.to_string())),
            None => msg_error!(Message::SettingNotFound(key)),
        },
        Some(SettingsCommand::Set { key, value }) => {
            match settings.parse_for(&key, &value).and_then(|value| {
                settings.set(&key, value.clone())?;
                Ok(value)
            }) {
                Ok(value) => {
                    msg_success!(Message::SettingUpdated(key, value.to_string()));
                    View::settings(&settings)?;
                }
                Err(e) => msg_error!(Message::ActionFailed(e.to_string())),
            }
        }
        Some(SettingsCommand::Reset) => {
            settings.reset_to_defaults();
            msg_success!(Message::SettingsReset);
        }
    }

    Ok(())
}
