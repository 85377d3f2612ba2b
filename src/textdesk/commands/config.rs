use crate::commands::{CmdMessage, CmdResult};
use crate::config::TextdeskConfig;
use crate::error::{Result, TextdeskError};
use std::path::Path;

const DEFAULT_LIMIT_KEY: &str = "default-limit";

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

fn unknown_key(key: &str) -> TextdeskError {
    TextdeskError::validation("config", format!("unknown key '{}'", key))
}

pub fn run(data_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = TextdeskConfig::load(data_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {
            result.add_message(CmdMessage::info(format!(
                "default-limit = {}",
                config.default_limit
            )));
        }
        ConfigAction::ShowKey(key) => {
            if key != DEFAULT_LIMIT_KEY {
                return Err(unknown_key(&key));
            }
            result.add_message(CmdMessage::info(config.default_limit.to_string()));
        }
        ConfigAction::Set(key, value) => {
            if key != DEFAULT_LIMIT_KEY {
                return Err(unknown_key(&key));
            }
            config.set_default_limit(&value)?;
            config.save(data_dir)?;
            result.add_message(CmdMessage::success(format!(
                "default-limit set to {}",
                config.default_limit
            )));
        }
    }

    Ok(result.with_config(config))
}
