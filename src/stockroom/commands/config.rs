use crate::commands::{CmdMessage, CmdResult, StockroomPaths};
use crate::config::StockroomConfig;
use crate::error::Result;
use crate::model::Scope;

/// `Show(None)` returns the whole config; `Show(Some(key))` reports one value.
#[derive(Debug, Clone)]
pub enum ConfigAction {
    Show(Option<String>),
    Set(String, String),
}

/// Bad keys and rejected values come back as error messages, not as `Err`.
pub fn run(paths: &StockroomPaths, scope: Scope, action: ConfigAction) -> Result<CmdResult> {
    let dir = paths.scope_dir(scope)?;
    let mut config = StockroomConfig::load(&dir)?;
    let mut result = CmdResult::default();

    let message = match action {
        ConfigAction::Show(None) => return Ok(result.with_config(config)),
        ConfigAction::Show(Some(key)) => config
            .get(&key)
            .map(CmdMessage::info)
            .unwrap_or_else(|| CmdMessage::error(format!("Unknown config key: {}", key))),
        ConfigAction::Set(key, value) => match config.set(&key, &value) {
            Ok(()) => {
                config.save(&dir)?;
                let stored = config.get(&key).unwrap_or(value);
                result = result.with_config(config);
                CmdMessage::success(format!("{} set to {}", key, stored))
            }
            Err(e) => CmdMessage::error(e),
        },
    };

    result.add_message(message);
    Ok(result)
}
