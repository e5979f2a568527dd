use crate::commands::{CmdMessage, CmdResult, StockroomPaths};
use crate::config::StockroomConfig;
use crate::error::Result;
use crate::model::Scope;

/// Creates the scope directory and writes its config, keeping any existing config.
pub fn run(paths: &StockroomPaths, scope: Scope) -> Result<CmdResult> {
    let dir = paths.scope_dir(scope)?;
    let config = StockroomConfig::load(&dir)?;
    config.save(&dir)?;

    let mut result = CmdResult::default().with_config(config);
    result.add_message(CmdMessage::success(format!(
        "Initialized stockroom at {}",
        dir.display()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn creates_dir_and_keeps_existing_config() {
        let dir = TempDir::new().unwrap();
        let paths = StockroomPaths {
            project: Some(dir.path().join(".stockroom")),
            global: Some(dir.path().join("global")),
        };

        run(&paths, Scope::Project).unwrap();
        assert!(dir.path().join(".stockroom").join("config.json").exists());

        let mut config = StockroomConfig::default();
        config.set("data-file", "stock.json").unwrap();
        config.save(dir.path().join(".stockroom")).unwrap();

        let result = run(&paths, Scope::Project).unwrap();
        assert_eq!(result.config.unwrap().data_file, "stock.json");
        assert!(fs::read_to_string(dir.path().join(".stockroom").join("config.json"))
            .unwrap()
            .contains("stock.json"));
    }
}
