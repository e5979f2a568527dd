use super::ProductStore;
use crate::error::{Result, StockroomError};
use crate::model::Product;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_FILE: &str = "inventory.json";

pub struct FileStore {
    root: PathBuf,
    data_file: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            data_file: DEFAULT_DATA_FILE.to_string(),
        }
    }

    pub fn with_data_file(mut self, name: &str) -> Self {
        self.data_file = name.to_string();
        self
    }

    pub fn data_path(&self) -> PathBuf {
        self.root.join(&self.data_file)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(StockroomError::Io)?;
        }
        Ok(())
    }
}

impl ProductStore for FileStore {
    fn load(&self) -> Result<HashMap<String, Product>> {
        let data_file = self.data_path();
        if !data_file.exists() {
            return Ok(HashMap::new());
        }
        let content = fs::read_to_string(&data_file).map_err(StockroomError::Io)?;
        let products: HashMap<String, Product> =
            serde_json::from_str(&content).map_err(StockroomError::Serialization)?;
        Ok(products)
    }

    fn save(&mut self, products: &HashMap<String, Product>) -> Result<()> {
        self.ensure_dir(&self.root)?;

        // Plain overwrite: the whole snapshot replaces the previous file contents
        let content =
            serde_json::to_string_pretty(products).map_err(StockroomError::Serialization)?;
        fs::write(self.data_path(), content).map_err(StockroomError::Io)?;
        Ok(())
    }

    fn location(&self) -> Option<PathBuf> {
        Some(self.data_path())
    }
}
