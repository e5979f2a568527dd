use crate::config::StockroomConfig;
use crate::error::{Result, StockroomError};
use crate::model::{Product, Scope};
use std::collections::BTreeMap;
use std::path::PathBuf;

pub mod add;
pub mod clear;
pub mod config;
pub mod delete;
pub mod helpers;
pub mod init;
pub mod list;
pub mod quantity;
pub mod report;
pub mod search;
pub mod update;
pub mod view;

/// Scope directories. Either may be missing; it only matters once that scope is used.
#[derive(Debug, Clone)]
pub struct StockroomPaths {
    pub project: Option<PathBuf>,
    pub global: Option<PathBuf>,
}

impl StockroomPaths {
    pub fn scope_dir(&self, scope: Scope) -> Result<PathBuf> {
        match scope {
            Scope::Project => self
                .project
                .clone()
                .ok_or_else(|| StockroomError::Config("Project scope is not available".to_string())),
            Scope::Global => self.global.clone().ok_or_else(|| {
                StockroomError::Config(
                    "Could not determine the global data directory, set STOCKROOM_HOME".to_string(),
                )
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Product count and total value.
#[derive(Debug, Clone, PartialEq)]
pub struct InventorySummary {
    pub product_count: usize,
    pub total_value: f64,
}

/// Sections of a report; only the requested ones are filled in.
#[derive(Debug, Clone, Default)]
pub struct InventoryReport {
    pub summary: Option<InventorySummary>,
    pub low_stock: Option<Vec<Product>>,
    /// Units per category, ordered by category name.
    pub categories: Option<BTreeMap<String, u64>>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_products: Vec<Product>,
    pub listed_products: Vec<Product>,
    pub report: Option<InventoryReport>,
    pub config: Option<StockroomConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_products(mut self, products: Vec<Product>) -> Self {
        self.affected_products = products;
        self
    }

    pub fn with_listed_products(mut self, products: Vec<Product>) -> Self {
        self.listed_products = products;
        self
    }

    pub fn with_report(mut self, report: InventoryReport) -> Self {
        self.report = Some(report);
        self
    }

    pub fn with_config(mut self, config: StockroomConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Field-by-field edit of an existing product. `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<u32>,
    pub category: Option<String>,
    pub description: Option<String>,
}

impl ProductUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.price.is_none()
            && self.quantity.is_none()
            && self.category.is_none()
            && self.description.is_none()
    }
}
