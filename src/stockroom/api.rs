//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry point for
//! all stockroom operations, whatever UI sits on top (the subcommand CLI and the interactive
//! menu both go through it).
//!
//! The API:
//! - **Dispatches** to the matching `commands::*::run`
//! - **Owns** the [`Inventory`] and the scope paths for the process
//! - **Returns structured types** (`Result<CmdResult>`), never strings
//!
//! `StockroomApi<S: ProductStore>` is generic over storage: `FileStore` in production,
//! `InMemoryStore` in tests.

use crate::commands;
use crate::error::Result;
use crate::inventory::Inventory;
use crate::model::{Product, Scope};
use crate::store::ProductStore;

pub struct StockroomApi<S: ProductStore> {
    inventory: Inventory<S>,
    paths: commands::StockroomPaths,
}

impl<S: ProductStore> StockroomApi<S> {
    pub fn new(store: S, paths: commands::StockroomPaths) -> Self {
        Self {
            inventory: Inventory::open(store),
            paths,
        }
    }

    pub fn add_product(&mut self, product: Product) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.inventory, product)
    }

    pub fn update_product(
        &mut self,
        id: &str,
        update: &commands::ProductUpdate,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.inventory, id, update)
    }

    pub fn delete_product(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.inventory, id)
    }

    pub fn view_product(&self, id: &str) -> Result<commands::CmdResult> {
        commands::view::run(&self.inventory, id)
    }

    pub fn list_products(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.inventory)
    }

    pub fn search_products(&self, filter: &ProductFilter) -> Result<commands::CmdResult> {
        commands::search::run(&self.inventory, filter)
    }

    pub fn adjust_quantity(&mut self, id: &str, delta: i64) -> Result<commands::CmdResult> {
        commands::quantity::run(&mut self.inventory, id, delta)
    }

    pub fn report(&self, kind: ReportKind) -> Result<commands::CmdResult> {
        commands::report::run(&self.inventory, kind)
    }

    pub fn clear(&mut self) -> Result<commands::CmdResult> {
        commands::clear::run(&mut self.inventory)
    }

    pub fn config(&self, scope: Scope, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, scope, action)
    }

    pub fn init(&self, scope: Scope) -> Result<commands::CmdResult> {
        commands::init::run(&self.paths, scope)
    }

    /// Read-only access for UIs that need to peek (e.g. show current values before editing).
    pub fn inventory(&self) -> &Inventory<S> {
        &self.inventory
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::report::ReportKind;
pub use crate::commands::search::ProductFilter;
pub use commands::{
    CmdMessage, CmdResult, InventoryReport, InventorySummary, MessageLevel, ProductUpdate,
    StockroomPaths,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn api() -> StockroomApi<InMemoryStore> {
        let paths = StockroomPaths {
            project: None,
            global: None,
        };
        StockroomApi::new(StoreFixture::new().with_sample_shelf().build(), paths)
    }

    #[test]
    fn dispatches_mutations_to_inventory() {
        let mut api = api();
        api.add_product(Product::new("C1", "Crate", 4.0, 12, "Storage", ""))
            .unwrap();
        api.adjust_quantity("C1", -2).unwrap();
        api.delete_product("A1").unwrap();

        assert_eq!(api.inventory().count(), 3);
        assert_eq!(api.inventory().get("C1").unwrap().quantity, 10);
        assert_eq!(api.inventory().store().saves(), 3);
    }

    #[test]
    fn dispatches_queries() {
        let api = api();
        assert_eq!(api.list_products().unwrap().listed_products.len(), 3);
        assert_eq!(api.view_product("B1").unwrap().listed_products[0].name, "Gadget");
        assert_eq!(
            api.search_products(&ProductFilter::LowStock)
                .unwrap()
                .listed_products
                .len(),
            2
        );
        assert!(api.report(ReportKind::All).unwrap().report.is_some());
    }

    #[test]
    fn clear_goes_through() {
        let mut api = api();
        api.clear().unwrap();
        assert!(api.inventory().is_empty());
    }
}
