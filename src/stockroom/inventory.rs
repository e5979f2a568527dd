//! # Inventory
//!
//! [`Inventory`] owns every [`Product`] in the process, keyed by id. Reads are plain lookups
//! and linear scans over the map. Every mutation (add, update, delete, quantity change,
//! clear) hands the whole map to the backing [`ProductStore`] before returning.
//!
//! ## Persistence Policy
//!
//! Persistence is best effort:
//! - A failed load at [`Inventory::open`] is logged and the inventory starts empty.
//! - A failed save is logged; the in-memory change stays and the operation still succeeds.
//!
//! Only domain failures (unknown id, duplicate id, blank id) are returned as errors.

use crate::error::{Result, StockroomError};
use crate::model::Product;
use crate::store::ProductStore;
use std::collections::HashMap;
use tracing::{debug, error, info, warn};

pub struct Inventory<S: ProductStore> {
    products: HashMap<String, Product>,
    store: S,
}

impl<S: ProductStore> Inventory<S> {
    /// Loads the saved snapshot from `store`, or starts empty if it cannot be read.
    pub fn open(store: S) -> Self {
        let products = match store.load() {
            Ok(products) => {
                info!(count = products.len(), "inventory loaded");
                products
            }
            Err(e) => {
                warn!(error = %e, location = ?store.location(), "failed to load inventory, starting empty");
                HashMap::new()
            }
        };
        Self { products, store }
    }

    pub fn add(&mut self, product: Product) -> Result<()> {
        if product.id.trim().is_empty() {
            return Err(StockroomError::InvalidId);
        }
        if self.products.contains_key(&product.id) {
            return Err(StockroomError::DuplicateProduct(product.id));
        }

        debug!(id = %product.id, "adding product");
        self.products.insert(product.id.clone(), product);
        self.persist();
        Ok(())
    }

    /// Replaces the product stored under `id` wholesale.
    ///
    /// The replacement must carry the same id, so `get(id)` always returns a product whose
    /// `id` is `id`.
    pub fn update(&mut self, id: &str, product: Product) -> Result<()> {
        if !self.products.contains_key(id) {
            return Err(StockroomError::ProductNotFound(id.to_string()));
        }
        if product.id != id {
            return Err(StockroomError::IdMismatch {
                key: id.to_string(),
                id: product.id,
            });
        }

        debug!(id, "updating product");
        self.products.insert(id.to_string(), product);
        self.persist();
        Ok(())
    }

    /// Removes the product and hands it back, so callers can name what was deleted.
    pub fn delete(&mut self, id: &str) -> Result<Product> {
        let removed = self
            .products
            .remove(id)
            .ok_or_else(|| StockroomError::ProductNotFound(id.to_string()))?;

        debug!(id, "deleted product");
        self.persist();
        Ok(removed)
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.get(id)
    }

    pub fn list(&self) -> Vec<&Product> {
        self.products.values().collect()
    }

    pub fn search_by_name(&self, term: &str) -> Vec<&Product> {
        let term = term.to_lowercase();
        self.products
            .values()
            .filter(|p| p.name.to_lowercase().contains(&term))
            .collect()
    }

    pub fn search_by_category(&self, term: &str) -> Vec<&Product> {
        let term = term.to_lowercase();
        self.products
            .values()
            .filter(|p| p.category.to_lowercase().contains(&term))
            .collect()
    }

    pub fn low_stock(&self) -> Vec<&Product> {
        self.products.values().filter(|p| p.is_low_stock()).collect()
    }

    pub fn total_value(&self) -> f64 {
        self.products.values().map(Product::total_value).sum()
    }

    /// Total units per category.
    pub fn summary_by_category(&self) -> HashMap<String, u64> {
        let mut summary: HashMap<String, u64> = HashMap::new();
        for product in self.products.values() {
            *summary.entry(product.category.clone()).or_default() += u64::from(product.quantity);
        }
        summary
    }

    /// Applies `delta` to the product's quantity and returns the new quantity.
    pub fn adjust_quantity(&mut self, id: &str, delta: i64) -> Result<u32> {
        let product = self
            .products
            .get_mut(id)
            .ok_or_else(|| StockroomError::ProductNotFound(id.to_string()))?;

        product.adjust_quantity(delta);
        let quantity = product.quantity;

        debug!(id, delta, quantity, "adjusted quantity");
        self.persist();
        Ok(quantity)
    }

    pub fn count(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn clear(&mut self) {
        self.products.clear();
        self.persist();
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.save(&self.products) {
            error!(error = %e, location = ?self.store.location(), "failed to save inventory");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fs::FileStore;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use proptest::prelude::*;
    use tempfile::TempDir;

    fn widget() -> Product {
        Product::new("A1", "Widget", 2.5, 5, "Tools", "Small widget")
    }

    fn shelf() -> Inventory<InMemoryStore> {
        Inventory::open(StoreFixture::new().with_sample_shelf().build())
    }

    fn ids(products: Vec<&Product>) -> Vec<String> {
        let mut ids: Vec<String> = products.into_iter().map(|p| p.id.clone()).collect();
        ids.sort();
        ids
    }

    #[test]
    fn add_then_get() {
        let mut inv = Inventory::open(InMemoryStore::new());
        inv.add(widget()).unwrap();

        let stored = inv.get("A1").unwrap();
        assert_eq!(stored, &widget());
        assert_eq!(stored.name, "Widget");
        assert_eq!(inv.store().saves(), 1);
    }

    #[test]
    fn add_duplicate_keeps_existing() {
        let mut inv = Inventory::open(InMemoryStore::new());
        inv.add(widget()).unwrap();

        let imposter = Product::new("A1", "Imposter", 99.0, 1, "Fake", "");
        assert!(matches!(
            inv.add(imposter),
            Err(StockroomError::DuplicateProduct(id)) if id == "A1"
        ));
        assert_eq!(inv.get("A1").unwrap().name, "Widget");
        assert_eq!(inv.store().saves(), 1);
    }

    #[test]
    fn add_rejects_blank_id() {
        let mut inv = Inventory::open(InMemoryStore::new());
        let mut p = widget();
        p.id = "   ".into();
        assert!(matches!(inv.add(p), Err(StockroomError::InvalidId)));
        assert!(inv.is_empty());
    }

    #[test]
    fn update_missing_id_leaves_store_unchanged() {
        let mut inv = shelf();
        let before = inv.count();

        let result = inv.update("X", Product::new("X", "Ghost", 1.0, 1, "", ""));
        assert!(matches!(result, Err(StockroomError::ProductNotFound(_))));
        assert_eq!(inv.count(), before);
        assert!(inv.get("X").is_none());
        assert_eq!(inv.store().saves(), 0);
    }

    #[test]
    fn update_replaces_record() {
        let mut inv = shelf();
        let replacement = Product::new("A1", "Widget Pro", 3.0, 50, "Tools", "Bigger");
        inv.update("A1", replacement).unwrap();

        let stored = inv.get("A1").unwrap();
        assert_eq!(stored.name, "Widget Pro");
        assert_eq!(stored.quantity, 50);
        assert_eq!(inv.store().snapshot()["A1"].name, "Widget Pro");
    }

    #[test]
    fn update_rejects_diverging_id() {
        let mut inv = shelf();
        let result = inv.update("A1", Product::new("Z9", "Other", 1.0, 1, "", ""));
        assert!(matches!(result, Err(StockroomError::IdMismatch { .. })));
        assert_eq!(inv.get("A1").unwrap().name, "Widget");
        assert!(inv.get("Z9").is_none());
    }

    #[test]
    fn delete_returns_removed_product() {
        let mut inv = shelf();
        let removed = inv.delete("B1").unwrap();
        assert_eq!(removed.name, "Gadget");
        assert!(inv.get("B1").is_none());
        assert!(!inv.store().snapshot().contains_key("B1"));

        assert!(matches!(
            inv.delete("B1"),
            Err(StockroomError::ProductNotFound(_))
        ));
    }

    #[test]
    fn search_by_name_is_case_insensitive_substring() {
        let mut inv = Inventory::open(InMemoryStore::new());
        inv.add(Product::new("1", "Widget", 1.0, 1, "Tools", "")).unwrap();
        inv.add(Product::new("2", "Gadget", 1.0, 1, "Tools", "")).unwrap();

        let found = inv.search_by_name("wid");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Widget");

        assert_eq!(inv.search_by_name("GADG").len(), 1);
        assert_eq!(inv.search_by_name("DGET").len(), 2);
        assert_eq!(inv.search_by_name("").len(), 2);
    }

    #[test]
    fn search_by_category() {
        let inv = shelf();
        assert_eq!(ids(inv.search_by_category("tool")), vec!["A1", "A2"]);
        assert_eq!(ids(inv.search_by_category("ELEC")), vec!["B1"]);
        assert!(inv.search_by_category("garden").is_empty());
    }

    #[test]
    fn low_stock_lists_products_under_threshold() {
        let inv = shelf();
        assert_eq!(ids(inv.low_stock()), vec!["A1", "B1"]);
    }

    #[test]
    fn total_value_and_summary() {
        let inv = shelf();
        // 2.5*5 + 12*30 + 20*2
        assert_eq!(inv.total_value(), 412.5);

        let summary = inv.summary_by_category();
        assert_eq!(summary.len(), 2);
        assert_eq!(summary["Tools"], 35);
        assert_eq!(summary["Electronics"], 2);
    }

    #[test]
    fn empty_inventory_aggregates() {
        let inv = Inventory::open(InMemoryStore::new());
        assert_eq!(inv.total_value(), 0.0);
        assert!(inv.summary_by_category().is_empty());
        assert!(inv.list().is_empty());
        assert_eq!(inv.count(), 0);
    }

    #[test]
    fn adjust_quantity_missing_id() {
        let mut inv = shelf();
        assert!(matches!(
            inv.adjust_quantity("nope", 5),
            Err(StockroomError::ProductNotFound(_))
        ));
    }

    #[test]
    fn clear_empties_and_persists() {
        let mut inv = shelf();
        inv.clear();
        assert!(inv.is_empty());
        assert!(inv.store().snapshot().is_empty());
        assert_eq!(inv.store().saves(), 1);
    }

    #[test]
    fn widget_lifecycle() {
        let mut inv = Inventory::open(InMemoryStore::new());
        inv.add(widget()).unwrap();
        assert!(inv.get("A1").unwrap().is_low_stock());

        assert_eq!(inv.adjust_quantity("A1", 10).unwrap(), 15);
        assert!(!inv.get("A1").unwrap().is_low_stock());

        inv.delete("A1").unwrap();
        assert!(inv.get("A1").is_none());
    }

    #[test]
    fn failed_save_keeps_mutation() {
        let mut store = InMemoryStore::new();
        store.set_fail_writes(true);
        let mut inv = Inventory::open(store);

        inv.add(widget()).unwrap();
        assert!(inv.get("A1").is_some());
        assert_eq!(inv.adjust_quantity("A1", 1).unwrap(), 6);
        assert!(inv.store().snapshot().is_empty());
    }

    #[test]
    fn next_save_after_failure_writes_everything() {
        let mut store = InMemoryStore::new();
        store.set_fail_writes(true);
        let mut inv = Inventory::open(store);
        inv.add(widget()).unwrap();

        inv.store_mut().set_fail_writes(false);
        inv.add(Product::new("A2", "Hammer", 12.0, 30, "Tools", "")).unwrap();
        assert_eq!(inv.store().snapshot().len(), 2);
    }

    #[test]
    fn failed_load_starts_empty() {
        let mut store = StoreFixture::new().with_sample_shelf().build();
        store.set_fail_reads(true);
        let inv = Inventory::open(store);
        assert!(inv.is_empty());
    }

    #[test]
    fn corrupt_file_starts_empty() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("inventory.json"), "{ broken").unwrap();

        let inv = Inventory::open(FileStore::new(dir.path().to_path_buf()));
        assert!(inv.is_empty());
    }

    #[test]
    fn file_round_trip_preserves_all_fields() {
        let dir = TempDir::new().unwrap();
        let mut inv = Inventory::open(FileStore::new(dir.path().to_path_buf()));
        inv.add(widget()).unwrap();
        inv.add(Product::new("B2", "Gadget", 19.99, 40, "Electronics", "With \"quotes\""))
            .unwrap();
        drop(inv);

        let reloaded = Inventory::open(FileStore::new(dir.path().to_path_buf()));
        assert_eq!(reloaded.count(), 2);
        let gadget = reloaded.get("B2").unwrap();
        assert_eq!(gadget.name, "Gadget");
        assert_eq!(gadget.price, 19.99);
        assert_eq!(gadget.quantity, 40);
        assert_eq!(gadget.category, "Electronics");
        assert_eq!(gadget.description, "With \"quotes\"");
        assert_eq!(reloaded.get("A1").unwrap().description, "Small widget");
    }

    proptest! {
        #[test]
        fn adjust_quantity_clamps_to_zero(start in 0u32..100_000, delta in -200_000i64..200_000) {
            let mut inv = Inventory::open(InMemoryStore::new());
            inv.add(Product::new("P", "Prop", 1.0, start, "", "")).unwrap();

            let new_quantity = inv.adjust_quantity("P", delta).unwrap();
            let expected = (i64::from(start) + delta).max(0);
            prop_assert_eq!(i64::from(new_quantity), expected);
            prop_assert_eq!(inv.get("P").unwrap().quantity, new_quantity);
        }

        #[test]
        fn aggregates_match_records(
            items in prop::collection::vec((0u32..1_000, 0u32..500, 0usize..3), 0..20)
        ) {
            let categories = ["Tools", "Food", "Toys"];
            let mut inv = Inventory::open(InMemoryStore::new());
            let mut expected_value = 0.0;
            let mut expected_summary: HashMap<String, u64> = HashMap::new();

            for (i, (cents, quantity, cat)) in items.iter().enumerate() {
                let price = f64::from(*cents) / 100.0;
                let category = categories[*cat];
                inv.add(Product::new(i.to_string(), "item", price, *quantity, category, ""))
                    .unwrap();
                expected_value += price * f64::from(*quantity);
                *expected_summary.entry(category.to_string()).or_default() += u64::from(*quantity);
            }

            prop_assert!((inv.total_value() - expected_value).abs() < 1e-6);
            prop_assert_eq!(inv.summary_by_category(), expected_summary);
        }
    }
}
