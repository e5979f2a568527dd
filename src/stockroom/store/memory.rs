use super::ProductStore;
use crate::error::{Result, StockroomError};
use crate::model::Product;
use std::collections::HashMap;
use std::io;

/// In-memory storage for testing and development.
/// Does NOT persist data beyond the lifetime of the value.
#[derive(Default)]
pub struct InMemoryStore {
    products: HashMap<String, Product>,
    saves: usize,
    fail_reads: bool,
    fail_writes: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful saves so far.
    pub fn saves(&self) -> usize {
        self.saves
    }

    /// The last snapshot that was saved (or seeded).
    pub fn snapshot(&self) -> &HashMap<String, Product> {
        &self.products
    }

    pub fn set_fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }
}

impl ProductStore for InMemoryStore {
    fn load(&self) -> Result<HashMap<String, Product>> {
        if self.fail_reads {
            return Err(StockroomError::Io(io::Error::other("simulated read failure")));
        }
        Ok(self.products.clone())
    }

    fn save(&mut self, products: &HashMap<String, Product>) -> Result<()> {
        if self.fail_writes {
            return Err(StockroomError::Io(io::Error::other("simulated write failure")));
        }
        self.products = products.clone();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Seeds a product without counting it as a save.
        pub fn with_product(mut self, product: Product) -> Self {
            self.store.products.insert(product.id.clone(), product);
            self
        }

        pub fn with_products(mut self, count: usize, category: &str) -> Self {
            for i in 0..count {
                let id = format!("{}-{}", category.to_uppercase(), i + 1);
                let product = Product::new(
                    id,
                    format!("{} item {}", category, i + 1),
                    1.0,
                    10,
                    category,
                    "",
                );
                self.store.products.insert(product.id.clone(), product);
            }
            self
        }

        /// The usual three-product shelf: one low-stock tool, one stocked tool, one gadget.
        pub fn with_sample_shelf(self) -> Self {
            self.with_product(Product::new("A1", "Widget", 2.5, 5, "Tools", "Small widget"))
                .with_product(Product::new("A2", "Hammer", 12.0, 30, "Tools", "Claw hammer"))
                .with_product(Product::new(
                    "B1",
                    "Gadget",
                    20.0,
                    2,
                    "Electronics",
                    "Blinking gadget",
                ))
        }

        pub fn build(self) -> InMemoryStore {
            self.store
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;

    #[test]
    fn save_then_load_returns_snapshot() {
        let mut store = InMemoryStore::new();
        let mut products = HashMap::new();
        products.insert("A1".into(), Product::new("A1", "Widget", 1.0, 1, "", ""));
        store.save(&products).unwrap();

        assert_eq!(store.saves(), 1);
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn simulated_failures() {
        let mut store = StoreFixture::new().with_products(2, "misc").build();
        store.set_fail_reads(true);
        assert!(store.load().is_err());

        store.set_fail_writes(true);
        assert!(store.save(&HashMap::new()).is_err());
        assert_eq!(store.snapshot().len(), 2);
        assert_eq!(store.saves(), 0);
    }
}
