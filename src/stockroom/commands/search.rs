use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::store::ProductStore;

use super::helpers::sorted_by_id;

/// Which products a search should return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductFilter {
    /// Case-insensitive substring of the name
    Name(String),
    /// Case-insensitive substring of the category
    Category(String),
    /// Quantity below the low-stock threshold
    LowStock,
}

impl ProductFilter {
    pub fn title(&self) -> String {
        match self {
            ProductFilter::Name(term) => format!("Products matching name: {}", term),
            ProductFilter::Category(term) => format!("Products in category: {}", term),
            ProductFilter::LowStock => "Low Stock Products".to_string(),
        }
    }
}

pub fn run<S: ProductStore>(inventory: &Inventory<S>, filter: &ProductFilter) -> Result<CmdResult> {
    let matches = match filter {
        ProductFilter::Name(term) => inventory.search_by_name(term),
        ProductFilter::Category(term) => inventory.search_by_category(term),
        ProductFilter::LowStock => inventory.low_stock(),
    };
    let products = sorted_by_id(matches);

    let mut result = CmdResult::default();
    if products.is_empty() {
        result.add_message(CmdMessage::info("No products found!"));
    } else {
        result.add_message(CmdMessage::info(format!(
            "Found {} product(s)",
            products.len()
        )));
    }
    Ok(result.with_listed_products(products))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn shelf() -> Inventory<InMemoryStore> {
        Inventory::open(StoreFixture::new().with_sample_shelf().build())
    }

    fn ids(result: &CmdResult) -> Vec<&str> {
        result.listed_products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn by_name() {
        let result = run(&shelf(), &ProductFilter::Name("wid".into())).unwrap();
        assert_eq!(ids(&result), vec!["A1"]);
        assert_eq!(result.messages[0].content, "Found 1 product(s)");
    }

    #[test]
    fn by_category() {
        let result = run(&shelf(), &ProductFilter::Category("TOOLS".into())).unwrap();
        assert_eq!(ids(&result), vec!["A1", "A2"]);
    }

    #[test]
    fn low_stock() {
        let result = run(&shelf(), &ProductFilter::LowStock).unwrap();
        assert_eq!(ids(&result), vec!["A1", "B1"]);
    }

    #[test]
    fn no_matches() {
        let result = run(&shelf(), &ProductFilter::Name("sprocket".into())).unwrap();
        assert!(result.listed_products.is_empty());
        assert_eq!(result.messages[0].content, "No products found!");
    }
}
