use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::store::ProductStore;

use super::helpers::sorted_by_id;

pub fn run<S: ProductStore>(inventory: &Inventory<S>) -> Result<CmdResult> {
    if inventory.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("No products in inventory!"));
        return Ok(result);
    }

    let products = sorted_by_id(inventory.list());
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "Total Products: {} | Total Inventory Value: ${:.2}",
        products.len(),
        inventory.total_value()
    )));
    Ok(result.with_listed_products(products))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn lists_sorted_with_totals() {
        let inv = Inventory::open(StoreFixture::new().with_sample_shelf().build());
        let result = run(&inv).unwrap();

        let ids: Vec<_> = result.listed_products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["A1", "A2", "B1"]);
        assert_eq!(
            result.messages[0].content,
            "Total Products: 3 | Total Inventory Value: $412.50"
        );
    }

    #[test]
    fn empty_inventory() {
        let inv = Inventory::open(InMemoryStore::new());
        let result = run(&inv).unwrap();
        assert!(result.listed_products.is_empty());
        assert_eq!(result.messages[0].content, "No products in inventory!");
    }
}
