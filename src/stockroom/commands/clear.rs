use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::store::ProductStore;

use super::helpers::sorted_by_id;

pub fn run<S: ProductStore>(inventory: &mut Inventory<S>) -> Result<CmdResult> {
    let removed = sorted_by_id(inventory.list());
    inventory.clear();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Inventory cleared!"));
    Ok(result.with_affected_products(removed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn clears_everything() {
        let mut inv = Inventory::open(StoreFixture::new().with_sample_shelf().build());
        let result = run(&mut inv).unwrap();

        assert_eq!(result.affected_products.len(), 3);
        assert!(inv.is_empty());
        assert!(inv.store().snapshot().is_empty());
    }
}
