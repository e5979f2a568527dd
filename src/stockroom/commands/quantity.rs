use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::store::ProductStore;

use super::helpers::find_product;

pub fn run<S: ProductStore>(inventory: &mut Inventory<S>, id: &str, delta: i64) -> Result<CmdResult> {
    let quantity = inventory.adjust_quantity(id, delta)?;
    let product = find_product(inventory, id)?.clone();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Quantity updated successfully! New quantity: {}",
        quantity
    )));
    if product.is_low_stock() {
        result.add_message(CmdMessage::warning(format!(
            "'{}' is low on stock",
            product.name
        )));
    }
    Ok(result.with_affected_products(vec![product]))
}
