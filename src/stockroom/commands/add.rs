use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::model::Product;
use crate::store::ProductStore;

use super::helpers::validate_product;

pub fn run<S: ProductStore>(inventory: &mut Inventory<S>, product: Product) -> Result<CmdResult> {
    validate_product(&product)?;
    inventory.add(product.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Product added successfully!"));
    if product.is_low_stock() {
        result.add_message(CmdMessage::warning(format!(
            "'{}' is already low on stock ({} left)",
            product.name, product.quantity
        )));
    }
    Ok(result.with_affected_products(vec![product]))
}
