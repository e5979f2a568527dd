use crate::commands::{CmdMessage, CmdResult, ProductUpdate};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::store::ProductStore;

use super::helpers::{find_product, validate_product};

pub fn run<S: ProductStore>(
    inventory: &mut Inventory<S>,
    id: &str,
    update: &ProductUpdate,
) -> Result<CmdResult> {
    let mut product = find_product(inventory, id)?.clone();

    if update.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("Nothing to update."));
        return Ok(result.with_affected_products(vec![product]));
    }

    if let Some(name) = &update.name {
        product.name = name.clone();
    }
    if let Some(price) = update.price {
        product.price = price;
    }
    if let Some(quantity) = update.quantity {
        product.quantity = quantity;
    }
    if let Some(category) = &update.category {
        product.category = category.clone();
    }
    if let Some(description) = &update.description {
        product.description = description.clone();
    }

    validate_product(&product)?;
    inventory.update(id, product.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Product updated successfully!"));
    Ok(result.with_affected_products(vec![product]))
}
