use crate::commands::CmdResult;
use crate::error::Result;
use crate::inventory::Inventory;
use crate::store::ProductStore;

use super::helpers::find_product;

pub fn run<S: ProductStore>(inventory: &Inventory<S>, id: &str) -> Result<CmdResult> {
    let product = find_product(inventory, id)?.clone();
    Ok(CmdResult::default().with_listed_products(vec![product]))
}
