use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::store::ProductStore;

pub fn run<S: ProductStore>(inventory: &mut Inventory<S>, id: &str) -> Result<CmdResult> {
    let removed = inventory.delete(id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Product '{}' deleted successfully!",
        removed.name
    )));
    Ok(result.with_affected_products(vec![removed]))
}
