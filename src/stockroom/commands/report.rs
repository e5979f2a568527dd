use crate::commands::{CmdMessage, CmdResult, InventoryReport, InventorySummary};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::store::ProductStore;
use std::collections::BTreeMap;

use super::helpers::sorted_by_id;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Summary,
    LowStock,
    Categories,
    All,
}

pub fn run<S: ProductStore>(inventory: &Inventory<S>, kind: ReportKind) -> Result<CmdResult> {
    if inventory.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("No products in inventory!"));
        return Ok(result);
    }

    let wants = |k: ReportKind| kind == k || kind == ReportKind::All;
    let mut report = InventoryReport::default();

    if wants(ReportKind::Summary) {
        report.summary = Some(InventorySummary {
            product_count: inventory.count(),
            total_value: inventory.total_value(),
        });
    }
    if wants(ReportKind::LowStock) {
        report.low_stock = Some(sorted_by_id(inventory.low_stock()));
    }
    if wants(ReportKind::Categories) {
        let categories: BTreeMap<String, u64> =
            inventory.summary_by_category().into_iter().collect();
        report.categories = Some(categories);
    }

    Ok(CmdResult::default().with_report(report))
}
