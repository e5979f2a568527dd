//! # Rendering
//!
//! Turns `CmdResult` pieces into terminal text. Every function returns a `String` so the
//! subcommand handlers can `print!` it and the interactive menu can write it to whatever
//! output it was given.
//!
//! Layout (column widths, truncation) is computed on plain text with `unicode-width`, and
//! color is applied afterwards so escape codes never count toward a column.

use colored::{ColoredString, Colorize};
use std::fmt::Write;
use stockroom::api::{CmdMessage, InventoryReport, MessageLevel};
use stockroom::config::{StockroomConfig, CONFIG_KEYS};
use stockroom::model::{Product, LOW_STOCK_THRESHOLD};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ID_WIDTH: usize = 10;
const NAME_WIDTH: usize = 24;
const PRICE_WIDTH: usize = 10;
const QTY_WIDTH: usize = 8;
const CATEGORY_WIDTH: usize = 16;
const RULE_WIDTH: usize = 100;

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let styled = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        let _ = writeln!(out, "{}", styled);
    }
    out
}

pub fn render_error(error: &impl std::fmt::Display) -> String {
    format!("{}\n", error.to_string().red())
}

/// One row per product, ID / name / price / quantity / category.
pub fn render_product_list(products: &[Product]) -> String {
    if products.is_empty() {
        return "No products found.\n".to_string();
    }

    let mut out = String::new();
    let header = format!(
        "{}{}{}{}  Category",
        pad_right("ID", ID_WIDTH),
        pad_right("Name", NAME_WIDTH),
        pad_left("Price", PRICE_WIDTH),
        pad_left("Qty", QTY_WIDTH),
    );
    let _ = writeln!(out, "{}", header.bold());
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH).dimmed());

    for p in products {
        let qty = pad_left(&p.quantity.to_string(), QTY_WIDTH);
        let qty: ColoredString = if p.is_low_stock() {
            qty.yellow()
        } else {
            qty.normal()
        };
        let _ = writeln!(
            out,
            "{}{}{}{}  {}",
            pad_right(&p.id, ID_WIDTH).cyan(),
            pad_right(&p.name, NAME_WIDTH),
            pad_left(&format!("${:.2}", p.price), PRICE_WIDTH),
            qty,
            truncate_to_width(&p.category, CATEGORY_WIDTH).dimmed(),
        );
    }
    out
}

/// The full record plus its derived values.
pub fn render_product_details(product: &Product) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", product);
    let _ = writeln!(out, "Total Value: ${:.2}", product.total_value());
    let low = if product.is_low_stock() {
        "Yes".yellow()
    } else {
        "No".normal()
    };
    let _ = writeln!(out, "Low Stock: {}", low);
    out
}

pub fn render_report(report: &InventoryReport) -> String {
    let mut out = String::new();

    if let Some(summary) = &report.summary {
        let _ = writeln!(out, "\n{}", "--- INVENTORY SUMMARY ---".bold());
        let _ = writeln!(out, "Total Products: {}", summary.product_count);
        let _ = writeln!(out, "Total Inventory Value: ${:.2}", summary.total_value);
    }

    if let Some(low_stock) = &report.low_stock {
        let _ = writeln!(out, "\n{}", "--- LOW STOCK REPORT ---".bold());
        if low_stock.is_empty() {
            let _ = writeln!(out, "No products with low stock!");
        } else {
            let _ = writeln!(
                out,
                "Products with low stock (< {} items):",
                LOW_STOCK_THRESHOLD
            );
            let _ = writeln!(out, "{}", "-".repeat(80).dimmed());
            for p in low_stock {
                let _ = writeln!(
                    out,
                    "{} (ID: {}) - Quantity: {}",
                    p.name,
                    p.id,
                    p.quantity.to_string().yellow()
                );
            }
        }
    }

    if let Some(categories) = &report.categories {
        let _ = writeln!(out, "\n{}", "--- CATEGORY SUMMARY ---".bold());
        if categories.is_empty() {
            let _ = writeln!(out, "No categories found!");
        } else {
            let _ = writeln!(out, "Quantity by Category:");
            let _ = writeln!(out, "{}", "-".repeat(40).dimmed());
            for (category, units) in categories {
                let label = if category.is_empty() {
                    "(uncategorized)"
                } else {
                    category.as_str()
                };
                let _ = writeln!(out, "{}: {} items", label, units);
            }
        }
    }

    out
}

pub fn render_config(config: &StockroomConfig) -> String {
    let mut out = String::new();
    for key in CONFIG_KEYS {
        if let Some(value) = config.get(key) {
            let _ = writeln!(out, "{} = {}", key, value);
        }
    }
    out
}

fn pad_right(s: &str, width: usize) -> String {
    let cell = truncate_to_width(s, width.saturating_sub(1));
    let padding = width.saturating_sub(cell.width());
    format!("{}{}", cell, " ".repeat(padding))
}

fn pad_left(s: &str, width: usize) -> String {
    let cell = truncate_to_width(s, width);
    let padding = width.saturating_sub(cell.width());
    format!("{}{}", " ".repeat(padding), cell)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}
