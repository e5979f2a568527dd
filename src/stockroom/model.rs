use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Products with fewer units than this are reported as low stock.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    Project,
    Global,
}

/// A single inventory item.
///
/// Identity is the `id` alone: two products with the same id compare equal and hash the
/// same regardless of their other fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub category: String,
    pub description: String,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        quantity: u32,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            quantity,
            category: category.into(),
            description: description.into(),
        }
    }

    pub fn total_value(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }

    pub fn is_low_stock(&self) -> bool {
        self.quantity < LOW_STOCK_THRESHOLD
    }

    /// Adds `delta` to the quantity, clamping at zero (and at `u32::MAX` on the way up).
    pub fn adjust_quantity(&mut self, delta: i64) {
        let next = i64::from(self.quantity).saturating_add(delta).max(0);
        self.quantity = u32::try_from(next).unwrap_or(u32::MAX);
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Product {}

impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | Name: {} | Price: ${:.2} | Quantity: {} | Category: {} | Description: {}",
            self.id, self.name, self.price, self.quantity, self.category, self.description
        )
    }
}
