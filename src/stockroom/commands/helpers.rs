use crate::error::{Result, StockroomError};
use crate::inventory::Inventory;
use crate::model::Product;
use crate::store::ProductStore;

/// Checks the fields a caller must get right before a product reaches the inventory.
pub fn validate_product(product: &Product) -> Result<()> {
    if product.id.trim().is_empty() {
        return Err(StockroomError::InvalidId);
    }
    if product.name.trim().is_empty() {
        return Err(StockroomError::Validation(
            "Product Name cannot be empty!".to_string(),
        ));
    }
    validate_price(product.price)
}

pub fn validate_price(price: f64) -> Result<()> {
    if !price.is_finite() {
        return Err(StockroomError::Validation(format!(
            "Invalid price: {}",
            price
        )));
    }
    if price < 0.0 {
        return Err(StockroomError::Validation(
            "Price cannot be negative!".to_string(),
        ));
    }
    Ok(())
}

pub fn find_product<'a, S: ProductStore>(inventory: &'a Inventory<S>, id: &str) -> Result<&'a Product> {
    inventory
        .get(id)
        .ok_or_else(|| StockroomError::ProductNotFound(id.to_string()))
}

/// Clones and orders products by id so listings are stable between runs.
pub fn sorted_by_id(products: Vec<&Product>) -> Vec<Product> {
    let mut owned: Vec<Product> = products.into_iter().cloned().collect();
    owned.sort_by(|a, b| a.id.cmp(&b.id));
    owned
}
