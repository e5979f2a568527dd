//! # Interactive Menu
//!
//! The numbered-menu shell: prompts for each field, validates what it reads, calls the API
//! and renders the result. It is generic over its input and output so tests can script a
//! whole session with a byte slice.
//!
//! Nothing the user types can end the session except choosing Exit or closing the input.
//! API errors are printed and the loop continues.

use super::render::{
    render_error, render_messages, render_product_details, render_product_list, render_report,
};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use stockroom::api::{CmdResult, ProductFilter, ProductUpdate, ReportKind, StockroomApi};
use stockroom::error::Result;
use stockroom::model::Product;
use stockroom::store::ProductStore;

const RULE: usize = 50;

pub struct Menu<'a, S: ProductStore, R: BufRead, W: Write> {
    api: &'a mut StockroomApi<S>,
    input: R,
    out: W,
}

impl<'a, S: ProductStore, R: BufRead, W: Write> Menu<'a, S, R, W> {
    pub fn new(api: &'a mut StockroomApi<S>, input: R, out: W) -> Self {
        Self { api, input, out }
    }

    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", "=== STOCKROOM INVENTORY ===".bold())?;
        writeln!(self.out, "Welcome to Stockroom!")?;

        loop {
            self.print_main_menu()?;
            let Some(choice) = self.read_int("Enter your choice: ")? else {
                break;
            };

            match choice {
                1 => self.add_product()?,
                2 => self.update_product()?,
                3 => self.delete_product()?,
                4 => self.view_product()?,
                5 => self.view_all()?,
                6 => self.search()?,
                7 => self.update_quantity()?,
                8 => self.reports()?,
                9 => {
                    writeln!(self.out, "Thank you for using Stockroom!")?;
                    return Ok(());
                }
                _ => writeln!(self.out, "Invalid choice! Please try again.")?,
            }

            write!(self.out, "\nPress Enter to continue...")?;
            self.out.flush()?;
            if self.read_line()?.is_none() {
                break;
            }
        }

        writeln!(self.out)?;
        Ok(())
    }

    fn print_main_menu(&mut self) -> io::Result<()> {
        let rule = "=".repeat(RULE);
        writeln!(self.out, "\n{}", rule)?;
        writeln!(self.out, "           MAIN MENU")?;
        writeln!(self.out, "{}", rule)?;
        for (n, label) in [
            "Add Product",
            "Update Product",
            "Delete Product",
            "View Product Details",
            "View All Products",
            "Search Products",
            "Update Product Quantity",
            "Generate Reports",
            "Exit",
        ]
        .iter()
        .enumerate()
        {
            writeln!(self.out, "{}. {}", n + 1, label)?;
        }
        writeln!(self.out, "{}", rule)
    }

    fn add_product(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n--- ADD NEW PRODUCT ---")?;

        let Some(id) = self.prompt("Enter Product ID: ")? else {
            return Ok(());
        };
        if id.is_empty() {
            return self.notice("Product ID cannot be empty!");
        }

        let Some(name) = self.prompt("Enter Product Name: ")? else {
            return Ok(());
        };
        if name.is_empty() {
            return self.notice("Product Name cannot be empty!");
        }

        let Some(price) = self.read_float("Enter Price: $")? else {
            return Ok(());
        };
        if price < 0.0 {
            return self.notice("Price cannot be negative!");
        }

        let Some(quantity) = self.read_int("Enter Quantity: ")? else {
            return Ok(());
        };
        if quantity < 0 {
            return self.notice("Quantity cannot be negative!");
        }
        let Ok(quantity) = u32::try_from(quantity) else {
            return self.notice("Quantity is too large!");
        };

        let Some(category) = self.prompt("Enter Category: ")? else {
            return Ok(());
        };
        let Some(description) = self.prompt("Enter Description: ")? else {
            return Ok(());
        };

        let product = Product::new(id, name, price, quantity, category, description);
        let result = self.api.add_product(product);
        self.show(result)
    }

    fn update_product(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n--- UPDATE PRODUCT ---")?;
        if self.api.inventory().is_empty() {
            return self.notice("No products in inventory!");
        }

        let Some(id) = self.prompt("Enter Product ID to update: ")? else {
            return Ok(());
        };
        let Some(existing) = self.api.inventory().get(&id).cloned() else {
            return self.notice("Product not found!");
        };

        writeln!(self.out, "Current Product Details:")?;
        writeln!(self.out, "{}", existing)?;
        writeln!(
            self.out,
            "\nEnter new details (press Enter to keep current value):"
        )?;

        let mut update = ProductUpdate::default();

        let Some(name) = self.prompt(&format!("Enter Product Name [{}]: ", existing.name))? else {
            return Ok(());
        };
        if !name.is_empty() {
            update.name = Some(name);
        }

        let Some(price) = self.prompt(&format!("Enter Price [{}]: ", existing.price))? else {
            return Ok(());
        };
        if !price.is_empty() {
            match price.parse::<f64>() {
                Ok(p) if p < 0.0 => {
                    self.notice("Price cannot be negative! Keeping current value.")?
                }
                Ok(p) if p.is_finite() => update.price = Some(p),
                _ => self.notice("Invalid price format! Keeping current value.")?,
            }
        }

        let Some(quantity) =
            self.prompt(&format!("Enter Quantity [{}]: ", existing.quantity))?
        else {
            return Ok(());
        };
        if !quantity.is_empty() {
            match quantity.parse::<i64>() {
                Ok(q) if q < 0 => {
                    self.notice("Quantity cannot be negative! Keeping current value.")?
                }
                Ok(q) => match u32::try_from(q) {
                    Ok(q) => update.quantity = Some(q),
                    Err(_) => self.notice("Quantity is too large! Keeping current value.")?,
                },
                Err(_) => self.notice("Invalid quantity format! Keeping current value.")?,
            }
        }

        let Some(category) =
            self.prompt(&format!("Enter Category [{}]: ", existing.category))?
        else {
            return Ok(());
        };
        if !category.is_empty() {
            update.category = Some(category);
        }

        let Some(description) =
            self.prompt(&format!("Enter Description [{}]: ", existing.description))?
        else {
            return Ok(());
        };
        if !description.is_empty() {
            update.description = Some(description);
        }

        let result = self.api.update_product(&id, &update);
        self.show(result)
    }

    fn delete_product(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n--- DELETE PRODUCT ---")?;
        if self.api.inventory().is_empty() {
            return self.notice("No products in inventory!");
        }

        let Some(id) = self.prompt("Enter Product ID to delete: ")? else {
            return Ok(());
        };
        let Some(product) = self.api.inventory().get(&id).cloned() else {
            return self.notice("Product not found!");
        };

        writeln!(self.out, "Product to delete:")?;
        writeln!(self.out, "{}", product)?;

        let Some(confirm) =
            self.prompt("Are you sure you want to delete this product? (yes/no): ")?
        else {
            return Ok(());
        };
        if confirm.eq_ignore_ascii_case("yes") {
            let result = self.api.delete_product(&id);
            self.show(result)
        } else {
            self.notice("Deletion cancelled.")
        }
    }

    fn view_product(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n--- VIEW PRODUCT ---")?;

        let Some(id) = self.prompt("Enter Product ID: ")? else {
            return Ok(());
        };
        match self.api.view_product(&id) {
            Ok(result) => {
                writeln!(self.out, "\nProduct Details:")?;
                for product in &result.listed_products {
                    write!(self.out, "{}", render_product_details(product))?;
                }
                Ok(())
            }
            Err(_) => self.notice("Product not found!"),
        }
    }

    fn view_all(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n--- ALL PRODUCTS ---")?;
        let result = self.api.list_products();
        self.show(result)
    }

    fn search(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n--- SEARCH PRODUCTS ---")?;
        writeln!(self.out, "1. Search by Name")?;
        writeln!(self.out, "2. Search by Category")?;
        writeln!(self.out, "3. View Low Stock Products")?;

        let Some(choice) = self.read_int("Enter search option: ")? else {
            return Ok(());
        };
        let filter = match choice {
            1 => match self.prompt("Enter product name to search: ")? {
                Some(term) => ProductFilter::Name(term),
                None => return Ok(()),
            },
            2 => match self.prompt("Enter category to search: ")? {
                Some(term) => ProductFilter::Category(term),
                None => return Ok(()),
            },
            3 => ProductFilter::LowStock,
            _ => return self.notice("Invalid choice!"),
        };

        writeln!(self.out, "\n--- {} ---", filter.title().to_uppercase())?;
        let result = self.api.search_products(&filter);
        self.show(result)
    }

    fn update_quantity(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n--- UPDATE QUANTITY ---")?;
        if self.api.inventory().is_empty() {
            return self.notice("No products in inventory!");
        }

        let Some(id) = self.prompt("Enter Product ID: ")? else {
            return Ok(());
        };
        let Some(current) = self.api.inventory().get(&id).map(|p| p.quantity) else {
            return self.notice("Product not found!");
        };

        writeln!(self.out, "Current quantity: {}", current)?;
        let Some(delta) = self.read_int("Enter quantity change (+/-): ")? else {
            return Ok(());
        };
        let result = self.api.adjust_quantity(&id, delta);
        self.show(result)
    }

    fn reports(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n--- INVENTORY REPORTS ---")?;
        if self.api.inventory().is_empty() {
            return self.notice("No products in inventory!");
        }

        writeln!(self.out, "1. Inventory Summary")?;
        writeln!(self.out, "2. Low Stock Report")?;
        writeln!(self.out, "3. Category Summary")?;
        writeln!(self.out, "4. All Reports")?;

        let Some(choice) = self.read_int("Enter report option: ")? else {
            return Ok(());
        };
        let kind = match choice {
            1 => ReportKind::Summary,
            2 => ReportKind::LowStock,
            3 => ReportKind::Categories,
            4 => ReportKind::All,
            _ => return self.notice("Invalid choice!"),
        };
        let result = self.api.report(kind);
        self.show(result)
    }

    fn show(&mut self, result: Result<CmdResult>) -> io::Result<()> {
        match result {
            Ok(result) => {
                if !result.listed_products.is_empty() {
                    write!(self.out, "{}", render_product_list(&result.listed_products))?;
                }
                if let Some(report) = &result.report {
                    write!(self.out, "{}", render_report(report))?;
                }
                write!(self.out, "{}", render_messages(&result.messages))
            }
            Err(e) => write!(self.out, "{}", render_error(&e)),
        }
    }

    fn notice(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    /// Reads one line, without the trailing newline. `None` means the input is closed.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;
        Ok(self.read_line()?.map(|s| s.trim().to_string()))
    }

    /// Prompts until the answer parses as a whole number.
    fn read_int(&mut self, text: &str) -> io::Result<Option<i64>> {
        loop {
            let Some(answer) = self.prompt(text)? else {
                return Ok(None);
            };
            match answer.parse::<i64>() {
                Ok(n) => return Ok(Some(n)),
                Err(_) => writeln!(self.out, "Invalid input! Please enter a valid number.")?,
            }
        }
    }

    fn read_float(&mut self, text: &str) -> io::Result<Option<f64>> {
        loop {
            let Some(answer) = self.prompt(text)? else {
                return Ok(None);
            };
            match answer.parse::<f64>() {
                Ok(n) if n.is_finite() => return Ok(Some(n)),
                _ => writeln!(self.out, "Invalid input! Please enter a valid number.")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom::api::StockroomPaths;
    use stockroom::store::memory::InMemoryStore;

    fn api_with(products: Vec<Product>) -> StockroomApi<InMemoryStore> {
        let paths = StockroomPaths {
            project: None,
            global: None,
        };
        let mut api = StockroomApi::new(InMemoryStore::new(), paths);
        for p in products {
            api.add_product(p).unwrap();
        }
        api
    }

    fn session(api: &mut StockroomApi<InMemoryStore>, script: &str) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        Menu::new(api, script.as_bytes(), &mut out).run().unwrap();
        String::from_utf8(out).unwrap()
    }

    fn widget() -> Product {
        Product::new("A1", "Widget", 2.5, 5, "Tools", "Small widget")
    }

    #[test]
    fn exit_immediately() {
        let mut api = api_with(vec![]);
        let out = session(&mut api, "9\n");
        assert!(out.contains("MAIN MENU"));
        assert!(out.contains("Thank you for using Stockroom!"));
    }

    #[test]
    fn closed_input_ends_session() {
        let mut api = api_with(vec![]);
        let out = session(&mut api, "");
        assert!(out.contains("Enter your choice: "));
        assert!(!out.contains("Thank you"));
    }

    #[test]
    fn add_product_with_retry_on_bad_number() {
        let mut api = api_with(vec![]);
        let out = session(
            &mut api,
            "1\nA1\nWidget\nabc\n2.50\n5\nTools\nSmall widget\n\n9\n",
        );

        assert!(out.contains("Invalid input! Please enter a valid number."));
        assert!(out.contains("Product added successfully!"));
        let p = api.inventory().get("A1").unwrap();
        assert_eq!(p.price, 2.5);
        assert_eq!(p.quantity, 5);
        assert_eq!(p.description, "Small widget");
    }

    #[test]
    fn add_rejects_negative_quantity_and_blank_id() {
        let mut api = api_with(vec![]);
        let out = session(&mut api, "1\n\n\n1\nA1\nWidget\n1\n-4\n\n9\n");
        assert!(out.contains("Product ID cannot be empty!"));
        assert!(out.contains("Quantity cannot be negative!"));
        assert!(api.inventory().is_empty());
    }

    #[test]
    fn duplicate_add_is_reported_and_session_continues() {
        let mut api = api_with(vec![widget()]);
        let out = session(&mut api, "1\nA1\nOther\n1\n1\n\n\n\n9\n");
        assert!(out.contains("Product with ID 'A1' already exists!"));
        assert!(out.contains("Thank you for using Stockroom!"));
        assert_eq!(api.inventory().get("A1").unwrap().name, "Widget");
    }

    #[test]
    fn update_keeps_blank_fields() {
        let mut api = api_with(vec![widget()]);
        let out = session(&mut api, "2\nA1\n\n-3\n40\n\nShiny\n\n9\n");

        assert!(out.contains("Price cannot be negative! Keeping current value."));
        assert!(out.contains("Product updated successfully!"));
        let p = api.inventory().get("A1").unwrap();
        assert_eq!(p.name, "Widget");
        assert_eq!(p.price, 2.5);
        assert_eq!(p.quantity, 40);
        assert_eq!(p.description, "Shiny");
    }

    #[test]
    fn update_on_empty_inventory() {
        let mut api = api_with(vec![]);
        let out = session(&mut api, "2\n\n9\n");
        assert!(out.contains("No products in inventory!"));
    }

    #[test]
    fn delete_requires_yes() {
        let mut api = api_with(vec![widget()]);
        let out = session(&mut api, "3\nA1\nno\n\n3\nA1\nYES\n\n9\n");
        assert!(out.contains("Deletion cancelled."));
        assert!(out.contains("Product 'Widget' deleted successfully!"));
        assert!(api.inventory().get("A1").is_none());
    }

    #[test]
    fn view_product_details() {
        let mut api = api_with(vec![widget()]);
        let out = session(&mut api, "4\nA1\n\n4\nZZ\n\n9\n");
        assert!(out.contains("Total Value: $12.50"));
        assert!(out.contains("Low Stock: Yes"));
        assert!(out.contains("Product not found!"));
    }

    #[test]
    fn search_by_name() {
        let mut api = api_with(vec![
            widget(),
            Product::new("B1", "Gadget", 20.0, 2, "Electronics", ""),
        ]);
        let out = session(&mut api, "6\n1\nwid\n\n9\n");
        assert!(out.contains("--- PRODUCTS MATCHING NAME: WID ---"));
        assert!(out.contains("Found 1 product(s)"));
        assert!(out.contains("Widget"));
        assert!(!out.contains("Gadget"));
    }

    #[test]
    fn adjust_quantity_then_report() {
        let mut api = api_with(vec![widget()]);
        let out = session(&mut api, "7\nA1\n10\n\n8\n4\n\n9\n");
        assert!(out.contains("Current quantity: 5"));
        assert!(out.contains("Quantity updated successfully! New quantity: 15"));
        assert!(out.contains("Total Inventory Value: $37.50"));
        assert!(out.contains("No products with low stock!"));
        assert!(out.contains("Tools: 15 items"));
    }

    #[test]
    fn invalid_menu_choice() {
        let mut api = api_with(vec![]);
        let out = session(&mut api, "42\n\n9\n");
        assert!(out.contains("Invalid choice! Please try again."));
    }
}
