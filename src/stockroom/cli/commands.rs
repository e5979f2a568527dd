use super::menu::Menu;
use super::render::{
    render_config, render_messages, render_product_details, render_product_list, render_report,
};
use super::setup::{Cli, Commands};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use stockroom::api::{CmdResult, ConfigAction, ProductFilter, ProductUpdate, StockroomApi};
use stockroom::error::{Result, StockroomError};
use stockroom::init::{initialize, StockroomContext};
use stockroom::logging;
use stockroom::model::Product;
use stockroom::store::fs::FileStore;

struct AppContext {
    api: StockroomApi<FileStore>,
    scope: stockroom::model::Scope,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            id,
            name,
            price,
            quantity,
            category,
            description,
        }) => handle_add(
            &mut ctx,
            Product::new(id, name, price, quantity, category, description),
        ),
        Some(Commands::Update {
            id,
            name,
            price,
            quantity,
            category,
            description,
        }) => {
            let update = ProductUpdate {
                name,
                price,
                quantity,
                category,
                description,
            };
            handle_update(&mut ctx, id, update)
        }
        Some(Commands::Delete { id, yes }) => handle_delete(&mut ctx, id, yes),
        Some(Commands::View { id }) => handle_view(&ctx, id),
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Search { term, category }) => {
            let filter = if category {
                ProductFilter::Category(term)
            } else {
                ProductFilter::Name(term)
            };
            handle_search(&ctx, filter)
        }
        Some(Commands::LowStock) => handle_search(&ctx, ProductFilter::LowStock),
        Some(Commands::Adjust { id, delta }) => handle_adjust(&mut ctx, id, delta),
        Some(Commands::Report { kind }) => handle_report(&ctx, kind.into()),
        Some(Commands::Clear { yes }) => handle_clear(&mut ctx, yes),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Init) => handle_init(&ctx),
        Some(Commands::Menu) | None => handle_menu(&mut ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let StockroomContext { api, scope, config } =
        initialize(&cwd, cli.global, cli.data_dir.as_deref())?;

    tracing::debug!(
        scope = ?scope,
        data_file = %config.data_file,
        products = api.inventory().count(),
        "context ready"
    );

    Ok(AppContext { api, scope })
}

fn print_result(result: &CmdResult) {
    if !result.listed_products.is_empty() {
        print!("{}", render_product_list(&result.listed_products));
    }
    if let Some(report) = &result.report {
        print!("{}", render_report(report));
    }
    print!("{}", render_messages(&result.messages));
}

fn handle_add(ctx: &mut AppContext, product: Product) -> Result<()> {
    let result = ctx.api.add_product(product)?;
    print_result(&result);
    Ok(())
}

fn handle_update(ctx: &mut AppContext, id: String, update: ProductUpdate) -> Result<()> {
    let result = ctx.api.update_product(&id, &update)?;
    print_result(&result);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: String, yes: bool) -> Result<()> {
    let Some(product) = ctx.api.inventory().get(&id).cloned() else {
        return Err(StockroomError::ProductNotFound(id));
    };

    if !yes {
        println!("Product to delete:");
        println!("{}", product);
        if !confirm("Are you sure you want to delete this product? (yes/no): ")? {
            println!("Deletion cancelled.");
            return Ok(());
        }
    }

    let result = ctx.api.delete_product(&id)?;
    print_result(&result);
    Ok(())
}

fn handle_view(ctx: &AppContext, id: String) -> Result<()> {
    let result = ctx.api.view_product(&id)?;
    for product in &result.listed_products {
        print!("{}", render_product_details(product));
    }
    print!("{}", render_messages(&result.messages));
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_products()?;
    print_result(&result);
    Ok(())
}

fn handle_search(ctx: &AppContext, filter: ProductFilter) -> Result<()> {
    let result = ctx.api.search_products(&filter)?;
    print_result(&result);
    Ok(())
}

fn handle_adjust(ctx: &mut AppContext, id: String, delta: i64) -> Result<()> {
    let result = ctx.api.adjust_quantity(&id, delta)?;
    print_result(&result);
    Ok(())
}

fn handle_report(ctx: &AppContext, kind: stockroom::api::ReportKind) -> Result<()> {
    let result = ctx.api.report(kind)?;
    print_result(&result);
    Ok(())
}

fn handle_clear(ctx: &mut AppContext, yes: bool) -> Result<()> {
    if !yes {
        let count = ctx.api.inventory().count();
        let question = format!("Remove all {} product(s)? (yes/no): ", count);
        if !confirm(&question)? {
            println!("Clear cancelled.");
            return Ok(());
        }
    }

    let result = ctx.api.clear()?;
    print_result(&result);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
        (key, _) => ConfigAction::Show(key),
    };

    let result = ctx.api.config(ctx.scope, action)?;
    if let Some(config) = &result.config {
        print!("{}", render_config(config));
    }
    print!("{}", render_messages(&result.messages));
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init(ctx.scope)?;
    print_result(&result);
    Ok(())
}

fn handle_menu(ctx: &mut AppContext) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(&mut ctx.api, stdin.lock(), stdout.lock()).run()?;
    Ok(())
}

/// Asks a yes/no question on stdin. Only an explicit "yes" counts; closed input is a no.
fn confirm(question: &str) -> Result<bool> {
    print!("{}", question);
    io::stdout().flush()?;

    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer)? == 0 {
        println!();
        return Ok(false);
    }
    Ok(answer.trim().eq_ignore_ascii_case("yes"))
}
