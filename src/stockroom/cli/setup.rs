use clap::{Parser, Subcommand, ValueEnum};
use stockroom::api::ReportKind;
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "stockroom", bin_name = "stockroom", version = get_version())]
#[command(about = "A small, file-backed inventory keeper", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Operate on the global inventory
    #[arg(short, long, global = true)]
    pub global: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Use this directory for data and config instead of the scope directory
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new product
    #[command(alias = "a")]
    Add {
        /// Unique product ID
        id: String,

        /// Product name
        name: String,

        /// Unit price
        #[arg(short, long, allow_negative_numbers = true)]
        price: f64,

        /// Units in stock
        #[arg(short, long)]
        quantity: u32,

        /// Category
        #[arg(short, long, default_value = "")]
        category: String,

        /// Free-form description
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// Update fields of an existing product
    #[command(alias = "u")]
    Update {
        /// Product ID
        id: String,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long, allow_negative_numbers = true)]
        price: Option<f64>,

        #[arg(short, long)]
        quantity: Option<u32>,

        #[arg(short, long)]
        category: Option<String>,

        #[arg(short, long)]
        description: Option<String>,
    },

    /// Delete a product
    #[command(alias = "rm")]
    Delete {
        /// Product ID
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show one product in detail
    #[command(alias = "v")]
    View {
        /// Product ID
        id: String,
    },

    /// List all products
    #[command(alias = "ls")]
    List,

    /// Search products by name (or category with --category)
    Search {
        term: String,

        /// Match against the category instead of the name
        #[arg(long)]
        category: bool,
    },

    /// List products running low on stock
    LowStock,

    /// Add or remove units (e.g. `adjust A1 -3`)
    Adjust {
        /// Product ID
        id: String,

        /// Units to add (negative to remove)
        #[arg(allow_negative_numbers = true)]
        delta: i64,
    },

    /// Print inventory reports
    Report {
        #[arg(value_enum, default_value_t = ReportArg::All)]
        kind: ReportArg,
    },

    /// Remove every product
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., data-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Initialize the data directory
    Init,

    /// Run the interactive menu (default)
    Menu,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportArg {
    Summary,
    LowStock,
    Categories,
    All,
}

impl From<ReportArg> for ReportKind {
    fn from(arg: ReportArg) -> Self {
        match arg {
            ReportArg::Summary => ReportKind::Summary,
            ReportArg::LowStock => ReportKind::LowStock,
            ReportArg::Categories => ReportKind::Categories,
            ReportArg::All => ReportKind::All,
        }
    }
}
