use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use unitcost::compare::{self, Report};
use unitcost::config::Config;
use unitcost::form::Form;
use unitcost::input;
use unitcost::numeric;
use unitcost::present::TerminalPresenter;
use unitcost::units::{self, CATEGORY_TABLE};

#[derive(Parser)]
#[command(name = "unitcost")]
#[command(about = "Find the product with the lowest cost per unit", long_about = None)]
struct Cli {
    /// Config file (TOML)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Log the computed costs
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare products and report the cheapest per unit
    Compare {
        /// Product as "name;quantity;unit;price", repeat for each product
        #[arg(short, long)]
        product: Vec<String>,

        /// Products file with [[product]] tables
        #[arg(short, long, conflicts_with = "product")]
        file: Option<String>,

        /// Print the comparison as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the units accepted for each category
    Units,

    /// Show which category a unit belongs to
    Category {
        /// Unit symbol (e.g. "Kg")
        unit: String,
    },

    /// Format a price the way the price field does on blur
    FormatPrice {
        /// Price text (e.g. "$1,234.5")
        text: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        "unitcost=debug"
    } else {
        "unitcost=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Compare {
            product,
            file,
            json,
        } => compare_products(cli.config.as_deref(), &product, file.as_deref(), json),
        Commands::Units => {
            list_units();
            Ok(())
        }
        Commands::Category { unit } => {
            println!("{}", units::category_name_of(&unit));
            Ok(())
        }
        Commands::FormatPrice { text } => {
            println!("{}", numeric::format_price_field(&text));
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(Config::load_from_file(path)?),
        None => Ok(Config::empty()),
    }
}

fn compare_products(
    config_path: Option<&str>,
    products: &[String],
    file: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;

    let entries = match file {
        Some(path) => input::load_entries_from_file(path)?,
        None => input::parse_product_specs(products)?,
    };

    if entries.is_empty() {
        return Err("No products given, use --product or --file".into());
    }

    if json {
        let comparison = compare::compare_with_limits(&entries, &config.limits)?;
        let report = Report::new(&comparison, &config.currency);
        let output = serde_json::json!({
            "comparison": comparison,
            "report": report,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    // Refusals go through the Error: path in main, not the presenter
    let presenter = TerminalPresenter::new(std::io::stdout(), config.color).without_errors();
    let mut form = Form::with_entries(config, presenter, entries)?;
    form.compare()?;

    Ok(())
}

fn list_units() {
    for group in CATEGORY_TABLE.groups() {
        let symbols: Vec<_> = group.units.iter().map(|u| u.symbol).collect();
        println!("{}: {}", group.category, symbols.join(", "));
    }
}
