use std::path::{Path, PathBuf};

use clap::{Args, CommandFactory, Parser, Subcommand};
use miette::{Context, IntoDiagnostic, Result};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use seasonscope_core::{Dispersion, OutputFormat, Palette, SeasonConfig};
use seasonscope_data::Dataset;
use seasonscope_render::{output, render_svg, HeatmapStyle};

#[derive(Parser)]
#[command(
    name = "seasonscope",
    version,
    about = "Seasonal and regional demand patterns from e-commerce orders",
    long_about = "Seasonscope merges an orders table with a customers table and shows how demand\n\
                   for each product category shifts across seasons and states.\n\n\
                   Seasons follow the Southern-Hemisphere calendar: Q1 Summer, Q2 Autumn,\n\
                   Q3 Winter, Q4 Spring.\n\n\
                   Examples:\n  \
                     seasonscope trends                               Rank categories by seasonality\n  \
                     seasonscope heatmap --category brinquedos       State x season demand share\n  \
                     seasonscope preferences --top 8 --output p.svg  Regional preference heatmap\n  \
                     seasonscope init                                 Write a default .seasonscope.toml"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Path to configuration file (default: .seasonscope.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(
        long,
        global = true,
        default_value = "text",
        long_help = "Output format for command results.\n\n\
                       Formats:\n  \
                         text      Aligned tables (default)\n  \
                         json      Machine-readable JSON with camelCase keys\n  \
                         markdown  GitHub-flavored Markdown tables"
    )]
    format: OutputFormat,

    /// Enable debug logging on stderr
    #[arg(long, short, global = true)]
    verbose: bool,
}

/// Input tables shared by every analysis command.
#[derive(Args)]
struct InputArgs {
    /// Orders CSV (needs order_purchase_timestamp, customer_id, product_category_name)
    #[arg(long, default_value = "olist_orders_dataset.csv")]
    orders: PathBuf,

    /// Customers CSV (needs customer_id, customer_state)
    #[arg(long, default_value = "olist_customers_dataset.csv")]
    customers: PathBuf,
}

#[derive(Subcommand)]
enum Command {
    /// Show how one category's demand is split across seasons in each state
    #[command(long_about = "Show how one category's demand is split across seasons in each state.\n\n\
        Each row is a state; each cell is the share of that state's orders for the\n\
        category placed in the season. Rows sum to 100%.\n\n\
        Examples:\n  seasonscope heatmap --category cama_mesa_banho\n  \
        seasonscope heatmap --category brinquedos --output toys.svg")]
    Heatmap {
        #[command(flatten)]
        input: InputArgs,

        /// Product category to analyze (exact match)
        #[arg(long)]
        category: String,

        /// Write the rendered chart to this SVG file
        #[arg(long)]
        output: Option<PathBuf>,

        /// Color scale for the chart (overrides config)
        #[arg(long)]
        palette: Option<Palette>,
    },
    /// Rank categories by how much their demand varies across seasons
    #[command(long_about = "Rank categories by how much their demand varies across seasons.\n\n\
        The score is the coefficient of variation (std / mean) of each category's\n\
        order counts over the four seasons. Higher means more seasonal.\n\n\
        Examples:\n  seasonscope trends\n  seasonscope trends --limit 5 --format json")]
    Trends {
        #[command(flatten)]
        input: InputArgs,

        /// Show only the top N categories
        #[arg(long)]
        limit: Option<usize>,

        /// Standard deviation estimator (overrides config)
        #[arg(long)]
        dispersion: Option<Dispersion>,
    },
    /// Compare category shares across states for the most regional categories
    #[command(long_about = "Compare category shares across states for the most regional categories.\n\n\
        Each cell is the share of a state's orders that went to the category. Only\n\
        the N categories whose share varies most between states are shown.\n\n\
        Examples:\n  seasonscope preferences\n  seasonscope preferences --top 5 --output prefs.svg")]
    Preferences {
        #[command(flatten)]
        input: InputArgs,

        /// Number of categories to keep (overrides config)
        #[arg(long)]
        top: Option<usize>,

        /// Write the rendered chart to this SVG file
        #[arg(long)]
        output: Option<PathBuf>,

        /// Color scale for the chart (overrides config)
        #[arg(long)]
        palette: Option<Palette>,

        /// Variance estimator used to rank categories (overrides config)
        #[arg(long)]
        dispersion: Option<Dispersion>,
    },
    /// Create a default .seasonscope.toml configuration file
    #[command(long_about = "Create a default .seasonscope.toml configuration file.\n\n\
        Writes every available option with its default value.\n\
        Fails if .seasonscope.toml already exists.")]
    Init,
    /// Generate shell completion scripts
    #[command(hide = true)]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

const CONFIG_FILE: &str = ".seasonscope.toml";

const DEFAULT_CONFIG: &str = r#"# Seasonscope Configuration

[chart]
# width = 1200
# height = 800
# palette = "ylorrd"        # ylorrd | blues | viridis
# font_family = "sans-serif"
# title_size = 28
# label_size = 16
# annotation_size = 13      # 0 hides cell percentages

[analysis]
# dispersion = "sample"     # sample (n - 1) | population (n)
# top_n_categories = 10
"#;

fn init_tracing(verbose: bool) {
    let level = if verbose {
        Level::DEBUG
    } else {
        std::env::var("RUST_LOG")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(Level::WARN)
    };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<SeasonConfig> {
    let config = match path {
        Some(path) => SeasonConfig::from_file(path)
            .wrap_err_with(|| format!("failed to load config from {}", path.display()))?,
        None => {
            let default_path = Path::new(CONFIG_FILE);
            if default_path.exists() {
                SeasonConfig::from_file(default_path)
                    .wrap_err_with(|| format!("failed to load {CONFIG_FILE}"))?
            } else {
                SeasonConfig::default()
            }
        }
    };
    Ok(config)
}

fn load(input: &InputArgs) -> Result<Dataset> {
    let data = seasonscope_data::load_dataset(&input.orders, &input.customers).wrap_err_with(
        || {
            format!(
                "failed to load {} and {}",
                input.orders.display(),
                input.customers.display()
            )
        },
    )?;
    info!(records = data.len(), "merged orders with customers");
    Ok(data)
}

fn write_chart(path: &Path, svg: &str) -> Result<()> {
    std::fs::write(path, svg)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to write {}", path.display()))?;
    eprintln!("Chart written to {}", path.display());
    Ok(())
}

fn chart_style(config: &SeasonConfig, palette: Option<Palette>) -> HeatmapStyle {
    let mut style = HeatmapStyle::from(&config.chart);
    if let Some(palette) = palette {
        style.palette = palette;
    }
    style
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .build(),
        )
    }))
    .expect("miette handler");
    human_panic::setup_panic!();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        None => {
            Cli::command().print_help().into_diagnostic()?;
        }
        Some(Command::Heatmap {
            ref input,
            ref category,
            output: ref chart_path,
            palette,
        }) => {
            let data = load(input)?;
            let heatmap = seasonscope_analysis::seasonal_heatmap(&data, category)?;
            if let Some(path) = chart_path {
                let svg = render_svg(&heatmap, &chart_style(&config, palette))?;
                write_chart(path, &svg)?;
            }
            print!("{}", output::format_heatmap(&heatmap, cli.format)?);
        }
        Some(Command::Trends {
            ref input,
            limit,
            dispersion,
        }) => {
            let data = load(input)?;
            let dispersion = dispersion.unwrap_or(config.analysis.dispersion);
            let mut ranked = seasonscope_analysis::seasonal_trends(&data, dispersion);
            if let Some(limit) = limit {
                ranked.truncate(limit);
            }
            print!("{}", output::format_trends(&ranked, cli.format)?);
        }
        Some(Command::Preferences {
            ref input,
            top,
            output: ref chart_path,
            palette,
            dispersion,
        }) => {
            let data = load(input)?;
            let top_n = top.unwrap_or(config.analysis.top_n_categories);
            let dispersion = dispersion.unwrap_or(config.analysis.dispersion);
            let heatmap = seasonscope_analysis::preference_heatmap(&data, top_n, dispersion)?;
            if let Some(path) = chart_path {
                let svg = render_svg(&heatmap, &chart_style(&config, palette))?;
                write_chart(path, &svg)?;
            }
            print!("{}", output::format_heatmap(&heatmap, cli.format)?);
        }
        Some(Command::Init) => {
            let path = Path::new(CONFIG_FILE);
            if path.exists() {
                miette::bail!("{CONFIG_FILE} already exists");
            }
            std::fs::write(path, DEFAULT_CONFIG).into_diagnostic()?;
            println!("Created {CONFIG_FILE} with default configuration");
        }
        Some(Command::Completions { shell }) => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "seasonscope", &mut std::io::stdout());
        }
    }

    Ok(())
}
