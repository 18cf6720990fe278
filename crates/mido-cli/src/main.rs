use clap::{Parser, Subcommand};
use mido_catalog::{MockCatalog, DEFAULT_PREVIEW_LEN, DEFAULT_PRODUCT_COUNT};
use mido_core::JobVariant;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "mido-cli")]
#[command(about = "MidoStore mock catalog command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run a mock scrape job and print the result as JSON.
    Generate(GenerateArgs),
    /// Print the sample scraping dashboard jobs as JSON.
    Jobs,
}

#[derive(Debug, clap::Args)]
struct GenerateArgs {
    /// Marketplace the products are attributed to, e.g. `alibaba`.
    #[arg(long, value_parser = non_empty)]
    source: String,

    /// Product category, e.g. `electronics`.
    #[arg(long, value_parser = non_empty)]
    category: String,

    /// Number of products to generate.
    #[arg(long, default_value_t = DEFAULT_PRODUCT_COUNT, value_parser = clap::value_parser!(u32).range(1..))]
    count: u32,

    /// Number of products included in the job preview.
    #[arg(long, default_value_t = DEFAULT_PREVIEW_LEN)]
    preview: usize,

    #[arg(long, env = "MIDO_SCRAPE_VARIANT", default_value = "mock")]
    variant: JobVariant,

    /// Print every generated product instead of the job envelope.
    #[arg(long)]
    all: bool,
}

fn non_empty(value: &str) -> Result<String, String> {
    if value.is_empty() {
        Err("value must not be empty".to_string())
    } else {
        Ok(value.to_string())
    }
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Generate(args)) => run_generate(&args)?,
        Some(Commands::Jobs) => {
            let jobs = mido_catalog::list_mock_jobs(chrono::Utc::now());
            println!("{}", serde_json::to_string_pretty(&jobs)?);
        }
        None => println!("mido-cli: run `mido-cli --help` for available commands"),
    }

    Ok(())
}

fn run_generate(args: &GenerateArgs) -> anyhow::Result<()> {
    let mut rng = rand::rng();

    let output = if args.all {
        let products =
            mido_catalog::generate(&args.source, &args.category, args.count, &mut rng);
        tracing::debug!(count = products.len(), "generated full product batch");
        serde_json::to_string_pretty(&products)?
    } else {
        let catalog = MockCatalog::new(args.variant, args.count, args.preview);
        let result = catalog.run(&args.source, &args.category, &mut rng);
        serde_json::to_string_pretty(&result)?
    };

    println!("{output}");
    Ok(())
}
