use clap::Parser;
use go_model_generator::{
    command::{check_table_name, create_model, CreateModelOptions, CreateOutcome},
    config::GeneratorConfig,
    database_schema::DatabaseCatalog,
    logging::init_logger,
    model_writer::{AssumeYes, FsModelWriter, StdinConfirm},
    Result,
};
use std::path::PathBuf;
use std::process;
use tracing::error;

/// Generate a goravel model struct from a database table.
#[derive(Parser, Debug)]
#[command(name = "go-model-gen", version)]
struct Cli {
    /// model table name
    #[arg(short = 't', long = "table", default_value = "")]
    table: String,

    /// connection name from the config file
    #[arg(short = 'd', long = "database")]
    database: Option<String>,

    /// database url, overrides --database
    #[arg(long)]
    url: Option<String>,

    /// path to config file
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// overwrite existing model files without asking
    #[arg(short = 'y', long)]
    yes: bool,

    #[arg(short = 'v', long)]
    verbose: bool,
}

async fn run(cli: Cli) -> Result<CreateOutcome> {
    let config = GeneratorConfig::load(cli.config.as_deref())?;

    let options = CreateModelOptions {
        table_name: cli.table.clone(),
        package_name: config.package.clone(),
        models_dir: config.models_dir.clone(),
    };

    // checked before connecting so a missing -t never touches the database
    if let Some(outcome) = check_table_name(&options.table_name) {
        return Ok(outcome);
    }

    let url = match cli.url.as_deref() {
        Some(url) => url,
        None => config.connection_url(cli.database.as_deref())?,
    };
    let catalog = DatabaseCatalog::connect(url).await?;

    if cli.yes {
        create_model(&catalog, &FsModelWriter::new(AssumeYes), &options).await
    } else {
        create_model(&catalog, &FsModelWriter::new(StdinConfirm), &options).await
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(e) = run(cli).await {
        error!("{}", e);
        process::exit(1);
    }
}
