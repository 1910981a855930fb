use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use ddl_meta::{extract_tables, DbType, ExtractOptions};

#[derive(Parser)]
#[command(name = "ddl-meta")]
#[command(author, version, about = "Extract table metadata from CREATE TABLE statements")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a DDL script and print the tables it defines
    Parse {
        /// Path to the DDL script (reads stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Database type (mysql, oracle, postgresql, sqlserver, hive, odps, clickhouse, ...)
        #[arg(short, long)]
        db_type: DbType,

        /// Extract every CREATE TABLE statement, not just the first statement
        #[arg(short, long)]
        multi: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Enable verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            input,
            db_type,
            multi,
            format,
            verbose,
        } => {
            init_logging(verbose);

            let options = ExtractOptions {
                input_path: input,
                db_type,
                multi,
            };
            let tables = extract_tables(&options)?;

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&tables)?),
                OutputFormat::Text => {
                    if tables.is_empty() {
                        eprintln!("No CREATE TABLE statement was parsed");
                    }
                    for table in &tables {
                        println!("{}", table);
                    }
                }
            }
        }
    }

    Ok(())
}
