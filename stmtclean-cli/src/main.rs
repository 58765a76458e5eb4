use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use stmtclean_ingest::{CleanReport, Preview, run_gated};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

mod auth;
mod config;
mod state;

#[derive(Parser, Debug)]
#[command(name = "stmtclean", version, about = "Clean bank-statement CSV exports")]
struct Cli {
    /// Debug-level logging (overridden by RUST_LOG)
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Clean one or two statement CSVs into a single eight-column table
    Clean {
        /// Statement CSV; pass twice to combine two exports (order is kept)
        #[arg(long = "input", short = 'i', required = true)]
        inputs: Vec<PathBuf>,

        /// Where to write the cleaned CSV (default: ./Cleaned_Data.csv)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Access password (prompted for when omitted)
        #[arg(long)]
        password: Option<String>,

        /// Rows shown in the preview (default from config: 100)
        #[arg(long)]
        preview_rows: Option<usize>,

        /// Skip the preview table
        #[arg(long)]
        no_preview: bool,

        /// Print the report and preview as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write ~/.stmtclean/config.toml with defaults
    Init,
    /// Print the config file location
    Path,
}

#[derive(Serialize)]
struct JsonSummary<'a> {
    report: &'a CleanReport,
    preview: Preview<'a>,
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "warn,stmtclean=debug"
    } else {
        "warn,stmtclean=info"
    };
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Clean {
            inputs,
            out,
            password,
            preview_rows,
            no_preview,
            json,
        } => {
            let cfg = config::load_config()?;
            let session = auth::login(&cfg.gate, password)?;

            let inputs = inputs
                .iter()
                .map(|p| state::read_input(p))
                .collect::<Result<Vec<_>>>()?;

            let cleaned = run_gated(&session, &inputs)?;
            let limit = preview_rows.unwrap_or(cfg.output.preview_rows);
            let preview = cleaned.preview(limit);

            if json {
                let summary = JsonSummary {
                    report: &cleaned.report,
                    preview,
                };
                println!(
                    "{}",
                    serde_json::to_string_pretty(&summary).context("serialize summary")?
                );
            } else {
                println!("{} file(s) loaded successfully\n", inputs.len());
                if !no_preview {
                    println!("Cleaned Data Preview (first {} rows)\n", limit);
                    print!("{}", preview.render());
                }
                println!("\nTotal rows after cleaning: {}", cleaned.len());
            }

            let artifact = cleaned
                .to_artifact()?
                .with_file_name(cfg.output.file_name.clone());
            let out_path = out.unwrap_or_else(|| PathBuf::from(&artifact.file_name));
            state::write_output(&out_path, &artifact.bytes)?;
            info!(path = %out_path.display(), content_type = artifact.content_type, "wrote cleaned csv");
            if !json {
                println!("Wrote {}", out_path.display());
            }
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Path => println!("{}", config::config_path()?.display()),
        },
    }

    Ok(())
}
