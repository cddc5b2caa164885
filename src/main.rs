use affine_shape::application::engine::TransformEngine;
use affine_shape::config::AppConfig;
use affine_shape::interfaces::csv::shape_reader::ShapeReader;
use affine_shape::interfaces::csv::shape_writer::ShapeWriter;
use affine_shape::interfaces::http;
use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result, miette};
use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON config file overriding the bind address and reference shape
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the drawing page and the transform API
    Serve {
        /// Address to listen on
        #[arg(long, env = "AFFINE_SHAPE_BIND")]
        bind: Option<SocketAddr>,
    },
    /// Transform a shape read from CSV and print the result as CSV
    Apply {
        /// One of translate, rotate, scale
        #[arg(long)]
        op: String,

        /// Operation parameter as key=value, e.g. --param dx=10
        #[arg(long = "param", value_parser = parse_param)]
        params: Vec<(String, f64)>,

        /// Input shape CSV with an x,y header. Uses the reference shape if omitted.
        input: Option<PathBuf>,
    },
}

fn parse_param(raw: &str) -> std::result::Result<(String, f64), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got `{raw}`"))?;
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|e| format!("invalid number for `{key}`: {e}"))?;
    Ok((key.trim().to_string(), value))
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let mut config = AppConfig::load(cli.config.as_deref()).into_diagnostic()?;

    match cli.command {
        Command::Serve { bind } => {
            if let Some(bind) = bind {
                config.bind = bind;
            }
            http::serve(&config).await.into_diagnostic()?;
        }
        Command::Apply { op, params, input } => {
            let engine = TransformEngine::new(config.reference_shape);
            let params: HashMap<String, f64> = params.into_iter().collect();

            let shape = match input {
                Some(path) => {
                    let file = File::open(&path)
                        .map_err(|e| miette!("cannot open {}: {e}", path.display()))?;
                    Some(ShapeReader::new(file).read_shape().into_diagnostic()?)
                }
                None => None,
            };

            let result = engine
                .transform(shape.as_ref(), &op, &params)
                .into_diagnostic()?;

            let stdout = io::stdout();
            let mut writer = ShapeWriter::new(stdout.lock());
            writer.write_shape(&result).into_diagnostic()?;
        }
    }

    Ok(())
}
