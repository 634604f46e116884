use anyhow::{Context, Result};
use xenaquery::client::XenaClient;
use xenaquery::config::ClientConfig;
use xenaquery::query;

use clap::Parser;
use tracing::debug;
use tracing_subscriber;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Base url of the xena server
    #[arg(
        short,
        long,
        default_value_t = String::from("https://genome-cancer.ucsc.edu/proj/public/xena")
    )]
    url: String,

    /// The cohort to look up samples in, e.g. TCGA.LGG.sampleMap
    #[arg(short, long)]
    cohort: String,

    /// Patient ids to map to sample ids
    #[arg(short, long)]
    patients: Vec<String>,

    /// Look up by this field instead of the patient id field
    #[arg(short, long)]
    field: Option<String>,

    /// Read base url, log level and timeout from this json file instead
    #[arg(long)]
    config: Option<String>,

    /// The logging level (debug, info, warning, error)
    #[arg(short, long, default_value_t = String::from("info"))]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(file_path) => Some(
            ClientConfig::from_file(file_path.clone()).context("failed to read the config file")?,
        ),
        None => None,
    };

    let log_level = match &config {
        Some(config) => config.log_level()?,
        None => {
            if args.log_level.to_lowercase() == "info" {
                tracing::Level::INFO
            } else if args.log_level.to_lowercase() == "debug" {
                tracing::Level::DEBUG
            } else if args.log_level.to_lowercase() == "warning" {
                tracing::Level::WARN
            } else if args.log_level.to_lowercase() == "error" {
                tracing::Level::ERROR
            } else {
                panic!("unknown log level")
            }
        }
    };

    tracing_subscriber::fmt()
        .with_line_number(true)
        .with_max_level(log_level)
        .init();

    let client = match &config {
        Some(config) => XenaClient::from_config(config)?,
        None => XenaClient::new(args.url.clone())?,
    };

    let query = match &args.field {
        Some(field) => query::find_sample_by_field_query(&args.cohort, field, &args.patients),
        None => query::patient_to_sample_query(&args.cohort, &args.patients),
    };
    debug!("query: {}", query);

    let resp = client.post(query).context("query failed")?;

    // the response is json text; print it verbatim and let the caller decode
    println!("{}", resp);

    Ok(())
}
