// File: kickwire-cli/src/main.rs

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

use kickwire_common::models::EventFamily;
use kickwire_core::{HeaderNames, WebhookConfig, WebhookDispatcher};
use kickwire_core::crypto::load_public_key_file;

mod headers;

#[derive(Parser, Debug)]
#[command(name = "kickwire")]
#[command(author, version, about = "Verify and decode captured Kick webhook deliveries")]
struct Args {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Verify a delivery's signature and print the decoded event as JSON
    Verify(VerifyArgs),
    /// List the event families this build can decode
    Families,
}

#[derive(clap::Args, Debug)]
struct VerifyArgs {
    /// JSON object of the request headers
    #[arg(long)]
    headers: PathBuf,

    /// Raw request body, byte for byte as received
    #[arg(long)]
    body: PathBuf,

    /// PEM public key to verify with (defaults to KICKWIRE_PUBLIC_KEY_PATH, then Kick's key)
    #[arg(long)]
    public_key: Option<PathBuf>,

    /// Header naming scheme: "kick" or "legacy"
    #[arg(long)]
    header_preset: Option<String>,

    /// Only check the signature; don't decode the body
    #[arg(long)]
    verify_only: bool,
}

fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::from_default_env()
        .add_directive("kickwire=info".parse().unwrap_or_default());
    let sub = fmt().with_env_filter(filter).with_writer(std::io::stderr).finish();
    tracing::subscriber::set_global_default(sub).context("Failed to set global subscriber")?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    if let Err(e) = init_tracing() {
        eprintln!("{:#}", e);
    }

    let args = Args::parse();
    match args.cmd {
        Command::Families => {
            for family in EventFamily::ALL {
                println!("{}", family);
            }
            ExitCode::SUCCESS
        }
        Command::Verify(verify) => match run_verify(verify).await {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                match e.downcast_ref::<kickwire_core::Error>() {
                    Some(err) => error!("verification failed at stage '{}': {}", err.stage(), err),
                    None => error!("{:#}", e),
                }
                ExitCode::FAILURE
            }
        },
    }
}

fn build_config(args: &VerifyArgs) -> anyhow::Result<WebhookConfig> {
    let mut config = WebhookConfig::from_env()?;

    if let Some(path) = &args.public_key {
        config = config.with_public_key(load_public_key_file(path)?);
        info!("using public key from {}", path.display());
    }
    if let Some(preset) = &args.header_preset {
        config = config.with_headers(HeaderNames::from_preset(preset)?);
    }
    Ok(config)
}

async fn run_verify(args: VerifyArgs) -> anyhow::Result<()> {
    let dispatcher = WebhookDispatcher::new(build_config(&args)?);
    let headers = headers::load_headers(&args.headers)?;

    if args.verify_only {
        let body = tokio::fs::read(&args.body)
            .await
            .with_context(|| format!("reading body from {}", args.body.display()))?;
        dispatcher.verify_request(&headers, &body)?;
        println!("signature ok");
        return Ok(());
    }

    let body = tokio::fs::File::open(&args.body)
        .await
        .with_context(|| format!("opening body {}", args.body.display()))?;
    let event = dispatcher.event_from_request_async(&headers, body).await?;

    if event.is_generic() {
        info!("no registered shape for this version; printing the raw object");
    }
    println!("{}", serde_json::to_string_pretty(&event)?);
    Ok(())
}
