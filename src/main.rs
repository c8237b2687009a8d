use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result, WrapErr};
use rust_decimal::Decimal;
use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use trendpix::application::service::{ErrorBody, PixRequest, PixService};
use trendpix::config::PixSettings;
use trendpix::domain::amount::Amount;
use trendpix::domain::ports::MerchantStore;
use trendpix::domain::pix::{DecodedPayload, PixCharge};
use trendpix::infrastructure::in_memory::InMemoryMerchantStore;
use trendpix::interfaces::csv::merchant_reader::MerchantReader;
use trendpix::interfaces::csv::payload_writer::PayloadWriter;
use trendpix::interfaces::csv::request_reader::RequestReader;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build a payload from a PIX key, an amount and a store name
    Payload {
        /// Merchant PIX key (email, phone, random key or CPF/CNPJ)
        #[arg(long)]
        key: String,
        /// Amount in reais
        #[arg(long, allow_hyphen_values = true)]
        amount: Decimal,
        /// Store display name
        #[arg(long)]
        name: String,
        /// Merchant city. Defaults to PIX_MERCHANT_CITY or SAO PAULO.
        #[arg(long)]
        city: Option<String>,
        /// Reference label. Defaults to PIX_REFERENCE_LABEL or ***.
        #[arg(long)]
        reference: Option<String>,
    },
    /// Generate the payload for one organization, printed as JSON
    Generate {
        /// Merchants CSV (organization_id,name,pix_key,city)
        #[arg(long)]
        merchants: PathBuf,
        #[arg(long)]
        organization: String,
        #[arg(long, allow_hyphen_values = true)]
        amount: Decimal,
    },
    /// Generate payloads for every request in a CSV file
    Batch {
        /// Requests CSV (organization_id,amount)
        input: PathBuf,
        /// Merchants CSV (organization_id,name,pix_key,city)
        #[arg(long)]
        merchants: PathBuf,
    },
    /// Verify the checksum of a payload and print its fields as JSON
    Inspect { payload: String },
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trendpix=info".into()),
        )
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

async fn load_service(path: &Path, settings: PixSettings) -> Result<PixService> {
    let file = File::open(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to open merchants file {}", path.display()))?;

    let store = InMemoryMerchantStore::new();
    let loaded = MerchantReader::new(file)
        .load_into(&store)
        .await
        .into_diagnostic()?;
    info!(loaded, path = %path.display(), "loaded merchants");

    let without_key: Vec<String> = store
        .all()
        .await
        .into_diagnostic()?
        .into_iter()
        .filter(|merchant| merchant.pix_key().is_none())
        .map(|merchant| merchant.organization_id)
        .collect();
    if !without_key.is_empty() {
        warn!(
            organizations = %without_key.join(","),
            "{} merchants without a PIX key",
            without_key.len()
        );
    }

    Ok(PixService::new(Box::new(store), settings))
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let settings = PixSettings::from_env();

    match cli.command {
        Command::Payload {
            key,
            amount,
            name,
            city,
            reference,
        } => {
            let amount = Amount::new(amount).into_diagnostic()?;
            if key.trim().is_empty() {
                miette::bail!("a PIX key is required");
            }
            let payload = PixCharge::new(key, amount.value(), name)
                .with_city(city.unwrap_or(settings.merchant_city))
                .with_reference(reference.unwrap_or(settings.reference_label))
                .to_payload()
                .into_diagnostic()?;
            println!("{payload}");
        }
        Command::Generate {
            merchants,
            organization,
            amount,
        } => {
            let service = load_service(&merchants, settings).await?;
            match service.generate(&PixRequest::new(organization, amount)).await {
                Ok(response) => {
                    println!("{}", serde_json::to_string(&response).into_diagnostic()?);
                }
                Err(e) => {
                    println!(
                        "{}",
                        serde_json::to_string(&ErrorBody::from(&e)).into_diagnostic()?
                    );
                    return Err(e).into_diagnostic();
                }
            }
        }
        Command::Batch { input, merchants } => {
            let service = load_service(&merchants, settings).await?;
            let file = File::open(&input)
                .into_diagnostic()
                .wrap_err_with(|| format!("failed to open requests file {}", input.display()))?;

            let stdout = io::stdout();
            let mut writer = PayloadWriter::new(stdout.lock());
            let (mut generated, mut skipped) = (0usize, 0usize);
            for request in RequestReader::new(file).requests() {
                let request = match request {
                    Ok(request) => request,
                    Err(e) => {
                        warn!("Error reading request: {e}");
                        skipped += 1;
                        continue;
                    }
                };
                match service.generate(&request).await {
                    Ok(response) => {
                        let amount = request.amount.unwrap_or_default();
                        writer
                            .write(&request.organization_id, amount, &response.payload)
                            .into_diagnostic()?;
                        generated += 1;
                    }
                    Err(e) => {
                        warn!(
                            organization_id = %request.organization_id,
                            code = e.error_code(),
                            "Error generating payload: {e}"
                        );
                        skipped += 1;
                    }
                }
            }
            writer.flush().into_diagnostic()?;
            info!(generated, skipped, "batch complete");
        }
        Command::Inspect { payload } => {
            let decoded = DecodedPayload::parse(&payload).into_diagnostic()?;
            println!(
                "{}",
                serde_json::to_string_pretty(&decoded).into_diagnostic()?
            );
        }
    }

    Ok(())
}
