use clap::Parser;
use easypay::application::submitter::PaymentSubmitter;
use easypay::domain::ports::PaymentGatewayBox;
use easypay::infrastructure::json_lines::JsonLinesGateway;
use easypay::interfaces::csv::payment_reader::PaymentReader;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input payments CSV file (header: value, key, type, max_date)
    input: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Default level WARN, overridable via RUST_LOG. Logs go to stderr, request bodies to stdout.
    {
        use tracing_subscriber::{EnvFilter, fmt};
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = fmt()
            .with_env_filter(env_filter)
            .with_writer(io::stderr)
            .with_ansi(false)
            .try_init();
    }

    let cli = Cli::parse();

    let gateway: PaymentGatewayBox = Box::new(JsonLinesGateway::new(io::stdout()));
    let submitter = PaymentSubmitter::new(gateway);

    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = PaymentReader::new(file);

    let mut submitted = 0usize;
    let mut skipped = 0usize;
    for (index, payment) in reader.payments().enumerate() {
        let row = index + 1;
        match payment {
            Ok(payment) => match submitter.submit(payment).await {
                Ok(()) => submitted += 1,
                Err(e) => {
                    warn!(row, "Error submitting payment: {}", e);
                    skipped += 1;
                }
            },
            Err(e) => {
                warn!(row, "Error reading payment: {}", e);
                skipped += 1;
            }
        }
    }

    info!(submitted, skipped, "done");
    Ok(())
}
