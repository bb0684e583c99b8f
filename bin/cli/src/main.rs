use data_form_cli::{config::CliConfig, notifier::TerminalNotifier, session};
use data_form_integration::HttpItemsBackend;
use data_form_widget::DataForm;
use std::sync::Arc;
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration from file and environment
    let config = CliConfig::from_env().expect("failed to load configuration");
    tracing::info!(
        integration = %config.integration,
        base_url = %config.base_url,
        "Loaded configuration"
    );

    let backend =
        HttpItemsBackend::new(config.backend_config()).expect("failed to create HTTP backend");

    let form = DataForm::new(
        config.integration.clone(),
        config.credentials.clone(),
        Arc::new(backend),
        Arc::new(TerminalNotifier::stderr()),
    );

    let input = BufReader::new(tokio::io::stdin());
    if let Err(e) = session::run(form, config.layout, input, std::io::stdout()).await {
        tracing::error!(error = %e, "Session ended with an error");
        std::process::exit(1);
    }
}
