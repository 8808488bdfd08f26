//! Apidoc fetch - Main Entry Point
//!
//! Downloads an API description with the configured security credentials
//! applied and prints the document to stdout.
//!
//! Usage: `apidoc-fetch [URL]`. Without a URL the configured one is used.

mod settings;

use std::sync::Arc;

use apidoc_application::state::update_loading_status;
use apidoc_application::{ApplicationError, DownloadOutcome, DownloadSpec, SpecAction};
use apidoc_domain::LoadingStatus;
use apidoc_infrastructure::{InMemorySpecStore, ReqwestSpecFetcher, load_activations};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::settings::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting apidoc-fetch v{}", env!("CARGO_PKG_VERSION"));

    let store = Arc::new(InMemorySpecStore::default());

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            store.dispatch(update_loading_status(LoadingStatus::FailedConfig));
            tracing::error!("{e}");
            return Err(e.into());
        }
    };

    if let Some(url) = &config.url {
        store.dispatch(SpecAction::UpdateUrl(url.clone()));
    }

    if let Some(path) = &config.auth_file {
        match load_activations(path).await {
            Ok(activations) => store.set_authorized(activations),
            Err(e) => {
                store.dispatch(update_loading_status(LoadingStatus::FailedConfig));
                tracing::error!("{e}");
                return Err(e.into());
            }
        }
    }

    let fetcher = ReqwestSpecFetcher::new(&config.fetch).map_err(ApplicationError::from)?;
    let fetcher = Arc::new(fetcher);
    let use_case = DownloadSpec::new(fetcher, Arc::clone(&store));

    let explicit_url = std::env::args().nth(1);
    match use_case.download(explicit_url.as_deref()).await {
        DownloadOutcome::Loaded { .. } => {
            if let Some(body) = store.state().spec {
                println!("{body}");
            }
            Ok(())
        }
        DownloadOutcome::Failed { message } => Err(message.into()),
    }
}
