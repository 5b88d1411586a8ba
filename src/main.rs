use sscom_monitor::config::Config;
use sscom_monitor::fetch::HttpFetcher;
use sscom_monitor::notify::OneSignalNotifier;
use sscom_monitor::store::KnownListings;
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| {
                "info,html5ever=error,selectors=error,hyper=warn,reqwest=info".into()
            }),
        )
        .with(ErrorLayer::default())
        .init();

    let config = Config::from_env()?;
    let fetcher = HttpFetcher::new();
    let notifier = OneSignalNotifier::new(
        config.onesignal_app_id.clone(),
        config.onesignal_api_key.clone(),
    );
    let mut store = KnownListings::load(&config.state_file);
    info!("Loaded {} known ads", store.len());

    info!("Starting monitoring...");
    tokio::select! {
        res = sscom_monitor::run_monitor(&fetcher, &notifier, &mut store, config.poll_interval) => res?,
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupted, shutting down");
        }
    }

    Ok(())
}
