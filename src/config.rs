use crate::error::MonitorError;
use std::path::PathBuf;
use tokio::time::Duration;

/// OneSignal credentials plus the fixed bits of the monitor's runtime shape.
///
/// The original deployment read the app id and the REST key from the same
/// environment variable; they are distinct values here on purpose.
#[derive(Debug, Clone)]
pub struct Config {
    pub onesignal_app_id: String,
    pub onesignal_api_key: String,
    pub state_file: PathBuf,
    pub poll_interval: Duration,
}

pub const STATE_FILE: &str = "known_ads.json";
pub const POLL_INTERVAL: Duration = Duration::from_secs(300);

impl Config {
    pub fn from_env() -> Result<Config, MonitorError> {
        Ok(Config {
            onesignal_app_id: require_env("ONESIGNAL_APP_ID")?,
            onesignal_api_key: require_env("ONESIGNAL_REST_API_KEY")?,
            state_file: PathBuf::from(STATE_FILE),
            poll_interval: POLL_INTERVAL,
        })
    }
}

fn require_env(name: &str) -> Result<String, MonitorError> {
    std::env::var(name).map_err(|_| MonitorError::Config(name.to_string()))
}
