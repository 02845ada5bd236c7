use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub prediction: PredictionSettings,
    pub ui: UiSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PredictionSettings {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UiSettings {
    /// Delay before issuing the prediction request; 0 disables it
    pub debounce_ms: u64,
}

impl PredictionSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl UiSettings {
    pub fn debounce(&self) -> Option<Duration> {
        (self.debounce_ms > 0).then(|| Duration::from_millis(self.debounce_ms))
    }
}

fn builder() -> anyhow::Result<config::ConfigBuilder<config::builder::DefaultState>> {
    Ok(config::Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8080)?
        .set_default("prediction.base_url", "http://127.0.0.1:5000")?
        .set_default("prediction.timeout_secs", 30)?
        .set_default("ui.debounce_ms", 0)?)
}

/// `WINDCAST__PREDICTION__BASE_URL` maps to `prediction.base_url`
fn environment() -> config::Environment {
    config::Environment::with_prefix("WINDCAST")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Load `config/client.*` (optional) overlaid with `WINDCAST__SECTION__KEY` env vars
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = builder()?
        .add_source(config::File::with_name("config/client").required(false))
        .add_source(environment())
        .build()?;

    Ok(settings.try_deserialize()?)
}
