use serde::Deserialize;

use drawbridge_store::StoreConfig;

/// Top-level configuration for the Drawbridge server, loaded from a TOML
/// file. Every field has a default, so a missing file yields a working
/// local setup (memory store on 127.0.0.1:8080).
#[derive(Debug, Default, Deserialize)]
pub struct DrawbridgeConfig {
    /// HTTP bind configuration.
    #[serde(default)]
    pub server: BindConfig,
    /// Object-store backend configuration.
    #[serde(default)]
    pub store: StoreConfig,
}

/// HTTP server bind configuration.
#[derive(Debug, Deserialize)]
pub struct BindConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind to.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Maximum accepted upload size in bytes.
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

fn default_host() -> String {
    "127.0.0.1".to_owned()
}

fn default_port() -> u16 {
    8080
}

fn default_max_upload_bytes() -> usize {
    25 * 1024 * 1024
}

impl Default for BindConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}
