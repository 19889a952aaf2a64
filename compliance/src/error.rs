use beacon_client::TransportError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComplianceError {
    #[error("Beacon request failed: {0}")]
    Transport(#[from] TransportError),
    #[error("Error from HTTP client: {0}")]
    ReqwestClient(#[from] reqwest::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to serialize or deserialize JSON: {0}")]
    SerdeJson(#[from] serde_json::Error),
    #[error("Failed to read YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Failed to read TOML: {0}")]
    TomlDe(#[from] toml::de::Error),
    #[error("Failed to write TOML: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("Invalid configuration: {}", .0.join("; "))]
    InvalidConfig(Vec<String>),
}
