use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpecError {
    #[error("Failed to parse YAML spec: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON spec: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown keys in spec document: {}", .0.join(", "))]
    UnknownKeys(Vec<String>),
}
