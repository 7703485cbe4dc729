use serde::{Deserialize, Serialize};

/// Body of `GET /api/status`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ServiceStatus {
    pub status: String,
    #[serde(default)]
    pub framework: Option<String>,
}
