use serde::{Deserialize, Serialize};

/// Result of `POST /generate-description`.
///
/// The text is not persisted by the generator; clients save it with a regular
/// update of the monkey record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptionResponse {
    pub description: String,
    pub generated_at: String,
    pub species: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monkey_name: Option<String>,
}
