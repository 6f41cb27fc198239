use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body for lookups that found nothing, e.g. `{"error": "Camper not found"}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Error body for rejected input, e.g. `{"errors": ["validation errors"]}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ErrorsDto {
    pub errors: Vec<String>,
}
