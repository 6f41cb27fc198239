use axum::extract::{rejection::PathRejection, Path};

use crate::server::error::AppError;

/// Extracts an integer ID from a path segment
///
/// A segment that is not an integer never names a stored record, so it is reported the
/// same way as an unknown ID.
///
/// # Arguments
/// - `path` - Result of the `Path<i32>` extractor
/// - `not_found` - Message returned when the segment is not an integer
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed ID
/// - `Err(AppError::NotFound)` - The segment is not an integer
pub fn parse_path_id(
    path: Result<Path<i32>, PathRejection>,
    not_found: &str,
) -> Result<i32, AppError> {
    match path {
        Ok(Path(id)) => Ok(id),
        Err(rejection) => {
            tracing::debug!("Rejected path segment: {}", rejection.body_text());
            Err(AppError::NotFound(not_found.to_string()))
        }
    }
}
