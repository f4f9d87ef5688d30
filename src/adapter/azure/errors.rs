//! Azure Error Classification
//!
//! サービスエラーコードによるエラー分類

use azure_core::error::{Error, ErrorKind};

/// Service error code returned when creating a container that exists
pub const CONTAINER_ALREADY_EXISTS: &str = "ContainerAlreadyExists";

/// Extract the storage service error code (`x-ms-error-code`), if any
pub fn service_error_code(error: &Error) -> Option<&str> {
    match error.kind() {
        ErrorKind::HttpResponse { error_code, .. } => error_code.as_deref(),
        _ => None,
    }
}

/// Check if a container creation failed only because the container exists
pub fn is_container_already_exists(error: &Error) -> bool {
    service_error_code(error) == Some(CONTAINER_ALREADY_EXISTS)
}
