//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Receipt API                        │
//! │                                                                         │
//! │  Client                      Rust Backend                               │
//! │  ──────                      ────────────                               │
//! │                                                                         │
//! │  POST /receipts/process                                                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Handler: Result<Json<T>, ApiError>                              │  │
//! │  │         │                                                        │  │
//! │  │  Bad JSON? ───────── JsonRejection ───────────┐                 │  │
//! │  │  Bad receipt? ────── ReceiptError ────────────┼──► ApiError ───►│  │
//! │  │  Store failure? ──── StoreError ──────────────┘                 │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ◄──── 400 { "code": "INVALID_RECEIPT", "message": ..., "errors": [] }  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use receipt_core::{ErrorKind, ReceiptError};
use receipt_store::StoreError;
use serde::Serialize;

/// Error body returned from every failing endpoint.
///
/// ## Serialization
/// ```json
/// {
///   "code": "INVALID_RECEIPT",
///   "message": "(5e1c...) failed to parse receipt: item 1: ...",
///   "errors": [{ "kind": "EMPTY_INPUT", "message": "item 1: ..." }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,

    /// One entry per failing receipt field
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ErrorDetail>,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Body was not a JSON receipt (400)
    InvalidRequest,

    /// Receipt failed to parse or validate (400)
    InvalidReceipt,

    /// Unknown receipt id (404)
    NotFound,

    /// Internal server error (500)
    Internal,
}

impl ErrorCode {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorCode::InvalidRequest | ErrorCode::InvalidReceipt => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// A single receipt field failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorDetail {
    pub kind: ErrorKind,
    pub message: String,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
            errors: Vec::new(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    pub fn status(&self) -> StatusCode {
        self.code.status()
    }
}

/// Converts receipt parse and validation errors to API errors.
impl From<ReceiptError> for ApiError {
    fn from(err: ReceiptError) -> Self {
        let errors = err
            .causes()
            .iter()
            .map(|cause| ErrorDetail {
                kind: cause.kind(),
                message: cause.to_string(),
            })
            .collect();

        ApiError {
            code: ErrorCode::InvalidReceipt,
            message: err.to_string(),
            errors,
        }
    }
}

/// Converts store errors to API errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        // Log the actual error but return a generic message
        tracing::error!("Store operation failed: {}", err);
        ApiError::internal("Store operation failed")
    }
}

/// Converts JSON extractor rejections to API errors.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::new(ErrorCode::InvalidRequest, rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Convenience type alias for handler results.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use receipt_core::{Receipt, UnparsedLineItem, UnparsedReceipt};

    #[test]
    fn test_receipt_error_lists_every_cause() {
        let raw = UnparsedReceipt {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "".to_string(),
            items: vec![UnparsedLineItem::new("Gum", "")],
            total: "1.00".to_string(),
        };
        let err = Receipt::parse("abc", &raw, true).unwrap_err();
        let api: ApiError = err.into();

        assert_eq!(api.code, ErrorCode::InvalidReceipt);
        assert_eq!(api.status(), StatusCode::BAD_REQUEST);
        assert_eq!(api.errors.len(), 2);
        assert!(api.errors.iter().all(|e| e.kind == ErrorKind::EmptyInput));

        let json = serde_json::to_value(&api).unwrap();
        assert_eq!(json["code"], "INVALID_RECEIPT");
        assert_eq!(json["errors"][0]["kind"], "EMPTY_INPUT");
    }

    #[test]
    fn test_store_error_is_internal() {
        let api: ApiError = StoreError::LockPoisoned("points").into();
        assert_eq!(api.code, ErrorCode::Internal);
        assert_eq!(api.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api.message, "Store operation failed");

        let json = serde_json::to_value(&api).unwrap();
        assert_eq!(json["code"], "INTERNAL");
        assert!(json.get("errors").is_none());
    }

    #[test]
    fn test_not_found() {
        let api = ApiError::not_found("Receipt", "xyz");
        assert_eq!(api.status(), StatusCode::NOT_FOUND);
        assert_eq!(api.to_string(), "[NotFound] Receipt not found: xyz");
    }
}
