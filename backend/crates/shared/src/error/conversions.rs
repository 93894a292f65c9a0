//! Error conversions - From implementations for common error types
//!
//! Provides automatic conversion from framework error types to [`AppError`]
//! and the HTTP rendering of [`AppError`].

#[cfg(any(feature = "validator", feature = "axum"))]
use super::app_error::AppError;

// ============================================================================
// validator conversions (feature-gated)
// ============================================================================

#[cfg(feature = "validator")]
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<(String, String)> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                let field = field.to_string();
                errs.iter().map(move |e| {
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field));
                    (field.clone(), message)
                })
            })
            .collect();

        // HashMap の順序は不定なのでフィールド名で安定させる
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        fields.into_iter().fold(
            AppError::bad_request("Validation failed"),
            |err, (field, message)| err.with_field_error(field, message),
        )
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // RFC 7807 Problem Details for HTTP APIs
        let mut body = serde_json::json!({
            "type": format!("https://httpstatuses.io/{}", self.status_code()),
            "title": self.kind().as_str(),
            "status": self.status_code(),
            "detail": self.message(),
        });

        if !self.field_errors().is_empty() {
            body["errors"] = serde_json::json!(self.field_errors());
        }

        (status, Json(body)).into_response()
    }
}
