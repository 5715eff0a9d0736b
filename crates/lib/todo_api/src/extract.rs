//! Custom Axum extractors and path helpers.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::error::AppError;
use crate::models::FieldError;

/// JSON body that has been deserialized and passed its `validator` rules.
///
/// Malformed JSON, fields of the wrong type and rule violations all reject
/// with [`AppError::Validation`]. Type errors keep the offending field path.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(raw) = Json::<serde_json::Value>::from_request(req, state)
            .await
            .map_err(|rejection| {
                AppError::Validation(vec![FieldError {
                    path: String::new(),
                    message: rejection.body_text(),
                }])
            })?;
        let value: T = serde_path_to_error::deserialize(raw)
            .map_err(|err| AppError::Validation(vec![shape_error(&err)]))?;
        value
            .validate()
            .map_err(|errors| AppError::Validation(field_errors(&errors)))?;
        Ok(ValidatedJson(value))
    }
}

/// Turns a typed deserialization failure into a field error.
///
/// A missing field fails at the enclosing object, so its name is recovered
/// from serde's `missing field` message.
fn shape_error(err: &serde_path_to_error::Error<serde_json::Error>) -> FieldError {
    let message = err.inner().to_string();
    let path = match err.path().to_string() {
        root if root == "." => message
            .strip_prefix("missing field `")
            .and_then(|rest| rest.split_once('`'))
            .map(|(field, _)| field.to_string())
            .unwrap_or_default(),
        path => path,
    };
    FieldError { path, message }
}

/// Flattens `validator` output into a path-sorted list.
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| FieldError {
                path: field.to_string(),
                message: e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string()),
            })
        })
        .collect();
    out.sort_by(|a, b| a.path.cmp(&b.path));
    out
}

/// Parses a positive numeric ID from a path segment.
///
/// `label` names the resource in the error, e.g. `"list"` gives
/// `Invalid list ID`.
pub fn parse_id(raw: &str, label: &str) -> Result<i64, AppError> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::BadRequest(format!("Invalid {label} ID"))),
    }
}
