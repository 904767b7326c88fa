//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::domain::FieldErrors;
use crate::errors::AppError;

/// JSON body that has already passed `Validate`.
///
/// A body that does not deserialize becomes `AppError::Malformed`; a body
/// that fails validation becomes `AppError::Validation` with one message
/// per field.
///
/// # Example
///
/// ```rust,ignore
/// use payroll::api::extractors::ValidatedJson;
/// use payroll::domain::Employee;
///
/// async fn create(ValidatedJson(employee): ValidatedJson<Employee>) {
///     // employee passed validate_employee
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::malformed(e.body_text()))?;

        value
            .validate()
            .map_err(|e| AppError::Validation(field_messages(&e)))?;

        Ok(ValidatedJson(value))
    }
}

/// Flatten validator errors into field -> first message
fn field_messages(errors: &validator::ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let message = errs
                .first()
                .and_then(|e| e.message.as_ref())
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{} is invalid", field));
            (field.to_string(), message)
        })
        .collect()
}
