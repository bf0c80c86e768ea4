//! Request extractors shared by the domain routers

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Deserialize};
use validator::{Validate, ValidationErrors};

use crate::Error;

const DEFAULT_PAGE_SIZE: i64 = 10;
const MIN_PAGE_SIZE: i64 = 5;
const MAX_PAGE_SIZE: i64 = 100;

/// `?page_id=2&page_size=20` query parameters
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub page_id: Option<i64>,
    #[serde(default)]
    pub page_size: Option<i64>,
}

impl Pagination {
    /// 1-based page number; anything below 1 reads as the first page
    pub fn page_id(&self) -> i64 {
        self.page_id.map_or(1, |page| page.max(1))
    }

    /// Rows per page, clamped to 5..=100
    pub fn limit(&self) -> i64 {
        self.page_size
            .map_or(DEFAULT_PAGE_SIZE, |size| size.clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE))
    }

    /// Rows to skip before the requested page
    pub fn offset(&self) -> i64 {
        (self.page_id() - 1).saturating_mul(self.limit())
    }
}

/// `Json<T>` that also runs `T`'s `validator` rules.
///
/// Malformed bodies and rule violations both answer 400 `VALIDATION_ERROR`.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

#[derive(Debug)]
pub enum ValidatedJsonRejection {
    Json(JsonRejection),
    Invalid(ValidationErrors),
}

impl IntoResponse for ValidatedJsonRejection {
    fn into_response(self) -> Response {
        let message = match self {
            ValidatedJsonRejection::Json(rejection) => rejection.body_text(),
            ValidatedJsonRejection::Invalid(errors) => describe(&errors),
        };
        Error::Validation(message).into_response()
    }
}

/// `"field: message; other: message"`, sorted by field name
fn describe(errors: &ValidationErrors) -> String {
    let mut fields: Vec<String> = errors
        .field_errors()
        .into_iter()
        .map(|(field, failures)| {
            let reasons: Vec<String> = failures
                .iter()
                .map(|failure| {
                    failure
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| failure.code.to_string())
                })
                .collect();
            format!("{}: {}", field, reasons.join(", "))
        })
        .collect();

    if fields.is_empty() {
        // Nested (e.g. list item) failures carry no top-level field entries
        return format!("Invalid request: {}", errors);
    }

    fields.sort();
    fields.join("; ")
}

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ValidatedJsonRejection::Json)?;

        value.validate().map_err(ValidatedJsonRejection::Invalid)?;

        Ok(ValidatedJson(value))
    }
}
