use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::Error;
use crate::utils::validation::validate;

/// JSON body that has been deserialized and passed its `Validate` rules.
/// Undecodable and invalid bodies both surface as 422 with the structured error body.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(reject_body)?;
        validate(&value)?;
        Ok(ValidatedJson(value))
    }
}

fn reject_body(rejection: JsonRejection) -> Error {
    let message = rejection.body_text();
    tracing::warn!(error = %message, "rejected request body");
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        Error::PayloadTooLarge(message)
    } else {
        Error::InvalidInput(message)
    }
}
