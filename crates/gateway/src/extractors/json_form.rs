//! JSON form extractor.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use common::AppError;

/// JSON extractor whose rejection is reported as `AppError::BadRequest`.
///
/// Field rules are not applied here; the account service validates every
/// form it receives.
pub struct JsonForm<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
            debug!(error = %e, "Rejected request body");
            AppError::bad_request(e.body_text())
        })?;

        Ok(JsonForm(value))
    }
}
