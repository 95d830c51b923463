//! JSON body extractor with structured rejections

use crate::ApiError;

use std::future::Future;
use std::panic::Location;

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use error_location::ErrorLocation;
use serde::de::DeserializeOwned;

/// Like [`axum::Json`], but a body that cannot be read as `T` is answered
/// with a 422 `VALIDATION_ERROR` instead of axum's plain-text rejection.
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request(
        req: Request,
        state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            match Json::<T>::from_request(req, state).await {
                Ok(Json(value)) => Ok(ApiJson(value)),
                Err(rejection) => Err(rejection_to_api_error(rejection)),
            }
        }
    }
}

#[track_caller]
fn rejection_to_api_error(rejection: JsonRejection) -> ApiError {
    log::debug!("Rejected JSON body: {}", rejection.body_text());

    ApiError::Validation {
        message: rejection.body_text(),
        field: None,
        location: ErrorLocation::from(Location::caller()),
    }
}
