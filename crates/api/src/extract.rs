use crate::errors::ApiError;
use axum::extract::{FromRequest, Request};
use axum::Json;
use knockknock_domain::DomainError;
use serde::de::DeserializeOwned;

/// `Json` that answers malformed or mistyped bodies with 400 and the usual
/// `{"error": ...}` body instead of axum's plain-text 415/422.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(ApiError(DomainError::Validation(rejection.body_text()))),
        }
    }
}
