//! Body extractor accepting JSON or URL-encoded forms

use crate::ApiError;

use std::future::Future;

use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::header,
};
use serde::de::DeserializeOwned;

/// Deserializes the request body as a form when the content type says so,
/// and as JSON otherwise.
///
/// The landing page posts `application/x-www-form-urlencoded`; API clients
/// post JSON.
pub struct JsonOrForm<T>(pub T);

impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request(
        req: Request,
        state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let is_form = req
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"));

            if is_form {
                let Form(value) = Form::<T>::from_request(req, state)
                    .await
                    .map_err(|e| ApiError::bad_request(e.body_text()))?;
                return Ok(JsonOrForm(value));
            }

            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|e| ApiError::bad_request(e.body_text()))?;

            Ok(JsonOrForm(value))
        }
    }
}
