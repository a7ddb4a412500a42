//! Request extractors.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::ServerError;

/// Integer id taken from the single path parameter of a route.
///
/// Anything that does not parse as an `i32` is answered with 400 and a JSON
/// body instead of axum's plain-text rejection.
#[derive(Debug, Clone, Copy)]
pub struct ResourceId(pub i32);

impl<S> FromRequestParts<S> for ResourceId
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|err| {
                tracing::debug!("rejected path id: {err}");
                ServerError::InvalidId
            })?;
        Ok(Self(id))
    }
}
