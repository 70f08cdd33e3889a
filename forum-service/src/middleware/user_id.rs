use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use service_core::error::AppError;

/// UserId extractor for forum-service
///
/// Extracts user_id from the X-User-ID header sent by the trusted gateway
/// once the caller's credentials have been verified upstream. Every mutating
/// handler takes this extractor (or `Option<UserId>` when the handler wants
/// to control check ordering itself); public reads do not.
///
/// A request that reaches a mutating handler without a resolvable user id is
/// an authorization failure, never a crash.
#[derive(Debug, Clone)]
pub struct UserId(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get("X-User-ID")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Forbidden(anyhow::anyhow!("User ID is missing or invalid"))
            })?;

        // Add to tracing span for observability
        tracing::Span::current().record("user_id", user_id);

        Ok(UserId(user_id.to_string()))
    }
}
