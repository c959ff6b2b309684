use anyhow::anyhow;
use axum::{extract::FromRequestParts, http::request::Parts};
use innkeep_core::AppError;
use innkeep_models::ids::TenantId;

/// Header carrying the tenant a request is scoped to.
pub const TENANT_HEADER: &str = "x-tenant-id";

/// Tenant the current request operates on.
///
/// Every access-control call takes the tenant explicitly; handlers obtain it
/// from this extractor rather than from any ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TenantContext(pub TenantId);

impl TenantContext {
    pub fn tenant_id(&self) -> TenantId {
        self.0
    }
}

impl<S> FromRequestParts<S> for TenantContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(TENANT_HEADER)
            .ok_or_else(|| AppError::bad_request(anyhow!("Missing X-Tenant-Id header")))?
            .to_str()
            .map_err(|_| AppError::bad_request(anyhow!("Invalid X-Tenant-Id header")))?;

        let tenant_id = raw
            .parse::<TenantId>()
            .map_err(|e| AppError::bad_request(anyhow!("Invalid X-Tenant-Id header: {}", e)))?;

        Ok(TenantContext(tenant_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Request, StatusCode};

    async fn extract(header: Option<&str>) -> Result<TenantContext, AppError> {
        let mut builder = Request::builder().uri("/");
        if let Some(value) = header {
            builder = builder.header("X-Tenant-Id", value);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();
        TenantContext::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_reads_tenant_header() {
        let ctx = extract(Some("5")).await.unwrap();
        assert_eq!(ctx.tenant_id().get(), 5);
    }

    #[tokio::test]
    async fn test_missing_header_is_bad_request() {
        let err = extract(None).await.unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_non_numeric_and_non_positive_are_rejected() {
        for value in ["abc", "0", "-3", ""] {
            let err = extract(Some(value)).await.unwrap_err();
            assert_eq!(err.status, StatusCode::BAD_REQUEST, "value {:?}", value);
        }
    }
}
