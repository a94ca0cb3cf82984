//! Client IP extractor
//!
//! Resolves the peer address for security-log events, preferring the
//! first `X-Forwarded-For` hop when the server sits behind a proxy.

use std::convert::Infallible;
use std::net::SocketAddr;

use axum::{async_trait, extract::ConnectInfo, extract::FromRequestParts, http::request::Parts};

/// Best-effort client address
#[derive(Debug, Clone)]
pub struct ClientIp(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for ClientIp
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let forwarded = parts
            .headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        if let Some(ip) = forwarded {
            return Ok(ClientIp(ip));
        }

        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_string())
            .unwrap_or_else(|| "unknown".to_string());

        Ok(ClientIp(peer))
    }
}
