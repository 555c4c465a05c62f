use std::convert::Infallible;
use std::net::{IpAddr, SocketAddr};

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::HeaderMap;
use axum::http::request::Parts;

use crate::domain::ClientId;
use crate::presentation::state::AppState;

const FORWARDED_FOR: &str = "x-forwarded-for";
const REAL_IP: &str = "x-real-ip";

/// Rate limiting identity of the caller.
///
/// The peer address is authoritative. Proxy headers are only read when
/// proxy trust is enabled and the peer itself is a configured trusted proxy;
/// the client is then the right-most `X-Forwarded-For` hop that is not a
/// trusted proxy.
#[derive(Debug, Clone)]
pub struct ClientIdentity(pub ClientId);

impl FromRequestParts<AppState> for ClientIdentity {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip());

        let client = resolve_client(
            peer,
            &parts.headers,
            state.trust_proxy_headers,
            &state.trusted_proxies,
        )
        .map(ClientId::new)
        .unwrap_or_else(ClientId::unknown);

        Ok(Self(client))
    }
}

/// Picks the client address for a request arriving from `peer`.
pub fn resolve_client(
    peer: Option<IpAddr>,
    headers: &HeaderMap,
    trust_proxy_headers: bool,
    trusted_proxies: &[IpAddr],
) -> Option<String> {
    let peer = peer?;

    if !trust_proxy_headers || !trusted_proxies.contains(&peer) {
        return Some(peer.to_string());
    }

    forwarded_client(headers, trusted_proxies)
        .or_else(|| header_value(headers, REAL_IP))
        .or_else(|| Some(peer.to_string()))
}

fn forwarded_client(headers: &HeaderMap, trusted_proxies: &[IpAddr]) -> Option<String> {
    let chain = header_value(headers, FORWARDED_FOR)?;

    chain
        .rsplit(',')
        .map(str::trim)
        .filter(|hop| !hop.is_empty())
        .find(|hop| {
            hop.parse::<IpAddr>()
                .map(|ip| !trusted_proxies.contains(&ip))
                .unwrap_or(true)
        })
        .map(String::from)
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}
