use std::net::IpAddr;

use axum::http::HeaderMap;
use docsum::presentation::handlers::resolve_client;

fn ip(value: &str) -> IpAddr {
    value.parse().unwrap()
}

fn headers(pairs: &[(&'static str, &str)]) -> HeaderMap {
    let mut map = HeaderMap::new();
    for (name, value) in pairs {
        map.insert(*name, value.parse().unwrap());
    }
    map
}

#[test]
fn given_untrusted_peer_when_forwarded_for_present_then_peer_address_wins() {
    let headers = headers(&[("x-forwarded-for", "203.0.113.9"), ("x-real-ip", "203.0.113.8")]);

    let client = resolve_client(Some(ip("198.51.100.20")), &headers, true, &[ip("10.1.0.2")]);

    assert_eq!(client.as_deref(), Some("198.51.100.20"));
}

#[test]
fn given_proxy_trust_disabled_when_peer_is_listed_proxy_then_headers_are_ignored() {
    let headers = headers(&[("x-forwarded-for", "203.0.113.9")]);

    let client = resolve_client(Some(ip("10.1.0.2")), &headers, false, &[ip("10.1.0.2")]);

    assert_eq!(client.as_deref(), Some("10.1.0.2"));
}

#[test]
fn given_chain_of_trusted_proxies_when_resolving_then_skips_them_from_the_right() {
    let headers = headers(&[(
        "x-forwarded-for",
        "1.2.3.4, 203.0.113.5, 10.1.0.3, 10.1.0.2",
    )]);

    let client = resolve_client(
        Some(ip("10.1.0.2")),
        &headers,
        true,
        &[ip("10.1.0.2"), ip("10.1.0.3")],
    );

    assert_eq!(client.as_deref(), Some("203.0.113.5"));
}

#[test]
fn given_trusted_proxy_without_forwarded_for_when_resolving_then_falls_back_to_real_ip() {
    let headers = headers(&[("x-real-ip", "203.0.113.7")]);

    let client = resolve_client(Some(ip("10.1.0.2")), &headers, true, &[ip("10.1.0.2")]);

    assert_eq!(client.as_deref(), Some("203.0.113.7"));
}

#[test]
fn given_trusted_proxy_without_headers_when_resolving_then_uses_proxy_address() {
    let client = resolve_client(Some(ip("10.1.0.2")), &HeaderMap::new(), true, &[ip("10.1.0.2")]);

    assert_eq!(client.as_deref(), Some("10.1.0.2"));
}

#[test]
fn given_no_peer_address_when_resolving_then_headers_are_not_consulted() {
    let headers = headers(&[("x-forwarded-for", "203.0.113.9")]);

    assert_eq!(resolve_client(None, &headers, true, &[]), None);
}
