//! URL utility functions.

use reqwest::Url;

/// Masks a URL down to scheme, host and port.
///
/// RPC providers embed API keys in the path or query string, so only the
/// origin is safe to log. Unparseable input is masked entirely.
///
/// # Examples
/// - `https://my-node.solana-mainnet.quiknode.pro/abc123/` → `https://my-node.solana-mainnet.quiknode.pro/***`
/// - `https://api.devnet.solana.com` → `https://api.devnet.solana.com`
/// - `invalid-url` → `***`
pub fn mask_url(url: &str) -> String {
    let Ok(parsed) = Url::parse(url) else {
        return "***".to_string();
    };
    let Some(host) = parsed.host_str() else {
        return "***".to_string();
    };

    let origin = match parsed.port() {
        Some(port) => format!("{}://{}:{}", parsed.scheme(), host, port),
        None => format!("{}://{}", parsed.scheme(), host),
    };

    let has_path = parsed.path().len() > 1;
    if has_path || parsed.query().is_some() {
        format!("{origin}/***")
    } else {
        origin
    }
}

/// Joins an absolute path onto a request origin such as `https://example.com`.
pub fn join_origin(origin: &str, path: &str) -> String {
    format!(
        "{}/{}",
        origin.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
