// ABOUTME: URL helpers: registrable domain via the public suffix list, and site root URLs.
// ABOUTME: Both return None for input that does not parse as an absolute URL with a host.

use url::{Host, Url};

/// Returns the registrable domain of `url` ("https://a.b.com/1/2" gives "b.com").
///
/// Multi-label public suffixes are honoured, so "shop.example.com.pl" gives
/// "example.com.pl". Hosts without a registrable part (IP addresses,
/// "localhost") are returned as-is.
pub fn get_hostname(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    match parsed.host()? {
        Host::Domain(host) => Some(psl::domain_str(host).unwrap_or(host).to_string()),
        Host::Ipv4(_) | Host::Ipv6(_) => parsed.host_str().map(str::to_string),
    }
}

/// Returns the site root of `url` as `scheme://host[:port]`.
pub fn get_site_url(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;
    match parsed.port() {
        Some(port) => Some(format!("{}://{}:{}", parsed.scheme(), host, port)),
        None => Some(format!("{}://{}", parsed.scheme(), host)),
    }
}
