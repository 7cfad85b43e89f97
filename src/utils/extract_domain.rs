//! Destination domain extraction for popularity metrics.

use url::Url;

/// Extracts the registrable host of a stored URL.
///
/// The host is taken from the parsed URL, so a `:port` suffix never ends up
/// in the result. A leading `www.` is stripped. IPv6 hosts keep their
/// brackets (e.g. `[::1]`).
///
/// Returns `None` when the URL cannot be parsed or has no host.
///
/// # Examples
///
/// ```
/// use tinylink::utils::extract_domain::extract_domain;
///
/// assert_eq!(extract_domain("https://www.example.com/path").as_deref(), Some("example.com"));
/// assert_eq!(extract_domain("https://localhost:8080/x").as_deref(), Some("localhost"));
/// ```
pub fn extract_domain(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;
    let host = host.strip_prefix("www.").unwrap_or(host);

    Some(host.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_domain_strips_www() {
        assert_eq!(
            extract_domain("https://www.example.com/path").as_deref(),
            Some("example.com")
        );
    }

    #[test]
    fn test_extract_domain_strips_port() {
        assert_eq!(
            extract_domain("https://localhost:8080/x").as_deref(),
            Some("localhost")
        );
        assert_eq!(
            extract_domain("http://www.example.com:3000").as_deref(),
            Some("example.com")
        );
    }

    #[test]
    fn test_extract_domain_keeps_subdomain() {
        assert_eq!(
            extract_domain("https://sub.example.com").as_deref(),
            Some("sub.example.com")
        );
    }

    #[test]
    fn test_extract_domain_only_leading_www() {
        assert_eq!(
            extract_domain("https://api.www.example.com").as_deref(),
            Some("api.www.example.com")
        );
    }

    #[test]
    fn test_extract_domain_ipv4() {
        assert_eq!(
            extract_domain("http://192.168.1.1:8080/api").as_deref(),
            Some("192.168.1.1")
        );
    }

    #[test]
    fn test_extract_domain_ipv6() {
        assert_eq!(
            extract_domain("http://[::1]:8080/").as_deref(),
            Some("[::1]")
        );
    }

    #[test]
    fn test_extract_domain_unparseable() {
        assert_eq!(extract_domain("not a url"), None);
        assert_eq!(extract_domain(""), None);
    }
}
