use url::Url;

/// Check whether `input` is a well-formed absolute URL.
///
/// Purely syntactic: the string must parse as an absolute URL and carry an
/// authority (host) component. No DNS lookup or reachability check is
/// performed, and no error is ever surfaced.
pub fn is_valid_url(input: &str) -> bool {
    match Url::parse(input) {
        Ok(url) => url.has_host(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_absolute_urls() {
        let valid = [
            "https://example.com",
            "http://example.com",
            "https://www.google.com",
            "https://example.com/path?query=1#fragment",
            "https://example.com:8443",
            "ftp://files.example.com/pub",
            "http://192.168.1.1:8080",
        ];

        for url in valid {
            assert!(is_valid_url(url), "{:?} should be accepted", url);
        }
    }

    #[test]
    fn test_rejects_empty_string() {
        assert!(!is_valid_url(""));
    }

    #[test]
    fn test_rejects_missing_scheme() {
        assert!(!is_valid_url("google.com"));
        assert!(!is_valid_url("www.example.com/page"));
        assert!(!is_valid_url("://missing-scheme"));
    }

    #[test]
    fn test_rejects_relative_paths() {
        assert!(!is_valid_url("/relative/path"));
        assert!(!is_valid_url("./file.html"));
        assert!(!is_valid_url("../up"));
    }

    #[test]
    fn test_rejects_malformed_input() {
        assert!(!is_valid_url("not a url"));
        assert!(!is_valid_url("https://"));
        assert!(!is_valid_url("ht tp://example.com"));
    }

    #[test]
    fn test_rejects_schemes_without_authority() {
        // Parses as a URL but has no host to point a browser at.
        assert!(!is_valid_url("mailto:user@example.com"));
        assert!(!is_valid_url("data:text/plain,hello"));
    }

    #[test]
    fn test_deterministic() {
        for _ in 0..3 {
            assert!(is_valid_url("https://example.com"));
            assert!(!is_valid_url("nope"));
        }
    }
}
