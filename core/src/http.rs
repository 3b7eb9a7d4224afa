//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The core
//! crate builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network; the blocking and async adapters in `brawl-client`
//! are the only code that performs I/O. Every endpoint of the stats API is a
//! `GET`, so a request carries no method and no body.

/// A `GET` request described as plain data.
///
/// Built by `BrawlApi::build_*` methods. Query parameters are kept unencoded
/// so tests can compare them directly; `url()` produces the encoded form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
}

impl HttpRequest {
    /// Full request URL with percent-encoded query parameters.
    pub fn url(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let query = self
            .query
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{query}", self.path)
    }

    /// Value of the first header named `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// An HTTP response described as plain data.
///
/// Constructed by the adapter after executing an `HttpRequest`, then passed
/// to `BrawlApi::parse_*` methods for status translation and decoding. `url`
/// is the request URL, kept so errors can name it.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub url: String,
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// Returns true if status is in 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_without_query_is_path() {
        let req = HttpRequest {
            path: "http://localhost:3000/events".to_string(),
            query: Vec::new(),
            headers: Vec::new(),
        };
        assert_eq!(req.url(), "http://localhost:3000/events");
    }

    #[test]
    fn url_encodes_query_values() {
        let req = HttpRequest {
            path: "http://localhost:3000/club/search".to_string(),
            query: vec![("name".to_string(), "Cactus Bandits".to_string())],
            headers: Vec::new(),
        };
        assert_eq!(req.url(), "http://localhost:3000/club/search?name=Cactus%20Bandits");
    }

    #[test]
    fn header_lookup_ignores_case() {
        let req = HttpRequest {
            path: String::new(),
            query: Vec::new(),
            headers: vec![("authorization".to_string(), "token".to_string())],
        };
        assert_eq!(req.header("Authorization"), Some("token"));
        assert_eq!(req.header("accept"), None);
    }

    #[test]
    fn is_success_covers_2xx_only() {
        let ok = HttpResponse { url: String::new(), status: 204, headers: Vec::new(), body: String::new() };
        let missing = HttpResponse { url: String::new(), status: 404, headers: Vec::new(), body: String::new() };
        assert!(ok.is_success());
        assert!(!missing.is_success());
    }
}
