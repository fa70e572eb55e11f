//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! `ResourceClient` builds `HttpRequest` values and parses `HttpResponse`
//! values without touching the network. A `Transport` executes the round
//! trip in between. The catalog is read-only, so every request is a GET and
//! no method or body is carried.

/// A GET request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// Absolute url: base url joined with `path`.
    pub url: String,
    /// Catalog-relative path, e.g. `/people/4/`. Used in error reports.
    pub path: String,
    pub headers: Vec<(String, String)>,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(status: u16) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: String::new(),
        }
    }

    #[test]
    fn success_range_is_2xx() {
        assert!(status(200).is_success());
        assert!(status(204).is_success());
        assert!(status(299).is_success());
        assert!(!status(199).is_success());
        assert!(!status(301).is_success());
        assert!(!status(404).is_success());
    }
}
