//! HTTP response type produced by [`HttpClient`](crate::clients::HttpClient).

use std::collections::HashMap;

/// An HTTP response from the Stripe API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, lowercased (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("request-id")
    }

    /// Returns the `Idempotent-Replayed` flag: `true` when the server
    /// answered from its idempotency cache.
    #[must_use]
    pub fn idempotent_replayed(&self) -> bool {
        self.header("idempotent-replayed") == Some("true")
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn headers(pairs: &[(&str, &str)]) -> HashMap<String, Vec<String>> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), vec![(*v).to_string()]))
            .collect()
    }

    #[test]
    fn test_is_ok_for_2xx_only() {
        assert!(HttpResponse::new(200, HashMap::new(), json!({})).is_ok());
        assert!(HttpResponse::new(299, HashMap::new(), json!({})).is_ok());
        assert!(!HttpResponse::new(302, HashMap::new(), json!({})).is_ok());
        assert!(!HttpResponse::new(404, HashMap::new(), json!({})).is_ok());
    }

    #[test]
    fn test_request_id_and_replay_headers() {
        let response = HttpResponse::new(
            200,
            headers(&[("request-id", "req_123"), ("idempotent-replayed", "true")]),
            json!({}),
        );
        assert_eq!(response.request_id(), Some("req_123"));
        assert!(response.idempotent_replayed());

        let response = HttpResponse::new(200, HashMap::new(), json!({}));
        assert_eq!(response.request_id(), None);
        assert!(!response.idempotent_replayed());
    }
}
