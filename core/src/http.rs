//! Request descriptor types for the fetch helper.
//!
//! # Design
//! A request is described as plain data before it is handed to the transport:
//! a method, a header list, and an optional pre-serialized JSON body. The
//! descriptor is built fresh per call by [`request_options`], owned by that
//! call, and carries no URL — the target address is formed separately by the
//! client from its base URL and the caller's relative path.

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Canonical upper-case method name.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// An HTTP request described as plain data.
///
/// Built by [`request_options`]; the body is attached afterwards by
/// `ParkingClient::fetch_data` when the method calls for one.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: HttpMethod,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// Build the options for a request with the given method.
///
/// Every descriptor declares the JSON content type; no body is attached here.
pub fn request_options(method: HttpMethod) -> RequestOptions {
    RequestOptions {
        method,
        headers: vec![("content-type".to_string(), "application/json".to_string())],
        body: None,
    }
}
