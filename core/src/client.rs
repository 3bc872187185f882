//! Async client for the ParkFlow parking API.
//!
//! # Design
//! `ParkingClient` holds only a base URL and a `reqwest` handle and carries no
//! mutable state between calls, so any number of calls may run concurrently
//! with no coordination. Every operation funnels through
//! [`ParkingClient::fetch_data`]: build the request options, attach the JSON
//! body when the method is not `GET`, perform the single round-trip, gate on
//! the success range, decode the body. The target address is the base URL with
//! the relative path appended verbatim — no escaping, no separator
//! normalization.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::FetchError;
use crate::http::{request_options, HttpMethod};
use crate::types::{
    AddTransactionResponse, LoginRequest, LoginResponse, MetricsResponse, NewTransaction,
    SeedResponse, SlotStatus, SlotUpdate, SlotsResponse, TransactionsResponse,
    UpdateSlotResponse,
};

/// Address of the ParkFlow backend a default client talks to.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000/";

/// Async client for the ParkFlow API.
///
/// Relative paths are appended to `base_url` exactly as given; with the
/// default base URL, `fetch("users")` targets `http://127.0.0.1:5000/users`.
#[derive(Debug, Clone)]
pub struct ParkingClient {
    base_url: String,
    http: reqwest::Client,
}

impl Default for ParkingClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ParkingClient {
    /// Create a client against `base_url`, stored verbatim.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Target address for a relative path: plain concatenation, no separator
    /// inserted or removed.
    fn target(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET` a path and decode the JSON response — the all-defaults form of
    /// [`ParkingClient::fetch_data`].
    pub async fn fetch<R>(&self, path: &str) -> Result<R, FetchError>
    where
        R: DeserializeOwned,
    {
        self.fetch_data(path, HttpMethod::Get, &serde_json::json!({})).await
    }

    /// Perform one request against the base URL and decode the JSON response.
    ///
    /// `data` is serialized and attached as the body for every method except
    /// `Get`, where it is ignored entirely (not query-encoded). A response
    /// status outside the success range fails with [`FetchError::NotOk`]
    /// before the body is read; a success status with an unparseable body
    /// fails with [`FetchError::Decode`]. There is no timeout and no retry —
    /// the call suspends until the exchange completes.
    pub async fn fetch_data<B, R>(
        &self,
        path: &str,
        method: HttpMethod,
        data: &B,
    ) -> Result<R, FetchError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let mut options = request_options(method);
        if method != HttpMethod::Get {
            options.body = Some(serde_json::to_string(data).map_err(FetchError::Serialize)?);
        }

        let url = self.target(path);
        tracing::debug!("{} {}", method.as_str(), url);

        let mut request = self.http.request(method.into(), url.as_str());
        for (name, value) in &options.headers {
            request = request.header(name.as_str(), value.as_str());
        }
        if let Some(body) = options.body {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!("{} {} returned status {}", method.as_str(), url, status);
            return Err(FetchError::NotOk);
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(FetchError::Decode)
    }

    /// Authenticate via `POST login`. Rejected credentials are a 401 from the
    /// server and therefore surface as [`FetchError::NotOk`].
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, FetchError> {
        let payload = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.fetch_data("login", HttpMethod::Post, &payload).await
    }

    /// Seed the backend's demo users and slots via `GET insert-db`.
    pub async fn seed_database(&self) -> Result<SeedResponse, FetchError> {
        self.fetch("insert-db").await
    }

    /// Dashboard figures via `GET metrics`.
    pub async fn metrics(&self) -> Result<MetricsResponse, FetchError> {
        self.fetch("metrics").await
    }

    /// Every parking slot via `GET parkingSlots`, ordered by slot number.
    pub async fn parking_slots(&self) -> Result<SlotsResponse, FetchError> {
        self.fetch("parkingSlots").await
    }

    /// Mark a slot available or taken via `PUT updateSlotStatus`.
    pub async fn update_slot_status(
        &self,
        slot_number: &str,
        status: SlotStatus,
    ) -> Result<UpdateSlotResponse, FetchError> {
        let payload = SlotUpdate {
            slot_number: slot_number.to_string(),
            status,
        };
        self.fetch_data("updateSlotStatus", HttpMethod::Put, &payload).await
    }

    /// Every recorded transaction via `GET getAllTransactions`, newest first.
    pub async fn transactions(&self) -> Result<TransactionsResponse, FetchError> {
        self.fetch("getAllTransactions").await
    }

    /// Record a parking transaction via `POST addTransaction`.
    pub async fn add_transaction(
        &self,
        input: &NewTransaction,
    ) -> Result<AddTransactionResponse, FetchError> {
        self.fetch_data("addTransaction", HttpMethod::Post, input).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_concatenates_base_and_path_exactly() {
        let client = ParkingClient::new("http://127.0.0.1:5000/");
        assert_eq!(client.target("users"), "http://127.0.0.1:5000/users");
    }

    #[test]
    fn target_inserts_no_missing_separator() {
        let client = ParkingClient::new("http://127.0.0.1:5000");
        assert_eq!(client.target("users"), "http://127.0.0.1:5000users");
    }

    #[test]
    fn target_keeps_duplicate_separators() {
        let client = ParkingClient::new("http://127.0.0.1:5000/");
        assert_eq!(client.target("/users"), "http://127.0.0.1:5000//users");
    }

    #[test]
    fn empty_path_targets_the_base_url() {
        let client = ParkingClient::new("http://127.0.0.1:5000/");
        assert_eq!(client.target(""), "http://127.0.0.1:5000/");
    }

    #[test]
    fn default_client_uses_the_fixed_base_url() {
        let client = ParkingClient::default();
        assert_eq!(client.target(""), DEFAULT_BASE_URL);
    }
}
