//! Async API client core for the ParkFlow parking service.
//!
//! # Overview
//! A thin wrapper around an HTTP fetch: build request options (method, JSON
//! content-type header, optional serialized body), perform one call against
//! `base_url + path`, and return the decoded JSON — or fail with a fixed
//! "not ok" error when the response status falls outside the success range.
//! Typed operations for the ParkFlow endpoints (login, slots, transactions,
//! metrics) are one-line wrappers over that helper.
//!
//! # Design
//! - `ParkingClient` is stateless — it holds only `base_url` and a shared
//!   `reqwest` handle; calls are independent and may run concurrently.
//! - Paths are appended to the base URL verbatim; nothing is escaped or
//!   normalized.
//! - A request body is attached only for non-`GET` methods; for `GET` the
//!   data argument is ignored, never query-encoded.
//! - Non-success statuses collapse into one fixed error that preserves
//!   neither status nor body; decode failures forward the JSON decoder's
//!   error untouched.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::{ParkingClient, DEFAULT_BASE_URL};
pub use error::FetchError;
pub use http::{request_options, HttpMethod, RequestOptions};
pub use types::{
    AddTransactionResponse, CreatedTransaction, LoginRequest, LoginResponse, Metrics,
    MetricsResponse, NewTransaction, SeedResponse, Slot, SlotStatus, SlotUpdate, SlotsResponse,
    TransactionRecord, TransactionsResponse, UpdateSlotResponse, User,
};
