//! Wire DTOs for the ParkFlow API.
//!
//! # Design
//! These types mirror the server's JSON exactly — envelope fields
//! (`success`, `message`) included — and are defined independently of the
//! mock-server crate; integration tests catch schema drift. Monetary fields
//! (`rate`, `amount_paid`) arrive as decimal strings because the server
//! stringifies its numeric columns, and transaction `status` stays a plain
//! `String` because the server accepts and stores arbitrary values there.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A logged-in user as returned by `POST login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub role: String,
}

/// Occupancy state of a parking slot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    Available,
    Taken,
}

/// A parking slot as listed by `GET parkingSlots` and echoed by
/// `PUT updateSlotStatus`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Slot {
    pub id: i64,
    pub slot_number: String,
    pub status: SlotStatus,
}

/// Request payload for `POST login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response envelope for a successful login. A rejected login is a 401 and
/// never reaches deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub user: User,
}

/// Response envelope for `GET insert-db`: the emails and slot numbers present
/// after seeding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeedResponse {
    pub success: bool,
    pub message: String,
    pub users: Vec<String>,
    pub parking_slots: Vec<String>,
}

/// Dashboard figures computed by `GET metrics`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Metrics {
    pub monthly_earnings: f64,
    pub daily_earnings: f64,
    pub monthly_transactions: i64,
    pub available_slots: i64,
    pub taken_slots: i64,
    pub total_slots: i64,
}

/// Response envelope for `GET metrics`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricsResponse {
    pub success: bool,
    pub metrics: Metrics,
}

/// Response envelope for `GET parkingSlots`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SlotsResponse {
    pub success: bool,
    pub parking_slots: Vec<Slot>,
}

/// Request payload for `PUT updateSlotStatus`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotUpdate {
    pub slot_number: String,
    pub status: SlotStatus,
}

/// Response envelope for `PUT updateSlotStatus`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateSlotResponse {
    pub success: bool,
    pub message: String,
    pub slot: Slot,
}

/// Request payload for `POST addTransaction`. The wire uses the front-end's
/// camelCase field names, and the transaction id travels as `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    #[serde(rename = "id")]
    pub transaction_id: String,
    pub plate_number: String,
    pub vehicle_model: String,
    pub slot_code: String,
    pub duration: String,
    pub price: f64,
    pub status: String,
}

impl NewTransaction {
    /// Build a payload with a freshly generated v4 UUID transaction id.
    pub fn new(
        plate_number: &str,
        vehicle_model: &str,
        slot_code: &str,
        duration: &str,
        price: f64,
        status: &str,
    ) -> Self {
        Self {
            transaction_id: Uuid::new_v4().to_string(),
            plate_number: plate_number.to_string(),
            vehicle_model: vehicle_model.to_string(),
            slot_code: slot_code.to_string(),
            duration: duration.to_string(),
            price,
            status: status.to_string(),
        }
    }
}

/// A stored transaction as listed by `GET getAllTransactions`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionRecord {
    pub id: i64,
    pub transaction_id: String,
    pub plate_number: String,
    pub vehicle_model: String,
    pub slot_id: i64,
    pub time_in: String,
    pub time_out: Option<String>,
    pub rate: String,
    pub amount_paid: Option<String>,
    pub status: String,
}

/// Response envelope for `GET getAllTransactions`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionsResponse {
    pub success: bool,
    pub transactions: Vec<TransactionRecord>,
}

/// The stored transaction echoed by `POST addTransaction`. Differs from
/// [`TransactionRecord`]: the creation response reports the duration instead
/// of the in/out timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatedTransaction {
    pub id: i64,
    pub transaction_id: String,
    pub plate_number: String,
    pub vehicle_model: String,
    pub slot_id: i64,
    pub duration: String,
    pub amount_paid: String,
    pub status: String,
}

/// Response envelope for `POST addTransaction`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddTransactionResponse {
    pub success: bool,
    pub message: String,
    pub transaction: CreatedTransaction,
}
