//! In-memory stand-in for the ParkFlow backend.
//!
//! Serves the parking API — login, seeding, slots, transactions, metrics —
//! with the same routes, status codes, envelopes and quirks as the real
//! service: slot listings are ordered by the slot-number *string* (so `A10`
//! sorts before `A2`), monetary columns are rendered as two-decimal strings,
//! datetimes as HTTP-date strings, and an unknown slot code on transaction
//! creation is a 500. State lives behind an `RwLock`; each `app()` gets a
//! fresh, unseeded store.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use chrono::{DateTime, Datelike, Utc};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::cors::CorsLayer;

/// Users created by `GET /insert-db`: (email, password, role).
const SEED_USERS: [(&str, &str, &str); 2] = [
    ("admin@gmail.com", "admin123", "admin"),
    ("customer@gmail.com", "customer123", "customer"),
];

/// Number of `A`-prefixed slots created by `GET /insert-db`.
const SEED_SLOT_COUNT: u32 = 10;

#[derive(Clone, Debug)]
pub struct UserRecord {
    pub id: i64,
    pub email: String,
    pub password: String,
    pub role: String,
}

#[derive(Clone, Debug)]
pub struct SlotRecord {
    pub id: i64,
    pub slot_number: String,
    pub status: String,
}

#[derive(Clone, Debug)]
pub struct StoredTransaction {
    pub id: i64,
    pub transaction_id: String,
    pub plate_number: String,
    pub vehicle_model: String,
    pub slot_id: i64,
    pub time_in: DateTime<Utc>,
    pub time_out: Option<DateTime<Utc>>,
    pub rate: f64,
    pub duration: String,
    pub amount_paid: Option<f64>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct ParkingState {
    pub users: Vec<UserRecord>,
    pub slots: Vec<SlotRecord>,
    pub transactions: Vec<StoredTransaction>,
}

pub type Db = Arc<RwLock<ParkingState>>;

#[derive(Debug, Deserialize)]
pub struct LoginPayload {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SlotStatusPayload {
    pub slot_number: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TransactionPayload {
    pub id: Option<String>,
    #[serde(rename = "plateNumber")]
    pub plate_number: Option<String>,
    #[serde(rename = "vehicleModel")]
    pub vehicle_model: Option<String>,
    #[serde(rename = "slotCode")]
    pub slot_code: Option<String>,
    pub duration: Option<String>,
    pub price: Option<f64>,
    pub status: Option<String>,
}

/// A fully validated `addTransaction` payload.
struct TransactionFields {
    transaction_id: String,
    plate_number: String,
    vehicle_model: String,
    slot_code: String,
    duration: String,
    price: f64,
    status: String,
}

impl TransactionPayload {
    /// All-fields-required truthiness check: absent fields, empty strings and
    /// a zero price all count as missing.
    fn into_complete(self) -> Option<TransactionFields> {
        let require = |field: Option<String>| field.filter(|value| !value.is_empty());
        Some(TransactionFields {
            transaction_id: require(self.id)?,
            plate_number: require(self.plate_number)?,
            vehicle_model: require(self.vehicle_model)?,
            slot_code: require(self.slot_code)?,
            duration: require(self.duration)?,
            price: self.price.filter(|price| *price != 0.0)?,
            status: require(self.status)?,
        })
    }
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(ParkingState::default()));
    Router::new()
        .route("/", get(home))
        .route("/login", post(login))
        .route("/insert-db", get(seed_db))
        .route("/metrics", get(metrics))
        .route("/parkingSlots", get(parking_slots))
        .route("/updateSlotStatus", put(update_slot_status))
        .route("/getAllTransactions", get(all_transactions))
        .route("/addTransaction", post(add_transaction))
        .layer(CorsLayer::permissive())
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Render a timestamp the way the backend renders datetimes in JSON:
/// HTTP-date format, e.g. `Wed, 21 Oct 2015 07:28:00 GMT`.
fn http_date(at: &DateTime<Utc>) -> String {
    at.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Render a monetary column as the two-decimal string the API serves.
fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}

fn slot_json(slot: &SlotRecord) -> Value {
    json!({
        "id": slot.id,
        "slot_number": slot.slot_number,
        "status": slot.status,
    })
}

async fn home() -> &'static str {
    "Welcome to the Parking Management System"
}

async fn login(
    State(db): State<Db>,
    Json(payload): Json<LoginPayload>,
) -> (StatusCode, Json<Value>) {
    tracing::debug!(email = ?payload.email, "login attempt");
    let db = db.read().await;
    let user = match (payload.email.as_deref(), payload.password.as_deref()) {
        (Some(email), Some(password)) => db
            .users
            .iter()
            .find(|user| user.email == email && user.password == password),
        _ => None,
    };

    match user {
        Some(user) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "message": "Login successful",
                "user": {"id": user.id, "email": user.email, "role": user.role},
            })),
        ),
        None => (
            StatusCode::UNAUTHORIZED,
            Json(json!({"success": false, "message": "Invalid credentials"})),
        ),
    }
}

async fn seed_db(State(db): State<Db>) -> (StatusCode, Json<Value>) {
    let mut db = db.write().await;
    for (email, password, role) in SEED_USERS {
        if db.users.iter().any(|user| user.email == email) {
            continue;
        }
        let id = db.users.len() as i64 + 1;
        db.users.push(UserRecord {
            id,
            email: email.to_string(),
            password: password.to_string(),
            role: role.to_string(),
        });
    }
    for i in 1..=SEED_SLOT_COUNT {
        let slot_number = format!("A{i}");
        if db.slots.iter().any(|slot| slot.slot_number == slot_number) {
            continue;
        }
        let id = db.slots.len() as i64 + 1;
        db.slots.push(SlotRecord {
            id,
            slot_number,
            status: "available".to_string(),
        });
    }

    let mut users: Vec<String> = db.users.iter().map(|user| user.email.clone()).collect();
    users.sort();
    let mut parking_slots: Vec<String> =
        db.slots.iter().map(|slot| slot.slot_number.clone()).collect();
    parking_slots.sort();

    (
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Users and parking slots registered successfully",
            "users": users,
            "parking_slots": parking_slots,
        })),
    )
}

async fn metrics(State(db): State<Db>) -> Json<Value> {
    let db = db.read().await;
    Json(compute_metrics(&db, Utc::now()))
}

/// Dashboard figures as of `now`: earnings from `Paid` transactions this
/// month and today, this month's transaction count, and slot occupancy.
fn compute_metrics(state: &ParkingState, now: DateTime<Utc>) -> Value {
    let today = now.date_naive();
    let this_month =
        |at: &DateTime<Utc>| at.year() == now.year() && at.month() == now.month();

    let monthly_earnings: f64 = state
        .transactions
        .iter()
        .filter(|tx| this_month(&tx.created_at) && tx.status == "Paid")
        .filter_map(|tx| tx.amount_paid)
        .sum();
    let daily_earnings: f64 = state
        .transactions
        .iter()
        .filter(|tx| tx.created_at.date_naive() == today && tx.status == "Paid")
        .filter_map(|tx| tx.amount_paid)
        .sum();
    let monthly_transactions = state
        .transactions
        .iter()
        .filter(|tx| this_month(&tx.created_at))
        .count();
    let available_slots = state
        .slots
        .iter()
        .filter(|slot| slot.status == "available")
        .count();
    let taken_slots = state.slots.iter().filter(|slot| slot.status == "taken").count();

    json!({
        "success": true,
        "metrics": {
            "monthly_earnings": monthly_earnings,
            "daily_earnings": daily_earnings,
            "monthly_transactions": monthly_transactions,
            "available_slots": available_slots,
            "taken_slots": taken_slots,
            "total_slots": available_slots + taken_slots,
        },
    })
}

async fn parking_slots(State(db): State<Db>) -> Json<Value> {
    let db = db.read().await;
    let mut slots: Vec<&SlotRecord> = db.slots.iter().collect();
    slots.sort_by(|a, b| a.slot_number.cmp(&b.slot_number));
    let slots_data: Vec<Value> = slots.iter().map(|slot| slot_json(slot)).collect();

    Json(json!({"success": true, "parking_slots": slots_data}))
}

async fn update_slot_status(
    State(db): State<Db>,
    Json(payload): Json<SlotStatusPayload>,
) -> (StatusCode, Json<Value>) {
    tracing::debug!(?payload, "slot status update");
    let (Some(slot_number), Some(status)) = (payload.slot_number, payload.status) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "success": false,
                "message": "slot_number and status are required",
            })),
        );
    };

    let mut db = db.write().await;
    match db.slots.iter_mut().find(|slot| slot.slot_number == slot_number) {
        Some(slot) => {
            slot.status = status;
            (
                StatusCode::OK,
                Json(json!({
                    "success": true,
                    "message": format!("Slot {} status updated", slot.slot_number),
                    "slot": slot_json(slot),
                })),
            )
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"success": false, "message": "Slot not found"})),
        ),
    }
}

async fn all_transactions(State(db): State<Db>) -> Json<Value> {
    let db = db.read().await;
    let mut transactions: Vec<&StoredTransaction> = db.transactions.iter().collect();
    transactions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    let transactions_data: Vec<Value> = transactions
        .iter()
        .map(|tx| {
            json!({
                "id": tx.id,
                "transaction_id": tx.transaction_id,
                "plate_number": tx.plate_number,
                "vehicle_model": tx.vehicle_model,
                "slot_id": tx.slot_id,
                "time_in": http_date(&tx.time_in),
                "time_out": tx.time_out.as_ref().map(http_date),
                "rate": format_amount(tx.rate),
                "amount_paid": tx.amount_paid.map(format_amount),
                "status": tx.status,
            })
        })
        .collect();

    Json(json!({"success": true, "transactions": transactions_data}))
}

async fn add_transaction(
    State(db): State<Db>,
    Json(payload): Json<TransactionPayload>,
) -> (StatusCode, Json<Value>) {
    tracing::debug!(?payload, "add transaction");
    let Some(fields) = payload.into_complete() else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"success": false, "message": "All fields are required"})),
        );
    };

    let mut db = db.write().await;
    let Some(slot_id) = db
        .slots
        .iter()
        .find(|slot| slot.slot_number == fields.slot_code)
        .map(|slot| slot.id)
    else {
        // The backend dereferences the missing slot and crashes; answer with
        // the 500 the caller would see.
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"success": false, "message": "Internal server error"})),
        );
    };

    let now = Utc::now();
    let stored = StoredTransaction {
        id: db.transactions.len() as i64 + 1,
        transaction_id: fields.transaction_id,
        plate_number: fields.plate_number,
        vehicle_model: fields.vehicle_model,
        slot_id,
        time_in: now,
        time_out: None,
        rate: fields.price,
        duration: fields.duration,
        amount_paid: Some(fields.price),
        status: fields.status,
        created_at: now,
    };
    let response = json!({
        "success": true,
        "message": "Transaction added successfully",
        "transaction": {
            "id": stored.id,
            "transaction_id": stored.transaction_id.clone(),
            "plate_number": stored.plate_number.clone(),
            "vehicle_model": stored.vehicle_model.clone(),
            "slot_id": stored.slot_id,
            "duration": stored.duration.clone(),
            "amount_paid": format_amount(fields.price),
            "status": stored.status.clone(),
        },
    });
    db.transactions.push(stored);

    (StatusCode::CREATED, Json(response))
}
