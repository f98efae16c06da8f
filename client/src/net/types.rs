//! Shared DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON so serde round-trips stay
//! lossless. The same `User` shape is what the session store persists.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Account role assigned by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Customer,
    Employee,
    Rider,
}

impl Role {
    /// Roles an administrator may assign from the add-user form, in display order.
    pub const ASSIGNABLE: [Role; 3] = [Role::Employee, Role::Rider, Role::Customer];

    /// Wire name (e.g. `"EMPLOYEE"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Customer => "CUSTOMER",
            Self::Employee => "EMPLOYEE",
            Self::Rider => "RIDER",
        }
    }

    /// Human-readable option label used in the add-user role select.
    pub fn option_label(self) -> &'static str {
        match self {
            Self::Admin => "Administrator",
            Self::Customer => "Customer",
            Self::Employee => "Employee (Worker)",
            Self::Rider => "Rider (Delivery)",
        }
    }

    /// Parse a wire name. Unknown values yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "ADMIN" => Some(Self::Admin),
            "CUSTOMER" => Some(Self::Customer),
            "EMPLOYEE" => Some(Self::Employee),
            "RIDER" => Some(Self::Rider),
            _ => None,
        }
    }

    /// Badge modifier class for this role.
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Admin => "badge badge--admin",
            Self::Customer => "badge badge--customer",
            Self::Employee => "badge badge--employee",
            Self::Rider => "badge badge--rider",
        }
    }
}

/// A user account as returned by the backend and persisted in the session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend-assigned identifier.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    /// Unique login name.
    pub username: String,
    /// Unique contact email.
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    pub role: Role,
}

impl User {
    /// Name shown in greetings: full name when present and non-empty, else username.
    pub fn display_name(&self) -> &str {
        match self.full_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.username,
        }
    }
}

/// Payload for `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub email: String,
    pub full_name: String,
    pub phone: String,
    pub address: String,
    pub role: Role,
}

/// Payload for `PUT /profile`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// Payload for `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response: bearer token plus the authenticated user.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// Fulfilment status of a laundry order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    #[serde(rename = "In Transit")]
    InTransit,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// All statuses in workflow order, as offered by the status select.
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::InTransit,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Processing => "Processing",
            Self::InTransit => "In Transit",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Pending => "badge badge--pending",
            Self::Processing => "badge badge--processing",
            Self::InTransit => "badge badge--in-transit",
            Self::Delivered => "badge badge--delivered",
            Self::Cancelled => "badge badge--cancelled",
        }
    }
}

/// A laundry order row shown on the dashboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: u32,
    pub customer: String,
    pub status: OrderStatus,
    /// Free-text item summary (e.g. `"3 towels"`).
    pub items: String,
    /// Total in whole currency units.
    pub amount: u32,
    /// ISO date (`YYYY-MM-DD`).
    pub date: String,
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        serde_json::Value::String(raw) => raw
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("expected numeric id, got {raw:?}"))),
        _ => Err(D::Error::custom("expected number")),
    }
}
