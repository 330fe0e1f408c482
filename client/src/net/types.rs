//! Wire DTOs for the rental REST API.
//!
//! DESIGN
//! ======
//! The backend is loose about nulls and numeric types, so deserializers here
//! are lenient: missing lists become empty, null numbers become zero, and
//! unknown enum values fall back to a catch-all instead of failing the load.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Account role as reported by `/users/me`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    User,
    Partner,
    Admin,
    #[serde(other)]
    Unknown,
}

/// Current user's profile from `GET /users/me`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
    /// Legacy key used before `contact_phone` existed.
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "deserialize_role")]
    pub role: Role,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub business_no: Option<String>,
}

impl Profile {
    /// Contact number, preferring `contact_phone` over the legacy key.
    pub fn phone_number(&self) -> Option<String> {
        self.contact_phone
            .clone()
            .filter(|p| !p.is_empty())
            .or_else(|| self.phone.clone().filter(|p| !p.is_empty()))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemStatus {
    #[default]
    Available,
    Unavailable,
}

impl ItemStatus {
    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Available => "AVAILABLE",
            Self::Unavailable => "UNAVAILABLE",
        }
    }

    pub fn from_wire(raw: &str) -> Self {
        if raw == "UNAVAILABLE" { Self::Unavailable } else { Self::Available }
    }
}

/// Partner item as returned by `GET /partner/items/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDetail {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub sub_category_id: Option<i64>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub sub_category_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_i64_or_zero")]
    pub daily_price: i64,
    #[serde(default, deserialize_with = "deserialize_i64_or_zero")]
    pub stock_quantity: i64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub detail_description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_status")]
    pub status: ItemStatus,
    #[serde(default)]
    pub partner_id: Option<i64>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    /// Server-side image references, in display order.
    #[serde(default, deserialize_with = "deserialize_vec_or_empty")]
    pub detail_images: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// Body of `GET /penalties/me`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PenaltyResponse {
    #[serde(default)]
    pub total_points: Option<serde_json::Value>,
    #[serde(default)]
    pub total_score: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "deserialize_vec_or_empty")]
    pub histories: Vec<PenaltyHistory>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PenaltyHistory {
    #[serde(default)]
    pub reason: Option<String>,
    /// Date string or epoch milliseconds, depending on the endpoint version.
    #[serde(default)]
    pub date: Option<serde_json::Value>,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordResetVerify<'a> {
    pub email: &'a str,
    pub code: &'a str,
    pub new_password: &'a str,
}

/// Body of `POST /rentals/request`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalRequest {
    pub item_id: i64,
    pub start_date: String,
    pub end_date: String,
    pub quantity: u32,
    pub amount: i64,
    pub method: String,
}

fn deserialize_role<'de, D>(deserializer: D) -> Result<Role, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Role>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_status<'de, D>(deserializer: D) -> Result<ItemStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().map(ItemStatus::from_wire).unwrap_or_default())
}

fn deserialize_vec_or_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_i64_or_zero<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(0),
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
        _ => Err(D::Error::custom("expected number")),
    }
}
