//! Rental checkout calculations.

#[cfg(test)]
#[path = "rental_test.rs"]
mod rental_test;

use chrono::NaiveDate;

use crate::net::types::RentalRequest;

pub const PAYMENT_METHOD: &str = "CARD";
pub const PAY_FAILED_MESSAGE: &str = "Payment failed. Please try again.";
pub const PAY_DONE_MESSAGE: &str = "Your rental request was submitted.";

/// Where the payment page is in its one-shot flow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PayPhase {
    #[default]
    Ready,
    Paying,
    /// Terminal: the page stays put and shows the receipt.
    Paid,
}

impl PayPhase {
    /// Whether the Pay button may fire.
    pub fn can_pay(self, agreed: bool, item_loaded: bool) -> bool {
        self == Self::Ready && agreed && item_loaded
    }

    /// Phase after the server answered. Failures reopen the form.
    #[must_use]
    pub fn settle(self, succeeded: bool) -> Self {
        if succeeded { Self::Paid } else { Self::Ready }
    }
}

/// Inclusive day count between two `YYYY-MM-DD` dates, never below one.
/// Unreadable or reversed dates count as a single day.
pub fn rental_days(start: &str, end: &str) -> i64 {
    let parse = |s: &str| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok();
    match (parse(start), parse(end)) {
        (Some(start), Some(end)) => ((end - start).num_days() + 1).max(1),
        _ => 1,
    }
}

pub fn rental_amount(daily_price: i64, quantity: u32, days: i64) -> i64 {
    daily_price.saturating_mul(i64::from(quantity)).saturating_mul(days)
}

/// Server rejections caused by accumulated penalties keep the user on the page.
pub fn is_penalty_block(message: &str) -> bool {
    message.contains("벌점") || message.to_lowercase().contains("penalty")
}

/// Checkout parameters carried in the payment page's query string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Checkout {
    pub item_id: i64,
    pub start_date: String,
    pub end_date: String,
    pub quantity: u32,
}

impl Checkout {
    /// Read `item`, `start`, `end` and `qty` from query values.
    /// Returns `None` when the item id is missing, which the page reports
    /// as an invalid access.
    pub fn from_query(get: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let item_id = get("item")?.trim().parse().ok()?;
        let quantity = get("qty").and_then(|q| q.trim().parse().ok()).filter(|q| *q > 0).unwrap_or(1);
        Some(Self {
            item_id,
            start_date: get("start").unwrap_or_default(),
            end_date: get("end").unwrap_or_default(),
            quantity,
        })
    }

    pub fn days(&self) -> i64 {
        rental_days(&self.start_date, &self.end_date)
    }

    pub fn amount(&self, daily_price: i64) -> i64 {
        rental_amount(daily_price, self.quantity, self.days())
    }

    pub fn request(&self, daily_price: i64) -> RentalRequest {
        RentalRequest {
            item_id: self.item_id,
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            quantity: self.quantity,
            amount: self.amount(daily_price),
            method: PAYMENT_METHOD.to_owned(),
        }
    }
}
