// Core structs: Vehicle, BookingForm, Severity and the error enums
use crate::dom::{FormSource, ids};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// One vehicle card, extracted once from the page markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub name: String,
    pub price: u64,
    /// Outer HTML of the card as it was rendered at load time.
    pub markup: String,
}

impl Vehicle {
    pub fn new(name: impl Into<String>, price: u64) -> Self {
        let name = name.into();
        let markup = format!(
            "<div class=\"card\"><h5 class=\"card-title\">{}</h5><p class=\"card-text\">₹{}/day</p></div>",
            name, price
        );
        Self { name, price, markup }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Info,
    Warning,
}

impl Severity {
    /// Bootstrap alert modifier; errors use the `danger` palette.
    pub fn css_kind(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "danger",
            Severity::Info => "info",
            Severity::Warning => "warning",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Severity::Success => "Success",
            Severity::Error => "Error",
            Severity::Info => "Info",
            Severity::Warning => "Warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Info => "info",
            Severity::Warning => "warning",
        })
    }
}

/// Raw booking form values, read fresh from the page at validation time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub car: String,
    pub days: String,
    pub date: String,
    pub pickup_location: String,
    pub dropoff_location: String,
}

impl BookingForm {
    /// Missing controls read as empty strings.
    pub fn read_from<S: FormSource + ?Sized>(source: &S) -> Self {
        let trimmed = |id: &str| source.value(id).unwrap_or("").trim().to_string();
        let raw = |id: &str| source.value(id).unwrap_or("").to_string();

        Self {
            name: trimmed(ids::BILL_NAME),
            email: trimmed(ids::BILL_EMAIL),
            phone: trimmed(ids::BILL_PHONE),
            address: trimmed(ids::BILL_ADDRESS),
            city: trimmed(ids::BILL_CITY),
            car: raw(ids::CAR_SELECT),
            days: raw(ids::RENTAL_DAYS),
            date: raw(ids::PICKUP_DATE),
            pickup_location: trimmed(ids::FROM_LOCATION),
            dropoff_location: trimmed(ids::TO_LOCATION),
        }
    }
}

/// First failing booking rule. `Display` is the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name must be at least 3 characters")]
    NameTooShort,
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("Phone number must be 10 digits")]
    InvalidPhone,
    #[error("Address must be at least 5 characters")]
    AddressTooShort,
    #[error("Please select a city")]
    MissingCity,
    #[error("Please select a car")]
    MissingCar,
    #[error("Rental days must be between 1 and 30")]
    DaysOutOfRange,
    #[error("Please select a pickup date")]
    MissingDate,
    #[error("Please enter pickup location")]
    MissingPickupLocation,
    #[error("Please enter drop-off location")]
    MissingDropoffLocation,
}

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("html parse error: {0}")]
    HtmlParseError(String),
    #[error("missing element: {0}")]
    MissingField(String),
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    DatabaseError(#[from] rusqlite::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("storage quota exceeded ({needed} of {quota} bytes)")]
    QuotaExceeded { needed: usize, quota: usize },
}
