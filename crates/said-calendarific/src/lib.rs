//! Calendarific client for the holiday-data collaborator.
//!
//! [`CalendarificClient`] implements [`said_core::holiday::HolidaySource`].
//! It performs exactly one request per fetch; caching belongs to
//! [`said_core::cache::CachedSource`] and retry policy to the caller.

mod client;
mod wire;

pub mod error;

pub use client::{CalendarificClient, CalendarificConfig, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use wire::parse_holidays;
