//! Core types and algorithms for decoding South African identity numbers.
//!
//! This crate is deliberately free of HTTP and database dependencies. The
//! holiday-data and persistence collaborators are expressed as traits
//! ([`holiday::HolidaySource`], [`store::SearchStore`]) and implemented by the
//! `said-calendarific` and `said-store-sqlite` crates.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod cache;
pub mod error;
pub mod holiday;
pub mod id_number;
pub mod insight;
pub mod store;

pub use error::{Error, Result};
pub use id_number::{DecodedIdentity, Gender, IdNumber};
