//! Pricing engine for pool hall table bookings
//!
//! This crate prices hourly table bookings against a time-banded rate table
//! and answers the inverse question of how long a fixed budget lasts.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
