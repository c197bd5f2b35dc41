//! Shift Pay Engine
//!
//! This crate tracks the hours a worker logs against one or more employers
//! and estimates the wages earned. Each shift is billed at one of four
//! hourly rates (day, night, Saturday, Sunday) chosen from the date and
//! start time of the shift, and totals are built per day, per date range
//! and per fortnight.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
