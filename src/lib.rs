//! Working Time Engine for the German Working Hours Act
//!
//! This crate checks recorded working time against Arbeitszeitgesetz § 3: averaged
//! over a period, a worker must not exceed eight hours per working day. Sundays and
//! public holidays of the worker's holiday group are not working days.

#![warn(missing_docs)]

pub mod api;
pub mod compliance;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
