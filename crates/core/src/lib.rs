//! # Salon Core
//!
//! Domain types and rules for the salon scheduling backend. Nothing in this
//! crate performs I/O; storage is reached through the [`scheduling::SchedulingStore`]
//! trait, which the `salon-db` crate implements on PostgreSQL.
//!
//! - [`scheduling`]: booking engine, interval overlap and calendar ranges
//! - [`lifecycle`]: allowed appointment status transitions
//! - [`access`]: role checks for authenticated principals
//! - [`inventory`]: product stock usage rules
//! - [`finance`]: revenue and commission summaries

pub mod access;
pub mod errors;
pub mod finance;
pub mod inventory;
pub mod lifecycle;
pub mod models;
pub mod scheduling;
