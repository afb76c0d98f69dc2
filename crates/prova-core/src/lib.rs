//! # prova-core
//!
//! Core types shared across the prova client crates:
//! - Entity structs mirroring the backend wire format (categories, terms,
//!   disciplines, teacher-discipline assignments, tests)
//! - The single-slot [`alert::AlertChannel`] used to surface asynchronous
//!   outcomes to the user

pub mod alert;
pub mod entities;

pub use alert::{Alert, AlertChannel, AlertKind};
