//! `pharmasync-core` — shared domain primitives.
//!
//! This crate contains **pure domain** building blocks (no IO, no HTTP).

pub mod error;
pub mod name;

pub use error::{DomainError, DomainResult};
pub use name::{MedicineName, PharmacyName};
