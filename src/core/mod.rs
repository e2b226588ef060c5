//! Core business logic layer
//!
//! Pure domain logic for every sub-command plus the storage trait the
//! persisted collections go through.

pub mod arithmetic;
pub mod conversion;
pub mod data;
pub mod traits;
pub mod weather;
