//! Pocketkit - a multi-purpose personal productivity CLI
//!
//! Five independent sub-commands: arithmetic, a persistent to-do list, a
//! stubbed weather report, a persistent contact book and a unit converter.
//! The to-do list and contact book are stored as JSON arrays.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod storage;
pub mod utils;

// Re-export core types and traits for easier use
pub use crate::core::{
    arithmetic::{Operation, evaluate},
    conversion::{ConversionError, Quantity, convert},
    data::{Contact, ContactBook, TodoList},
    traits::RecordStore,
    weather::WeatherReport,
};
pub use storage::JsonStore;
pub use utils::error::{AppError, AppResult, FlowResult};
