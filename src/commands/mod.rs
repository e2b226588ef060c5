//! Sub-command handlers
//!
//! Each module exposes a `handle_*_command` entry point that prints, and a
//! `run_*` function that returns the outcome without printing.

pub mod arithmetic;
pub mod contact;
pub mod convert;
pub mod todo;
pub mod weather;
