//! Command Handlers

mod counter_handlers;

pub use counter_handlers::*;
