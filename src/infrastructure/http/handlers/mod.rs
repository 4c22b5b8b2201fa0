//! HTTP Handlers

mod counter;
mod ping;

pub use counter::*;
pub use ping::*;
