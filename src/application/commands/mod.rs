//! 应用层 - 命令（写操作）

mod counter_commands;

pub mod handlers;

pub use counter_commands::*;
