//! CLI commands for hopmap

pub mod dispatch;
pub mod interactive;
pub mod output;
pub mod run;
pub mod validate;
