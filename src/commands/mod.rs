//! CLI commands for waymark

pub mod dispatch;
pub mod info;
pub mod route;
