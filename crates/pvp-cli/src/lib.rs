//! CLI library components for the PVP explorer.

pub mod explore;
pub mod logging;
pub mod render;
pub mod session;
