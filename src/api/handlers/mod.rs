//! Handlers module

pub mod feedback_handler;
pub mod predict_handler;

pub use feedback_handler::*;
pub use predict_handler::*;
