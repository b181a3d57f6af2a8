//! DTO module
//!
//! Data transfer objects serialized on the API boundary.

pub mod feedback_dto;
pub mod predict_dto;

pub use feedback_dto::*;
pub use predict_dto::*;
