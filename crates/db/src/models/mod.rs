//! Entity models and request DTOs.

pub mod good;
pub mod project;
