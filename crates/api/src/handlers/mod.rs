//! HTTP handlers. Thin wrappers: parse, validate, call the orchestrator
//! or repository, map the result.

pub mod goods;
pub mod projects;
