//! diagnosis-core: Shared types for the Cancer Diagnosis API
//!
//! This crate provides the `Patient` record and the JSON bodies
//! returned by the HTTP server.

pub mod patient;
pub mod response;

pub use patient::Patient;
pub use response::{ErrorDetail, Message};
