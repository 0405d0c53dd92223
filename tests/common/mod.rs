//! Common test utilities and helpers
//!
//! - Test application with in-memory collaborators
//! - Token helpers
//! - Custom assertion macros
//! - In-memory log capture

#![allow(dead_code)]

pub mod assertions;
pub mod auth_helpers;
pub mod fixtures;
pub mod log_capture;

pub use auth_helpers::*;
pub use fixtures::*;
pub use log_capture::*;
