//! Shared Module
//!
//! Wire-shape types used by the HTTP layer and by clients of the API.
//! Nothing in here depends on the server runtime; the DTOs are plain
//! serde records with their field validation rules attached.
//!
//! # Overview
//!
//! - **`catalog`** - Author and book DTOs (read, create and update variants)
//! - **`users`** - Login request and token response bodies
//! - **`error`** - Validation and serialization errors

/// Author and book DTOs
pub mod catalog;

/// Login DTOs
pub mod users;

/// Shared error types
pub mod error;

pub use catalog::{
    AuthorCreateDto, AuthorDto, AuthorUpdateDto, BookCreateDto, BookDto, BookUpdateDto,
};
pub use error::SharedError;
pub use users::{LoginRequest, RejectedLogin, TokenResponse};
