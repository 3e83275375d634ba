//! In-memory user records for `UserBox`.
//!
//! This crate owns the [`store::UserStore`] holding every user record for the
//! lifetime of the process, and, with the `api` feature, the actix-web
//! endpoints that list, create, delete and update those records.
//!
//! # Features
//!
//! * `api` - actix-web endpoints and the JSON wire models
//!
//! # Example
//!
//! ```rust
//! use userbox_users::{models::{NewUser, UserUpdate}, store::UserStore};
//!
//! let store = UserStore::new();
//! let (ann, _) = store.create(NewUser { name: "Ann".to_string(), age: 30 });
//!
//! let ann = store
//!     .update(ann.id, UserUpdate { name: None, age: Some(31) })
//!     .unwrap();
//! assert_eq!(ann.age, 31);
//!
//! store.delete(ann.id).unwrap();
//! assert!(store.is_empty());
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::num::ParseIntError;

use thiserror::Error;

#[cfg(feature = "api")]
pub mod api;

pub mod models;
pub mod store;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("Missing id query parameter")]
    MissingId,
    #[error("Invalid id query parameter '{value}'")]
    InvalidId {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] serde_json::Error),
    #[error("User with id {id} not found")]
    NotFound { id: i64 },
}
