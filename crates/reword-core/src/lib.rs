//! # reword-core
//!
//! Foundation types and utilities shared by all reword crates.
//!
//! - **Request/result model**: [`types::RewriteRequest`], [`types::RewriteResult`],
//!   [`types::RewriteVariant`], [`types::SafetyCheck`]
//! - **Batch tokens**: [`types::BatchTemplate`], [`types::BatchOutcome`]
//! - **Errors**: [`errors::RewordError`] via `thiserror`
//! - **Text utilities**: char-safe, word-boundary truncation and sentence
//!   splitting in [`text`]
//! - **Logging**: [`logging::init_tracing`] subscriber setup
//!
//! ## Crate position
//!
//! Foundation crate. Depended on by all other reword crates.

#![deny(unsafe_code)]

pub mod errors;
pub mod logging;
pub mod text;
pub mod types;

pub use errors::{Result, RewordError};
