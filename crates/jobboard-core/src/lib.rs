//! Core types and trait definitions for the job board record layer.
//!
//! This crate is deliberately free of HTTP dependencies. It defines the
//! strongly-typed domain entities, the wire shapes spoken by the remote
//! record backend, and the [`client::RecordClient`] trait every repository
//! is built on.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

#[macro_use]
mod label;

pub mod application;
pub mod candidate;
pub mod client;
pub mod company;
pub mod contact;
pub mod error;
pub mod id;
pub mod job;
pub mod message;
pub mod record;
pub mod saved;
pub mod structured;
pub mod task;

pub use error::{Error, Result};
pub use id::RecordId;
pub use record::Record;
pub use structured::Structured;
