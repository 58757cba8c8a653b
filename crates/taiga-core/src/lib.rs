//! # taiga-core
//!
//! Core types and error kinds shared across the Taiga bulk task manager.
//!
//! This crate provides the foundational types every other crate speaks:
//! - Canonical entity records (projects, members, user stories, epics, tasks)
//! - The explicit login [`Session`] handle
//! - Paged result envelopes for search-mode listing
//! - Bulk creation outcomes and the `{success, data | detail}` response envelope
//! - Cross-cutting error kinds with their HTTP-style status mapping

pub mod entities;
pub mod errors;
pub mod identity;
pub mod pagination;
pub mod responses;

pub use errors::{CoreError, ErrorKind};
pub use identity::{Identity, Session};
