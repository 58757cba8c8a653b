//! # taiga-bulk
//!
//! Reconciles a list of desired tasks against what already exists under a
//! user story, then creates the missing ones one at a time.
//!
//! The run never aborts on a per-item failure: each draft yields either the
//! created task or `{error, data}`, and the [`BulkCreateReport`] lists them
//! in input order. Upstream access goes through [`TaskBackend`], implemented
//! for [`taiga_client::SessionClient`].
//!
//! [`BulkCreateReport`]: taiga_core::responses::BulkCreateReport

mod backend;
mod error;
mod reconcile;

pub use backend::TaskBackend;
pub use error::BulkError;
pub use reconcile::{BulkTaskRequest, reconcile};
