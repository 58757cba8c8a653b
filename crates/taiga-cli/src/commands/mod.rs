pub mod auth;
pub mod dispatch;
pub mod epic;
pub mod favorite;
pub mod project;
pub mod story;
pub mod task;

mod error_kind;

pub use error_kind::classify;
