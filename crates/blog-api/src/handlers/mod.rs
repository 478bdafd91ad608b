//! Route handlers
//!
//! All HTTP request handlers organized by resource.

pub mod categories;
pub mod comments;
pub mod health;
pub mod posts;
