//! Domain error types

mod domain_error;

pub use domain_error::{
    DomainError, Resource, COMMENT_NOT_IN_POST_ON_READ, COMMENT_NOT_IN_POST_ON_WRITE,
};
