//! Repository traits (ports)

mod repositories;

pub use repositories::{CategoryRepository, CommentRepository, PostRepository, RepoResult};
