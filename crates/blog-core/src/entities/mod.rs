//! Domain entities - core business objects

mod category;
mod comment;
mod post;

pub use category::Category;
pub use comment::Comment;
pub use post::Post;
