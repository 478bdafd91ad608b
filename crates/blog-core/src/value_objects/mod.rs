//! Value objects - immutable types that represent domain concepts

mod ids;
mod paging;

pub use ids::{CategoryId, CommentId, IdParseError, PostId};
pub use paging::{
    Page, PageRequest, PostSortField, Sort, SortDirection, UnknownSortField, DEFAULT_PAGE_NO,
    DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
