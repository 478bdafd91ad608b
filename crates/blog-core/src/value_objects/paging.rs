//! Offset pagination and sorting for listing queries

use std::fmt;
use std::str::FromStr;

/// Default zero-based page number
pub const DEFAULT_PAGE_NO: u32 = 0;
/// Default page size
pub const DEFAULT_PAGE_SIZE: u32 = 10;
/// Maximum page size
pub const MAX_PAGE_SIZE: u32 = 100;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Ascending only when the parameter is "asc" (any case); everything else sorts descending
    pub fn from_param(value: &str) -> Self {
        if value.eq_ignore_ascii_case("asc") {
            Self::Asc
        } else {
            Self::Desc
        }
    }

    #[inline]
    pub fn is_ascending(&self) -> bool {
        matches!(self, Self::Asc)
    }
}

/// Columns a post listing can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PostSortField {
    #[default]
    Id,
    Title,
    Description,
    Content,
    CategoryId,
}

/// Error when a sort field is not one of the sortable post fields
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Cannot sort posts by '{0}'")]
pub struct UnknownSortField(pub String);

impl FromStr for PostSortField {
    type Err = UnknownSortField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(Self::Id),
            "title" => Ok(Self::Title),
            "description" => Ok(Self::Description),
            "content" => Ok(Self::Content),
            "categoryId" | "category_id" => Ok(Self::CategoryId),
            other => Err(UnknownSortField(other.to_string())),
        }
    }
}

impl fmt::Display for PostSortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Id => "id",
            Self::Title => "title",
            Self::Description => "description",
            Self::Content => "content",
            Self::CategoryId => "categoryId",
        };
        f.write_str(name)
    }
}

/// Sort specification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sort {
    pub field: PostSortField,
    pub direction: SortDirection,
}

impl Sort {
    pub fn new(field: PostSortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }
}

/// A request for one page of a sorted collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-based page number
    pub page_no: u32,
    /// Page size, always within 1..=MAX_PAGE_SIZE
    pub page_size: u32,
    pub sort: Sort,
}

impl PageRequest {
    /// Create a page request, clamping the size into the accepted range
    pub fn new(page_no: u32, page_size: u32, sort: Sort) -> Self {
        Self {
            page_no,
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
            sort,
        }
    }

    /// Number of rows to skip
    #[inline]
    pub fn offset(&self) -> i64 {
        i64::from(self.page_no) * i64::from(self.page_size)
    }

    /// Number of rows to fetch
    #[inline]
    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_NO, DEFAULT_PAGE_SIZE, Sort::default())
    }
}

/// One page of results plus the size of the whole collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page_no: u32,
    pub page_size: u32,
    pub total_elements: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            page_no: request.page_no,
            page_size: request.page_size,
            total_elements,
        }
    }

    /// Total number of pages; zero for an empty collection
    pub fn total_pages(&self) -> u32 {
        if self.page_size == 0 {
            return 1;
        }
        let pages = self.total_elements.div_ceil(u64::from(self.page_size));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Whether there is no page after this one
    pub fn is_last(&self) -> bool {
        u64::from(self.page_no) + 1 >= u64::from(self.total_pages())
    }

    /// Convert the page content, keeping the metadata
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page_no: self.page_no,
            page_size: self.page_size,
            total_elements: self.total_elements,
        }
    }
}
