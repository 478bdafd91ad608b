//! Query DTOs for listing endpoints

use blog_core::value_objects::{DEFAULT_PAGE_NO, DEFAULT_PAGE_SIZE};
use serde::Deserialize;
use utoipa::IntoParams;

/// Query parameters of the post listing
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PostPageQuery {
    /// Zero-based page number
    #[serde(default = "default_page_no")]
    #[param(default = 0, minimum = 0)]
    pub page_no: u32,

    /// Page size, clamped to 1..=100
    #[serde(default = "default_page_size")]
    #[param(default = 10, minimum = 1, maximum = 100)]
    pub page_size: u32,

    /// One of id, title, description, content, categoryId
    #[serde(default = "default_sort_by")]
    #[param(default = "id")]
    pub sort_by: String,

    /// "asc" (any case) sorts ascending; anything else sorts descending
    #[serde(default = "default_sort_dir")]
    #[param(default = "asc")]
    pub sort_dir: String,
}

fn default_page_no() -> u32 {
    DEFAULT_PAGE_NO
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_sort_by() -> String {
    "id".to_string()
}

fn default_sort_dir() -> String {
    "asc".to_string()
}

impl Default for PostPageQuery {
    fn default() -> Self {
        Self {
            page_no: default_page_no(),
            page_size: default_page_size(),
            sort_by: default_sort_by(),
            sort_dir: default_sort_dir(),
        }
    }
}
