use serde::{Deserialize, Serialize};
use validator::Validate;

/// Field a complaint search is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    #[default]
    ReceivedDate,
    Status,
    #[serde(rename = "type")]
    Type,
    Reference,
}

impl SortField {
    /// Unknown names fall back to the filing date.
    pub fn parse(value: &str) -> Self {
        match value {
            "status" => SortField::Status,
            "type" => SortField::Type,
            "reference" => SortField::Reference,
            _ => SortField::ReceivedDate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    /// `"desc"` in any case is descending, everything else ascending.
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("desc") {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }
}

/// Paged complaint search.
///
/// `search_term` matches reference or subject, case-insensitively. `page` is 0-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintSearch {
    #[validate(length(max = 100))]
    pub search_term: Option<String>,

    #[validate(range(min = 0, max = 3))]
    pub status: Option<i32>,

    pub page: usize,

    #[validate(range(min = 1, max = 100))]
    pub size: usize,

    #[serde(default)]
    pub sort_by: SortField,

    #[serde(default)]
    pub sort_direction: SortDirection,
}

impl Default for ComplaintSearch {
    fn default() -> Self {
        Self {
            search_term: None,
            status: None,
            page: 0,
            size: 10,
            sort_by: SortField::ReceivedDate,
            sort_direction: SortDirection::Desc,
        }
    }
}

impl ComplaintSearch {
    /// Search term with surrounding whitespace removed, `None` when blank
    pub fn term(&self) -> Option<&str> {
        self.search_term
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}
