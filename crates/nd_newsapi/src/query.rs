use chrono::Utc;

pub const DEFAULT_SOURCES: &str = "abc-news";
pub const DEFAULT_PAGE_SIZE: u32 = 5;

const SORT_BY: &str = "publishedAt";
const LANGUAGE: &str = "en";

/// Parameters for one search against the news API.
///
/// Built once per invocation and immutable afterwards. Dates default
/// independently to today's UTC date; caller-supplied dates are passed
/// through to the upstream API unvalidated.
#[derive(Debug, Clone)]
pub struct NewsQuery {
    pub keyword: Option<String>,
    pub from_date: String,
    pub to_date: String,
    pub sources: String,
    pub page_size: u32,
}

impl NewsQuery {
    pub fn new(
        keyword: Option<String>,
        from_date: Option<String>,
        to_date: Option<String>,
        sources: String,
        page_size: u32,
    ) -> Self {
        let today = Utc::now().format("%Y-%m-%d").to_string();
        Self {
            keyword,
            from_date: from_date.unwrap_or_else(|| today.clone()),
            to_date: to_date.unwrap_or(today),
            sources,
            page_size,
        }
    }

    /// The full outbound parameter set, ready for the query string.
    /// `q` is only sent when a keyword was given; sort order and
    /// language are fixed.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(7);
        if let Some(keyword) = &self.keyword {
            params.push(("q", keyword.clone()));
        }
        params.push(("from", self.from_date.clone()));
        params.push(("to", self.to_date.clone()));
        params.push(("sources", self.sources.clone()));
        params.push(("pageSize", self.page_size.to_string()));
        params.push(("sortBy", SORT_BY.to_string()));
        params.push(("language", LANGUAGE.to_string()));
        params
    }
}
