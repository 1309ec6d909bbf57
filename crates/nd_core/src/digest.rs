use serde_json::Value;

use crate::error::FetchError;
use crate::types::{Article, RawResponse};

/// Rendered when the fetch failed or the payload has no `articles` array.
pub const FETCH_FAILED: &str = "Unable to fetch news articles.";

/// Rendered when the payload is valid but the result set is empty.
pub const NO_RESULTS: &str = "No news articles found for the given query and dates.";

const SEPARATOR: &str = "\n---\n";

/// Render a fetch outcome into the digest handed back to the caller.
///
/// The error category is deliberately collapsed here; callers that care
/// about the cause log the `FetchError` before rendering.
pub fn render(outcome: Result<RawResponse, FetchError>) -> String {
    let response = match outcome {
        Ok(response) => response,
        Err(_) => return FETCH_FAILED.to_string(),
    };

    let articles = match response.get("articles").and_then(Value::as_array) {
        Some(articles) => articles,
        None => return FETCH_FAILED.to_string(),
    };

    if articles.is_empty() {
        return NO_RESULTS.to_string();
    }

    articles
        .iter()
        .map(|value| format_article(&Article::from_value(value)))
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Format a single article into a readable block.
pub fn format_article(article: &Article) -> String {
    format!(
        "\nTitle: {}\nDescription: {}\nURL: {}\nPublished At: {}\n",
        article.title.as_deref().unwrap_or("No Title"),
        article.description.as_deref().unwrap_or("No Description"),
        article.url.as_deref().unwrap_or("No URL"),
        article.published_at.as_deref().unwrap_or("Unknown"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode_error() -> FetchError {
        serde_json::from_str::<Value>("not json").unwrap_err().into()
    }

    #[test]
    fn test_render_fetch_failure() {
        assert_eq!(render(Err(decode_error())), FETCH_FAILED);
    }

    #[test]
    fn test_render_missing_articles_field() {
        assert_eq!(render(Ok(json!({"status": "ok"}))), FETCH_FAILED);
    }

    #[test]
    fn test_render_articles_not_an_array() {
        assert_eq!(render(Ok(json!({"articles": "nope"}))), FETCH_FAILED);
        assert_eq!(render(Ok(json!({"articles": null}))), FETCH_FAILED);
    }

    #[test]
    fn test_render_non_object_payload() {
        assert_eq!(render(Ok(json!([1, 2, 3]))), FETCH_FAILED);
    }

    #[test]
    fn test_render_empty_results() {
        assert_eq!(render(Ok(json!({"articles": []}))), NO_RESULTS);
    }

    #[test]
    fn test_render_single_article_with_missing_fields() {
        let response = json!({"articles": [{"title": "A", "url": "http://x"}]});
        assert_eq!(
            render(Ok(response)),
            "\nTitle: A\nDescription: No Description\nURL: http://x\nPublished At: Unknown\n"
        );
    }

    #[test]
    fn test_render_joins_blocks_in_upstream_order() {
        let response = json!({"articles": [
            {"title": "First"},
            {"title": "Second"},
            {"title": "Third"}
        ]});
        let digest = render(Ok(response));

        let blocks: Vec<&str> = digest.split("\n---\n").collect();
        assert_eq!(blocks.len(), 3);
        assert!(blocks[0].contains("Title: First"));
        assert!(blocks[1].contains("Title: Second"));
        assert!(blocks[2].contains("Title: Third"));
    }

    #[test]
    fn test_format_article_placeholders() {
        let block = format_article(&Article::default());
        assert_eq!(
            block,
            "\nTitle: No Title\nDescription: No Description\nURL: No URL\nPublished At: Unknown\n"
        );
    }

    #[test]
    fn test_format_article_all_fields() {
        let article = Article {
            title: Some("Headline".to_string()),
            description: Some("Summary".to_string()),
            url: Some("https://example.com/a".to_string()),
            published_at: Some("2024-05-01T12:00:00Z".to_string()),
        };
        let block = format_article(&article);
        assert!(block.contains("Title: Headline"));
        assert!(block.contains("Description: Summary"));
        assert!(block.contains("URL: https://example.com/a"));
        assert!(block.contains("Published At: 2024-05-01T12:00:00Z"));
    }
}
