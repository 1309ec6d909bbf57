use std::sync::Arc;

use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters, ServerHandler},
    model::*,
    tool, tool_router, ErrorData as McpError,
};

use nd_core::digest;
use nd_newsapi::{NewsApiClient, NewsQuery};

use crate::types::GetNewsParams;

/// MCP service exposing the news search pipeline as a single tool.
///
/// The service carries no mutable state; concurrent tool calls share
/// only the client configuration behind the `Arc`.
#[derive(Clone)]
pub struct NewsService {
    client: Arc<NewsApiClient>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl NewsService {
    pub fn new(client: NewsApiClient) -> Self {
        Self {
            client: Arc::new(client),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Search news articles by keyword, date range, and source. Dates are YYYY-MM-DD and default to today (UTC)."
    )]
    async fn get_news(
        &self,
        Parameters(params): Parameters<GetNewsParams>,
    ) -> Result<CallToolResult, McpError> {
        let query = NewsQuery::new(
            params.q,
            params.from_date,
            params.to_date,
            params.sources,
            params.page_size,
        );

        let outcome = self.client.fetch(&query).await;
        if let Err(err) = &outcome {
            tracing::warn!("news fetch failed: {err}");
        }

        // Fetch failures render as a diagnostic string; the tool contract
        // is always a text result, never a protocol error.
        Ok(CallToolResult::success(vec![Content::text(
            digest::render(outcome),
        )]))
    }
}

impl ServerHandler for NewsService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "nd-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: Some("News Digest MCP Server".to_string()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Searches news articles via the NewsAPI everything endpoint. Call get_news \
                 with an optional keyword, YYYY-MM-DD date range, source identifier and page \
                 size; results come back as a readable text digest."
                    .to_string(),
            ),
        }
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        context: rmcp::service::RequestContext<rmcp::service::RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        use rmcp::handler::server::tool::ToolCallContext;
        let tcc = ToolCallContext::new(self, request, context);
        self.tool_router.call(tcc).await
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: rmcp::service::RequestContext<rmcp::service::RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(self.tool_router.list_all()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_service() -> NewsService {
        NewsService::new(NewsApiClient::new("test-key".to_string()))
    }

    #[test]
    fn test_router_lists_single_tool() {
        let service = test_service();
        let tools = service.tool_router.list_all();

        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name, "get_news");
        assert!(tools[0].description.is_some());
    }

    #[test]
    fn test_get_news_schema_exposes_parameters() {
        let service = test_service();
        let tools = service.tool_router.list_all();
        let schema = &tools[0].input_schema;

        let properties = schema
            .get("properties")
            .and_then(|p| p.as_object())
            .expect("input schema has properties");
        for name in ["q", "from_date", "to_date", "sources", "page_size"] {
            assert!(properties.contains_key(name), "schema missing {}", name);
        }
    }

    #[test]
    fn test_get_info() {
        let service = test_service();
        let info = service.get_info();

        assert_eq!(info.server_info.name, "nd-mcp");
        assert!(info.capabilities.tools.is_some());
        assert!(info.instructions.is_some());
    }
}
