use std::path::{Path, PathBuf};

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;

use crate::{
    config::load_config,
    core::ExtractContext,
    issues::Severity,
};

use super::types::{
    ConfigDto, ConfigValues, DEFAULT_LIMIT, GetConfigParams, IssueItem, IssuesScanResult,
    MAX_LIMIT, Pagination, ScanIssuesParams, ScanStringsParams, StringItem, StringsScanResult,
};

#[derive(Clone)]
pub struct GleanMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for GleanMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

fn load_context(project_root_path: &str) -> Result<ExtractContext, McpError> {
    let root = PathBuf::from(project_root_path);
    if !root.is_dir() {
        return Err(McpError::invalid_params(
            format!("Not a directory: {}", project_root_path),
            None,
        ));
    }

    let result = load_config(&root)
        .map_err(|e| McpError::internal_error(format!("Failed to load config: {:#}", e), None))?;

    Ok(ExtractContext::with_config(root, result.config, false))
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;

    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

#[tool_router]
impl GleanMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Get project configuration
    #[tool(
        description = "Get the glean configuration for a project (.gleanrc.json or defaults): marker keywords, scanned extensions, catalog domain, output directory and languages."
    )]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path).map_err(|e| {
            McpError::internal_error(format!("Failed to load config: {:#}", e), None)
        })?;

        json_result(&ConfigDto {
            from_file: result.from_file,
            config: ConfigValues::from(result.config),
        })
    }

    /// List harvested strings
    #[tool(
        description = "Extract translatable strings (marker calls such as _(\"...\")) from the project's source files. Returns a paginated list with file, line and column."
    )]
    pub async fn scan_strings(
        &self,
        params: Parameters<ScanStringsParams>,
    ) -> Result<CallToolResult, McpError> {
        let limit = params
            .0
            .limit
            .map(|v| v as usize)
            .unwrap_or(DEFAULT_LIMIT)
            .min(MAX_LIMIT);
        let offset = params.0.offset.map(|v| v as usize).unwrap_or(0);

        let ctx = load_context(&params.0.project_root_path)?;
        let records = ctx.records();

        let items: Vec<StringItem> = records
            .iter()
            .skip(offset)
            .take(limit)
            .map(StringItem::from)
            .collect();
        let has_more = offset + items.len() < records.len();

        json_result(&StringsScanResult {
            total_count: records.len(),
            unique_count: ctx.catalog().len(),
            total_file_count: ctx.files.len(),
            items,
            pagination: Pagination {
                offset,
                limit,
                has_more,
            },
        })
    }

    /// List extraction problems
    #[tool(
        description = "Report extraction problems: unterminated string literals in marker calls, unreadable source files and empty msgids."
    )]
    pub async fn scan_issues(
        &self,
        params: Parameters<ScanIssuesParams>,
    ) -> Result<CallToolResult, McpError> {
        let ctx = load_context(&params.0.project_root_path)?;
        let issues = ctx.issues();

        let error_count = issues
            .iter()
            .filter(|i| i.severity() == Severity::Error)
            .count();

        json_result(&IssuesScanResult {
            error_count,
            warning_count: issues.len() - error_count,
            files_scanned: ctx.files.len(),
            items: issues.iter().map(IssueItem::from).collect(),
        })
    }
}

#[tool_handler]
impl ServerHandler for GleanMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Glean MCP helps AI agents work on gettext localization of C and C++ projects.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. scan_strings - List translatable strings found in source files (paginated)\n\
                 3. scan_issues - List malformed marker calls and unreadable files\n\n\
                 Fix scan_issues errors first: a malformed call drops its string from the catalog."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = GleanMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
