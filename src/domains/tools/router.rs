//! Tool Router - builds the rmcp ToolRouter.
//!
//! Each tool knows how to create its own route; this module only chains
//! them together.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::core::config::Config;

use super::definitions::{FetchTool, ResumeTool, ValidateTool};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(config: Arc<Config>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(ResumeTool::create_route(config.clone()))
        .with_route(ValidateTool::create_route(config.clone()))
        .with_route(FetchTool::create_route(config))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;

    struct TestServer {}

    fn test_config() -> Arc<Config> {
        Arc::new(Config::default())
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_config());
        let tools = router.list_all();
        assert_eq!(tools.len(), 3);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"resume"));
        assert!(names.contains(&"validate"));
        assert!(names.contains(&"fetch"));
    }

    #[test]
    fn test_registry_matches_router() {
        let registry_names = ToolRegistry::tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(test_config());
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
