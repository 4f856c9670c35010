pub mod request;
pub mod response;

pub use request::{
    FindByAttributeParams, GetComponentDocsParams, GetDesignRulesParams, GetSetupGuideParams,
    InitializeParams, JsonRpcRequest, RpcId, SearchComponentsParams, SearchDesignRulesParams,
    ToolCallParams,
};
pub use response::{JsonRpcError, JsonRpcResponse, ToolResult, ToolResultContent};
