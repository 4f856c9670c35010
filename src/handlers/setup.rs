use crate::protocol::ToolResult;
use crate::query;
use crate::store::DocStore;

/// Handle a `get_setup_guide` tool call.
pub fn guide(store: &DocStore, setup_type: &str) -> ToolResult {
    match query::find_by_key_or_filename(&store.setup_guides, &setup_type.to_lowercase()) {
        Some(guide) => ToolResult::text(guide.content.clone()),
        None => ToolResult::text(format!(
            "Setup guide type \"{setup_type}\" not found.\n\nAvailable types: {}",
            query::available_keys(&store.setup_guides)
        )),
    }
}

/// Handle a `get_theme_usage` tool call.
pub fn theme_usage(store: &DocStore) -> ToolResult {
    fixed_guide(store, "theme", "Theme usage guide")
}

/// Handle a `get_development_rules` tool call.
pub fn development_rules(store: &DocStore) -> ToolResult {
    fixed_guide(store, "universal", "Universal development rules")
}

/// Look up one of the two aliased setup guides by its remapped key.
fn fixed_guide(store: &DocStore, key: &str, label: &str) -> ToolResult {
    let guide = store
        .setup_guides
        .iter()
        .find(|g| g.key == key || g.filename.contains(key));

    match guide {
        Some(guide) => ToolResult::text(guide.content.clone()),
        None => ToolResult::text(format!(
            "{label} not found. Run the download-docs binary to fetch documentation."
        )),
    }
}
