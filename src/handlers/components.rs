use crate::protocol::ToolResult;
use crate::query;
use crate::store::{DocStore, COMPONENT_PREFIX};

/// Label lines that never serve as a relevance snippet.
const SNIPPET_SKIP_PREFIXES: &[&str] = &["Tag:"];
/// Placeholder snippet for documents without a meaningful first line.
const SNIPPET_FALLBACK: &str = "Modus Web Component";

/// Handle a `search_components` tool call.
pub fn search(store: &DocStore, query_str: &str) -> ToolResult {
    let hits = query::search(
        &store.components,
        query_str,
        SNIPPET_SKIP_PREFIXES,
        SNIPPET_FALLBACK,
    );

    if hits.is_empty() {
        return ToolResult::text(format!(
            "No components found matching \"{query_str}\". Try searching for common UI \
             elements like \"button\", \"input\", \"modal\", \"card\", etc."
        ));
    }

    let body = hits
        .iter()
        .map(|h| format!("**{}**\n{}\n", h.key, h.snippet))
        .collect::<Vec<_>>()
        .join("\n");

    ToolResult::text(format!(
        "Found {} component(s) matching \"{query_str}\":\n\n{body}",
        hits.len()
    ))
}

/// Handle a `get_component_docs` tool call.
///
/// The lookup name is normalized the same way keys are at load time, so
/// both `button` and `modus-wc-button` resolve the same record.
pub fn docs(store: &DocStore, component: &str) -> ToolResult {
    let normalized = component.to_lowercase();
    let normalized = normalized.strip_prefix(COMPONENT_PREFIX).unwrap_or(&normalized);

    match query::find_by_key(&store.components, normalized) {
        Some(doc) => ToolResult::text(doc.content.clone()),
        None => ToolResult::text(format!(
            "Component \"{component}\" not found.\n\nAvailable components: {}",
            query::available_keys(&store.components)
        )),
    }
}

/// Handle a `list_all_components` tool call.
pub fn list_all(store: &DocStore) -> ToolResult {
    let buckets = query::group_by_category(&store.components);

    let mut text = format!(
        "# Modus Web Components ({} components)\n\n",
        store.components.len()
    );

    for (category, keys) in &buckets {
        text.push_str(&format!("## {category}\n"));
        text.push_str(
            &keys
                .iter()
                .map(|k| format!("- {k}"))
                .collect::<Vec<_>>()
                .join("\n"),
        );
        text.push_str("\n\n");
    }

    ToolResult::text(text)
}

/// Handle a `find_by_attribute` tool call.
pub fn by_attribute(store: &DocStore, attribute: &str) -> ToolResult {
    let hits = query::find_by_attribute(&store.components, attribute);

    if hits.is_empty() {
        return ToolResult::text(format!(
            "No components found with attribute \"{attribute}\"."
        ));
    }

    let body = hits
        .iter()
        .map(|h| format!("**{}**\n```\n{}\n```\n", h.key, h.context))
        .collect::<Vec<_>>()
        .join("\n");

    ToolResult::text(format!(
        "Found {} component(s) with attribute \"{attribute}\":\n\n{body}",
        hits.len()
    ))
}
