use crate::protocol::ToolResult;
use crate::query;
use crate::store::DocStore;

/// Horizontal rules never serve as a relevance snippet.
const SNIPPET_SKIP_PREFIXES: &[&str] = &["---"];
/// Placeholder snippet for rules without a meaningful first line.
const SNIPPET_FALLBACK: &str = "Design rule documentation";
/// Placeholder description in the category listing.
const DESCRIPTION_FALLBACK: &str = "Design guidelines and specifications";

/// Handle a `get_design_rules` tool call.
///
/// Matches the category against rule keys exactly, falling back to filename
/// containment so `modus_colors` resolves the rule keyed `colors`.
pub fn get(store: &DocStore, category: &str) -> ToolResult {
    match query::find_by_key_or_filename(&store.design_rules, &category.to_lowercase()) {
        Some(rule) => ToolResult::text(rule.content.clone()),
        None => ToolResult::text(format!(
            "Design rule category \"{category}\" not found.\n\nAvailable categories: {}",
            query::available_keys(&store.design_rules)
        )),
    }
}

/// Handle a `search_design_rules` tool call.
pub fn search(store: &DocStore, query_str: &str) -> ToolResult {
    let hits = query::search(
        &store.design_rules,
        query_str,
        SNIPPET_SKIP_PREFIXES,
        SNIPPET_FALLBACK,
    );

    if hits.is_empty() {
        return ToolResult::text(format!(
            "No design rules found matching \"{query_str}\". Try searching for terms \
             like \"color\", \"icon\", \"spacing\", \"typography\", etc."
        ));
    }

    let body = hits
        .iter()
        .map(|h| format!("**{}**\n{}\n", h.key, h.snippet))
        .collect::<Vec<_>>()
        .join("\n");

    ToolResult::text(format!(
        "Found {} design rule(s) matching \"{query_str}\":\n\n{body}",
        hits.len()
    ))
}

/// Handle a `list_design_categories` tool call.
pub fn list_categories(store: &DocStore) -> ToolResult {
    let mut text = format!(
        "# Modus Design Rules ({} categories)\n\n",
        store.design_rules.len()
    );

    for rule in query::sorted_by_key(&store.design_rules) {
        let description = query::brief_description(&rule.content)
            .unwrap_or_else(|| DESCRIPTION_FALLBACK.to_string());
        text.push_str(&format!("## {}\n{description}\n\n", rule.key));
    }

    ToolResult::text(text)
}
