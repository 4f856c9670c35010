//! Document store loading tests.
//!
//! Exercise filename normalization, the setup key remap table, tolerance of
//! missing directories, and the pinned duplicate-key resolution:
//! deterministic sorted load order, later file replaces earlier record.

use std::fs;
use std::path::Path;

use mcp_modus_server::config::ServerConfig;
use mcp_modus_server::store::DocStore;

fn test_config(root: &Path) -> ServerConfig {
    ServerConfig {
        docs_dir: root.join("docs"),
        rules_dir: root.join("rules"),
        setup_dir: root.join("setup"),
    }
}

fn write_doc(dir: &Path, name: &str, content: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join(name), content).unwrap();
}

#[test]
fn component_keys_strip_prefix_and_extension() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    write_doc(&root.join("docs"), "modus-wc-button.md", "# Button\n");

    let store = DocStore::load(&test_config(root));

    assert_eq!(store.components.len(), 1);
    assert_eq!(store.components[0].key, "button");
    assert_eq!(store.components[0].filename, "modus-wc-button.md");
    assert_eq!(store.components[0].content, "# Button\n");
}

#[test]
fn rule_keys_strip_prefix_only_when_present() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    write_doc(&root.join("rules"), "modus_colors.md", "# Colors\n");
    write_doc(&root.join("rules"), "breakpoints.md", "# Breakpoints\n");

    let store = DocStore::load(&test_config(root));

    let keys: Vec<&str> = store.design_rules.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(keys, vec!["breakpoints", "colors"]);
}

#[test]
fn setup_keys_are_remapped_to_aliases() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    let setup = root.join("setup");
    write_doc(&setup, "setup_html.md", "# HTML setup\n");
    write_doc(&setup, "setup_react.md", "# React setup\n");
    write_doc(&setup, "testing.md", "# Testing\n");
    write_doc(&setup, "theme_usage.md", "# Themes\n");
    write_doc(&setup, "universal_rules.md", "# Rules\n");

    let store = DocStore::load(&test_config(root));

    let keys: Vec<&str> = store.setup_guides.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(keys, vec!["html", "react", "testing", "theme", "universal"]);
}

#[test]
fn missing_directories_yield_empty_collections() {
    let tmp = tempfile::tempdir().unwrap();
    let store = DocStore::load(&test_config(tmp.path()));

    assert!(store.components.is_empty());
    assert!(store.design_rules.is_empty());
    assert!(store.setup_guides.is_empty());
}

#[test]
fn non_markdown_files_are_ignored() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    let docs = root.join("docs");
    write_doc(&docs, "modus-wc-alert.md", "# Alert\n");
    write_doc(&docs, "README.txt", "not documentation");
    write_doc(&docs, "notes", "also not documentation");

    let store = DocStore::load(&test_config(root));

    assert_eq!(store.components.len(), 1);
    assert_eq!(store.components[0].key, "alert");
}

#[test]
fn load_order_is_sorted_by_filename() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    let docs = root.join("docs");
    write_doc(&docs, "modus-wc-toast.md", "# Toast\n");
    write_doc(&docs, "modus-wc-alert.md", "# Alert\n");
    write_doc(&docs, "modus-wc-modal.md", "# Modal\n");

    let store = DocStore::load(&test_config(root));

    let keys: Vec<&str> = store.components.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(keys, vec!["alert", "modal", "toast"]);
}

#[test]
fn duplicate_key_resolves_to_later_file() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    let docs = root.join("docs");
    // Both normalize to the key "button"; "button.md" sorts first, so the
    // prefixed file loaded later wins.
    write_doc(&docs, "button.md", "unprefixed variant\n");
    write_doc(&docs, "modus-wc-button.md", "prefixed variant\n");

    let store = DocStore::load(&test_config(root));

    assert_eq!(store.components.len(), 1);
    assert_eq!(store.components[0].key, "button");
    assert_eq!(store.components[0].filename, "modus-wc-button.md");
    assert_eq!(store.components[0].content, "prefixed variant\n");
}

#[test]
fn explicit_root_overrides_probing() {
    let config = ServerConfig::resolve(Some(Path::new("/srv/modus")));

    assert_eq!(config.docs_dir, Path::new("/srv/modus/docs"));
    assert_eq!(config.rules_dir, Path::new("/srv/modus/rules"));
    assert_eq!(config.setup_dir, Path::new("/srv/modus/setup"));
}
