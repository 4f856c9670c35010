use std::path::{Path, PathBuf};

/// Directory name holding component documentation files.
const DOCS_DIR: &str = "docs";
/// Directory name holding design rule files.
const RULES_DIR: &str = "rules";
/// Directory name holding setup guide files.
const SETUP_DIR: &str = "setup";

/// Server configuration: where the three documentation directories live.
///
/// A missing directory is not a configuration error; the corresponding
/// collection simply loads empty and queries against it report "not found".
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub docs_dir: PathBuf,
    pub rules_dir: PathBuf,
    pub setup_dir: PathBuf,
}

impl ServerConfig {
    /// Resolve configuration from the environment.
    ///
    /// - `MODUS_DOCS_ROOT` (optional): directory containing `docs/`,
    ///   `rules/`, and `setup/`. When unset, each directory is probed next
    ///   to the executable (and its parent) and in the current working
    ///   directory, matching where the `download-docs` binary places them.
    pub fn from_env() -> Self {
        let root = std::env::var_os("MODUS_DOCS_ROOT").map(PathBuf::from);
        Self::resolve(root.as_deref())
    }

    /// Resolve the three directories against an explicit root, or by probing
    /// candidate locations when no root is given.
    pub fn resolve(root: Option<&Path>) -> Self {
        Self {
            docs_dir: resolve_dir(root, DOCS_DIR),
            rules_dir: resolve_dir(root, RULES_DIR),
            setup_dir: resolve_dir(root, SETUP_DIR),
        }
    }
}

fn resolve_dir(root: Option<&Path>, name: &str) -> PathBuf {
    if let Some(root) = root {
        return root.join(name);
    }

    let mut candidates = Vec::new();
    if let Ok(exe) = std::env::current_exe() {
        if let Some(exe_dir) = exe.parent() {
            candidates.push(exe_dir.join("..").join(name));
            candidates.push(exe_dir.join(name));
        }
    }
    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd.join(name));
    }

    candidates
        .into_iter()
        .find(|p| p.is_dir())
        .unwrap_or_else(|| PathBuf::from(name))
}
