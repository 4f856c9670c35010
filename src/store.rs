use std::path::Path;

use crate::config::ServerConfig;

/// Filename prefix stripped from component documentation files.
pub const COMPONENT_PREFIX: &str = "modus-wc-";
/// Filename prefix stripped from design rule files.
pub const RULE_PREFIX: &str = "modus_";
/// Filename prefix stripped from setup guide files.
pub const SETUP_PREFIX: &str = "setup_";

/// Friendlier aliases for setup guide keys, applied after generic filename
/// normalization. Fixed lookup table, not a general rule.
const SETUP_KEY_ALIASES: &[(&str, &str)] = &[
    ("universal_rules", "universal"),
    ("theme_usage", "theme"),
];

/// One documentation file held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocRecord {
    /// Original source file name.
    pub filename: String,
    /// Normalized identifier derived from the filename.
    pub key: String,
    /// Full raw text body.
    pub content: String,
}

/// The three documentation collections.
///
/// Populated once at startup and read-only afterward; handlers borrow the
/// store and never mutate it.
#[derive(Debug, Default)]
pub struct DocStore {
    pub components: Vec<DocRecord>,
    pub design_rules: Vec<DocRecord>,
    pub setup_guides: Vec<DocRecord>,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("cannot read directory {dir}: {source}")]
    ReadDir {
        dir: String,
        #[source]
        source: std::io::Error,
    },
}

impl DocStore {
    /// Load all three collections from the configured directories.
    ///
    /// A missing directory leaves its collection empty and logs a warning;
    /// an unreadable file is skipped. Neither is fatal: queries against an
    /// empty collection degrade to "not found" responses.
    pub fn load(config: &ServerConfig) -> Self {
        Self {
            components: load_collection(
                &config.docs_dir,
                COMPONENT_PREFIX,
                &[],
                "component documentation",
            ),
            design_rules: load_collection(&config.rules_dir, RULE_PREFIX, &[], "design rules"),
            setup_guides: load_collection(
                &config.setup_dir,
                SETUP_PREFIX,
                SETUP_KEY_ALIASES,
                "setup guide",
            ),
        }
    }
}

fn load_collection(
    dir: &Path,
    prefix: &str,
    aliases: &[(&str, &str)],
    label: &str,
) -> Vec<DocRecord> {
    if !dir.is_dir() {
        eprintln!("{label} directory not found at: {}", dir.display());
        eprintln!("Run the download-docs binary to fetch documentation.");
        return Vec::new();
    }

    match read_records(dir, prefix, aliases, label) {
        Ok(records) => {
            eprintln!("Loaded {} {label} files", records.len());
            records
        }
        Err(e) => {
            eprintln!("Cannot load {label}: {e}");
            Vec::new()
        }
    }
}

fn read_records(
    dir: &Path,
    prefix: &str,
    aliases: &[(&str, &str)],
    label: &str,
) -> Result<Vec<DocRecord>, StoreError> {
    let entries = std::fs::read_dir(dir).map_err(|e| StoreError::ReadDir {
        dir: dir.display().to_string(),
        source: e,
    })?;

    let mut filenames: Vec<String> = entries
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| name.ends_with(".md"))
        .collect();

    // Sorted load order makes duplicate-key resolution deterministic.
    filenames.sort();

    let mut records = Vec::new();
    for filename in filenames {
        let content = match std::fs::read_to_string(dir.join(&filename)) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Skipping {filename}: {e}");
                continue;
            }
        };

        let key = normalize_key(&filename, prefix, aliases);
        push_record(
            &mut records,
            DocRecord {
                filename,
                key,
                content,
            },
            label,
        );
    }

    Ok(records)
}

/// Derive a record key from its filename: strip the `.md` extension, strip
/// the collection's fixed prefix, then apply any fixed alias remapping.
fn normalize_key(filename: &str, prefix: &str, aliases: &[(&str, &str)]) -> String {
    let stem = filename.strip_suffix(".md").unwrap_or(filename);
    let stem = stem.strip_prefix(prefix).unwrap_or(stem);

    aliases
        .iter()
        .find(|(from, _)| *from == stem)
        .map_or_else(|| stem.to_string(), |(_, to)| (*to).to_string())
}

/// Keys are unique within a collection: a later file that normalizes to an
/// existing key replaces the earlier record in place.
fn push_record(records: &mut Vec<DocRecord>, record: DocRecord, label: &str) {
    if let Some(existing) = records.iter_mut().find(|r| r.key == record.key) {
        eprintln!(
            "Duplicate {label} key \"{}\": {} replaces {}",
            record.key, record.filename, existing.filename
        );
        *existing = record;
    } else {
        records.push(record);
    }
}
