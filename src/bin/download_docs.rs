//! Documentation downloader for the Modus MCP server.
//!
//! Fetches the pinned documentation bundle from the upstream Modus Web
//! Components repository into `docs/`, `rules/`, and `setup/` so the server
//! can load it at startup. A file that fails to download is skipped with a
//! warning; the run never aborts on a single miss.

use std::path::Path;

const DOCS_BASE_URL: &str = "https://raw.githubusercontent.com/julianoczkowski/QAUI-Modus-Web-Components/main/components_LLM_docs/";
const RULES_BASE_URL: &str = "https://raw.githubusercontent.com/julianoczkowski/QAUI-Modus-Web-Components/main/rules_LLM_docs/";
const SETUP_BASE_URL: &str = "https://raw.githubusercontent.com/julianoczkowski/QAUI-Modus-Web-Components/main/setup_LLM_docs/";

const COMPONENT_FILES: &[&str] = &[
    "modus-wc-accordion.md",
    "modus-wc-alert.md",
    "modus-wc-autocomplete.md",
    "modus-wc-avatar.md",
    "modus-wc-badge.md",
    "modus-wc-breadcrumbs.md",
    "modus-wc-button.md",
    "modus-wc-card.md",
    "modus-wc-checkbox.md",
    "modus-wc-chip.md",
    "modus-wc-collapse.md",
    "modus-wc-date.md",
    "modus-wc-divider.md",
    "modus-wc-dropdown-menu.md",
    "modus-wc-icon.md",
    "modus-wc-input-feedback.md",
    "modus-wc-input-label.md",
    "modus-wc-loader.md",
    "modus-wc-menu-item.md",
    "modus-wc-menu.md",
    "modus-wc-modal.md",
    "modus-wc-navbar.md",
    "modus-wc-number-input.md",
    "modus-wc-pagination.md",
    "modus-wc-progress.md",
    "modus-wc-radio.md",
    "modus-wc-rating.md",
    "modus-wc-select.md",
    "modus-wc-side-navigation.md",
    "modus-wc-skeleton.md",
    "modus-wc-slider.md",
    "modus-wc-stepper.md",
    "modus-wc-switch.md",
    "modus-wc-table.md",
    "modus-wc-tabs.md",
    "modus-wc-text-input.md",
    "modus-wc-textarea.md",
    "modus-wc-theme-switcher.md",
    "modus-wc-time-input.md",
    "modus-wc-toast.md",
    "modus-wc-toolbar.md",
    "modus-wc-tooltip.md",
    "modus-wc-typography.md",
    "modus-wc-utility-panel.md",
];

const RULE_FILES: &[&str] = &[
    "breakpoints.md",
    "modus_colors.md",
    "modus_icons.md",
    "radius_stroke.md",
    "spacing.md",
    "typography.md",
];

const SETUP_FILES: &[&str] = &[
    "setup_html.md",
    "setup_react.md",
    "testing.md",
    "theme_usage.md",
    "universal_rules.md",
];

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = download_all().await {
        eprintln!("download-docs: fatal error: {e}");
        std::process::exit(1);
    }
}

async fn download_all() -> Result<(), Box<dyn std::error::Error>> {
    let client = reqwest::Client::builder()
        .user_agent(concat!("mcp-modus-server/", env!("CARGO_PKG_VERSION")))
        .build()?;

    eprintln!("Downloading Modus Web Components documentation and guides...");

    download_files(
        &client,
        COMPONENT_FILES,
        DOCS_BASE_URL,
        Path::new("docs"),
        "component documentation",
    )
    .await?;
    download_files(
        &client,
        RULE_FILES,
        RULES_BASE_URL,
        Path::new("rules"),
        "design rules",
    )
    .await?;
    download_files(
        &client,
        SETUP_FILES,
        SETUP_BASE_URL,
        Path::new("setup"),
        "setup guides",
    )
    .await?;

    eprintln!("All documentation download complete");
    Ok(())
}

async fn download_files(
    client: &reqwest::Client,
    files: &[&str],
    base_url: &str,
    directory: &Path,
    description: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all(directory)?;
    eprintln!("Downloading {description}...");

    for file in files {
        let url = format!("{base_url}{file}");

        let response = match client.get(&url).send().await {
            Ok(r) => r,
            Err(e) => {
                eprintln!("Error downloading {file}: {e}");
                continue;
            }
        };

        if !response.status().is_success() {
            eprintln!("Skipping {file} ({})", response.status());
            continue;
        }

        match response.text().await {
            Ok(content) => {
                std::fs::write(directory.join(file), content)?;
                eprintln!("Downloaded {file}");
            }
            Err(e) => {
                eprintln!("Error reading {file}: {e}");
            }
        }
    }

    Ok(())
}
