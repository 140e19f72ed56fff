// src/pipeline.rs
// =============================================================================
// One run, start to finish:
//
//   fetch module -> for each section: fetch + render (images downloaded
//   here) -> order + build navigation -> write stylesheets, pages, index
//
// Everything runs in sequence. A section whose detail request comes back
// with a non-success status is logged and left out; any other failure
// stops the run.
// =============================================================================

use std::collections::HashMap;
use std::path::PathBuf;

use tracing::{info, warn};

use crate::api::ApiClient;
use crate::assets::{AssetDownloader, AssetStats};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::organize::{build_navigation, order_sections, RenderedSection};
use crate::output::Bundle;
use crate::render::{render_section, Highlighter};
use crate::site;

/// What a finished run produced, for the closing report
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub module_name: String,
    pub bundle_dir: PathBuf,
    pub index_path: PathBuf,
    pub pages_written: usize,
    pub sections_skipped: usize,
    pub assets: AssetStats,
}

pub async fn build_bundle(config: &Config) -> Result<RunSummary> {
    // Theme problems are configuration errors; catch them before the network
    let highlighter = Highlighter::new(&config.theme)?;
    let api = ApiClient::new(config)?;

    let module = api.fetch_module().await?;
    info!(id = module.id, sections = module.sections.len(), "module metadata fetched");
    println!("📚 Module: {}", module.name);
    println!("📄 Found {} section(s)\n", module.sections.len());

    let bundle = Bundle::create(&config.output_root, config.module_id, &module.name)?;
    let mut assets = AssetDownloader::new(&api, bundle.assets_dir());

    let mut rendered: HashMap<u64, RenderedSection> = HashMap::new();
    let mut skipped = 0;

    for summary in &module.sections {
        let raw = match api.fetch_section(summary.id).await {
            Ok(raw) => raw,
            Err(Error::Status { url, status }) => {
                warn!(
                    section = summary.id,
                    title = summary.title.as_deref().unwrap_or(""),
                    %status,
                    url = %url,
                    "failed to fetch section, skipping"
                );
                skipped += 1;
                continue;
            }
            Err(e) => return Err(e),
        };

        println!("   [{}] {}", raw.page, raw.title);
        let html = render_section(&raw.markdown, &highlighter, &mut assets).await?;

        rendered.insert(
            raw.id,
            RenderedSection {
                id: raw.id,
                title: raw.title,
                html,
                page: raw.page,
                group: raw.group,
            },
        );
    }

    let ordered = order_sections(&module.sections, &rendered)?;
    let navigation = build_navigation(&ordered);
    let nav_html = site::render_nav(&navigation);
    info!(
        groups = navigation.groups.len(),
        pages = navigation.page_count(),
        "navigation built"
    );

    bundle.write_root_file("style.css", site::STYLE_CSS)?;
    bundle.write_root_file("pygments.css", &highlighter.stylesheet()?)?;

    let favicon = config.favicon_url();
    for section in &ordered {
        let page = site::section_page(section, &nav_html, &favicon);
        bundle.write_page(&section.file_name(), &page)?;
    }

    let index_path = bundle.write_root_file("index.html", &site::index_page(&module.name, &nav_html))?;

    Ok(RunSummary {
        module_name: module.name,
        bundle_dir: bundle.root().to_path_buf(),
        index_path,
        pages_written: ordered.len(),
        sections_skipped: skipped,
        assets: assets.stats(),
    })
}
