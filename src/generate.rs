//! One generation run: sections in, page and manifest out.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::datasets::resolve_sections;
use crate::logging::{info, obj, run_id, ts_now, v_num, v_str, Domain};
use crate::manifest::{default_manifest_path, PageManifest};
use crate::page::render_page;
use crate::render::RenderedSection;
use crate::scenario::DatasetSection;

/// Render every section in order.
pub fn render_sections(sections: &[DatasetSection]) -> Vec<RenderedSection> {
    sections
        .iter()
        .map(|section| {
            let rendered = section.render();
            info(
                Domain::Render,
                "section_rendered",
                obj(&[
                    ("header_title", v_str(&section.header_title)),
                    ("cards", v_num(rendered.cards.len() as f64)),
                    ("y_max", v_num(rendered.chart.y_range()[1])),
                    ("footnotes", v_num(rendered.footnotes.len() as f64)),
                ]),
            );
            rendered
        })
        .collect()
}

/// Resolve sections from config, write the page, and optionally its manifest.
pub fn generate(cfg: &Config) -> Result<PageManifest> {
    let sections = resolve_sections(cfg.dataset_file.as_deref())?;
    let rendered = render_sections(&sections);
    let html = render_page(&cfg.page_title, &cfg.plotly_src, &rendered)?;

    write_page(&cfg.output_path, &html)?;
    info(
        Domain::Output,
        "page_written",
        obj(&[
            ("path", v_str(&cfg.output_path.to_string_lossy())),
            ("kb", v_num(html.len() as f64 / 1024.0)),
        ]),
    );

    let manifest = PageManifest::build(
        &cfg.output_path,
        &html,
        &sections,
        ts_now(),
        run_id().to_string(),
    );
    if cfg.write_manifest {
        let path = default_manifest_path(&cfg.output_path);
        manifest.write(&path)?;
        info(
            Domain::Output,
            "manifest_written",
            obj(&[
                ("path", v_str(&path.to_string_lossy())),
                ("sha256", v_str(&manifest.page_sha256)),
            ]),
        );
    }
    Ok(manifest)
}

fn write_page(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory {}", parent.display()))?;
    }
    fs::write(path, html).with_context(|| format!("writing page {}", path.display()))
}
