//! Manifest written next to each generated page.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::scenario::DatasetSection;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionSummary {
    pub header_title: String,
    pub record_count: usize,
    pub max_amount: f64,
    pub total_amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageManifest {
    pub generated_at: String,
    pub run_id: String,
    pub page_path: String,
    pub page_sha256: String,
    pub page_bytes: usize,
    pub sections: Vec<SectionSummary>,
}

impl SectionSummary {
    pub fn from_section(section: &DatasetSection) -> Self {
        Self {
            header_title: section.header_title.clone(),
            record_count: section.records.len(),
            max_amount: section.max_amount(),
            total_amount: section.total_amount(),
        }
    }
}

impl PageManifest {
    pub fn build(
        page_path: &Path,
        html: &str,
        sections: &[DatasetSection],
        generated_at: String,
        run_id: String,
    ) -> Self {
        Self {
            generated_at,
            run_id,
            page_path: page_path.to_string_lossy().into_owned(),
            page_sha256: sha256_hex(html.as_bytes()),
            page_bytes: html.len(),
            sections: sections.iter().map(SectionSummary::from_section).collect(),
        }
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let body = serde_json::to_string_pretty(self).context("serializing page manifest")?;
        fs::write(path, body).with_context(|| format!("writing manifest {}", path.display()))
    }

    pub fn read(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading manifest {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("parsing manifest {}", path.display()))
    }
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// `out/index.html` -> `out/index.html.manifest.json`
pub fn default_manifest_path(page_path: &Path) -> PathBuf {
    let mut p = page_path.as_os_str().to_owned();
    p.push(".manifest.json");
    PathBuf::from(p)
}
