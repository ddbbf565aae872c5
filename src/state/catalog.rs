use serde::Deserialize;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::data::{ImageSource, Studio};
use super::normalize::normalize;
use crate::error::Result;

/// Shown in place of the district list when a studio has none
pub const DEFAULT_AREA: &str = "TP.HCM";

/// Accepted layouts of the catalog file
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    List(Vec<Studio>),
    Wrapped { studios: Vec<Studio> },
}

/// The read-only studio dataset, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    studios: Vec<Studio>,
    /// Directory relative image paths are resolved against
    base_dir: Option<PathBuf>,
}

impl Catalog {
    /// Load a catalog from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let studios = match serde_json::from_str(&content)? {
            CatalogFile::List(studios) => studios,
            CatalogFile::Wrapped { studios } => studios,
        };

        tracing::info!("📚 Loaded {} studios from {}", studios.len(), path.display());
        Ok(Self::from_studios(studios, path.parent().map(Path::to_path_buf)))
    }

    pub fn from_studios(studios: Vec<Studio>, base_dir: Option<PathBuf>) -> Self {
        let mut seen = HashSet::new();
        for studio in &studios {
            if !seen.insert(studio.id.as_str()) {
                tracing::warn!("⚠️  Duplicate studio id '{}', keeping the first", studio.id);
            }
        }

        Self { studios, base_dir }
    }

    pub fn studios(&self) -> &[Studio] {
        &self.studios
    }

    pub fn len(&self) -> usize {
        self.studios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.studios.is_empty()
    }

    /// First studio with the given id
    pub fn find(&self, id: &str) -> Option<&Studio> {
        self.studios.iter().find(|studio| studio.id == id)
    }

    /// Resolve one of a studio's image references
    pub fn image_source(&self, reference: &str) -> ImageSource {
        ImageSource::resolve(reference, self.base_dir.as_deref())
    }

    /// Every district mentioned in the catalog, once, in Vietnamese
    /// alphabetical order
    pub fn district_options(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut districts: Vec<String> = self
            .studios
            .iter()
            .flat_map(|studio| studio.districts.iter())
            .filter(|district| seen.insert(district.as_str()))
            .cloned()
            .collect();

        districts.sort_by(|a, b| compare_vietnamese(a, b));
        districts
    }
}

/// Order by the diacritic-free form first so "Bình Thạnh" sorts next to
/// "Binh Tan"; the raw strings break ties.
fn compare_vietnamese(a: &str, b: &str) -> Ordering {
    normalize(a).cmp(&normalize(b)).then_with(|| a.cmp(b))
}

/// Districts joined for display, or the city-wide label when none
pub fn format_districts(studio: &Studio) -> String {
    if studio.districts.is_empty() {
        DEFAULT_AREA.to_string()
    } else {
        studio.districts.join(" • ")
    }
}
