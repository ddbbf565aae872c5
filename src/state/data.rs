/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the catalog file and the UI layer.
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// A single wedding photo studio, as listed in the catalog file.
///
/// Field names follow the catalog's camelCase JSON. Everything except
/// `id` and `name` may be missing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Studio {
    /// Unique identifier, also the key stored in the shortlist
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    /// Districts (quận) the studio operates in, in display order
    #[serde(default)]
    pub districts: Vec<String>,
    /// Hotline numbers, primary first
    #[serde(default)]
    pub phone: Vec<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Price as a display string (e.g. "từ 8.000.000đ")
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub portfolio_url: Option<String>,
    #[serde(default)]
    pub price_url: Option<String>,
    /// Album image references (URLs or paths), cover first
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub note: Option<String>,
}

impl Studio {
    /// Minimal studio for fixtures
    #[cfg(test)]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: String::new(),
            city: String::new(),
            districts: Vec::new(),
            phone: Vec::new(),
            email: None,
            price: None,
            website: None,
            portfolio_url: None,
            price_url: None,
            images: Vec::new(),
            note: None,
        }
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }
}

/// Where an album image lives once resolved against the catalog location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// A file on disk that iced can decode
    Local(PathBuf),
    /// An http(s) URL; never fetched, shown as a placeholder
    Remote(String),
}

impl ImageSource {
    /// Resolve a catalog image reference.
    ///
    /// Relative paths are joined to `base_dir` (the catalog's directory).
    pub fn resolve(reference: &str, base_dir: Option<&Path>) -> Self {
        let reference = reference.trim();

        if let Ok(parsed) = url::Url::parse(reference) {
            match parsed.scheme() {
                "http" | "https" => return ImageSource::Remote(reference.to_string()),
                "file" => {
                    if let Ok(path) = parsed.to_file_path() {
                        return ImageSource::Local(path);
                    }
                }
                _ => {}
            }
        }

        let path = PathBuf::from(reference);
        match base_dir {
            Some(base) if path.is_relative() => ImageSource::Local(base.join(path)),
            _ => ImageSource::Local(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case_with_defaults() {
        let json = r#"{
            "id": "aurora",
            "name": "Aurora Studio",
            "districts": ["Quận 3"],
            "portfolioUrl": "https://example.com/aurora",
            "images": ["a.jpg", "b.jpg"]
        }"#;
        let studio: Studio = serde_json::from_str(json).unwrap();

        assert_eq!(studio.id, "aurora");
        assert_eq!(studio.portfolio_url.as_deref(), Some("https://example.com/aurora"));
        assert_eq!(studio.image_count(), 2);
        assert!(studio.phone.is_empty());
        assert_eq!(studio.address, "");
        assert_eq!(studio.note, None);
    }

    #[test]
    fn test_resolve_remote_url() {
        let source = ImageSource::resolve("https://cdn.example.com/1.jpg", Some(Path::new("/data")));
        assert_eq!(source, ImageSource::Remote("https://cdn.example.com/1.jpg".to_string()));
    }

    #[test]
    fn test_resolve_relative_path_against_catalog_dir() {
        let source = ImageSource::resolve("images/aurora/1.jpg", Some(Path::new("/data")));
        assert_eq!(source, ImageSource::Local(PathBuf::from("/data/images/aurora/1.jpg")));
    }

    #[test]
    fn test_resolve_relative_path_without_base() {
        let source = ImageSource::resolve("1.jpg", None);
        assert_eq!(source, ImageSource::Local(PathBuf::from("1.jpg")));
    }
}
