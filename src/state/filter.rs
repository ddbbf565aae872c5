/// Catalog filtering
///
/// The filtered view is a pure projection of the catalog and is recomputed
/// from scratch on every render.
use super::catalog::Catalog;
use super::data::Studio;
use super::normalize::{normalize, normalize_text};
use super::shortlist::Shortlist;

/// The user's current search controls
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    /// Free text typed in the search box
    pub query: String,
    /// Selected district, `None` for all districts
    pub district: Option<String>,
    /// Only show shortlisted studios
    pub shortlist_only: bool,
}

impl CatalogFilter {
    /// Studios matching every active criterion, in catalog order
    pub fn apply<'a>(&self, catalog: &'a Catalog, shortlist: &Shortlist) -> Vec<&'a Studio> {
        let query = normalize(&self.query);

        catalog
            .studios()
            .iter()
            .filter(|studio| self.matches(studio, &query, shortlist))
            .collect()
    }

    fn matches(&self, studio: &Studio, normalized_query: &str, shortlist: &Shortlist) -> bool {
        if self.shortlist_only && !shortlist.contains(&studio.id) {
            return false;
        }

        if let Some(district) = &self.district {
            if !studio.districts.contains(district) {
                return false;
            }
        }

        if normalized_query.is_empty() {
            return true;
        }

        search_haystack(studio).contains(normalized_query)
    }
}

/// Normalized text searched by the query, non-empty parts joined with " | "
fn search_haystack(studio: &Studio) -> String {
    [
        normalize(&studio.name),
        normalize(&studio.address),
        normalize(&studio.city),
        normalize(&studio.districts.join(" ")),
        normalize_text(studio.price.as_deref()),
        normalize_text(studio.note.as_deref()),
    ]
    .into_iter()
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(" | ")
}

/// Result counter text, e.g. "4/12 studio"
pub fn result_summary(shown: usize, total: usize) -> String {
    format!("{}/{} studio", shown, total)
}
