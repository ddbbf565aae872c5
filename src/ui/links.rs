use crate::state::data::Studio;

/// A clickable external link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub url: String,
}

/// Whether `url` is a well-formed absolute URL. Absent or blank is not.
pub fn is_valid_url(url: Option<&str>) -> bool {
    match url {
        Some(url) if !url.trim().is_empty() => url::Url::parse(url).is_ok(),
        _ => false,
    }
}

/// `Some(link)` only when the URL is valid
pub fn link(label: &'static str, url: Option<&str>) -> Option<Link> {
    let url = url.filter(|url| is_valid_url(Some(url)))?;
    Some(Link {
        label,
        url: url.to_string(),
    })
}

/// The studio's external links, broken ones omitted
pub fn studio_links(studio: &Studio) -> Vec<Link> {
    [
        link("Mở website", studio.website.as_deref()),
        link("Mở portfolio/album (studio)", studio.portfolio_url.as_deref()),
        link("Xem giá (nguồn)", studio.price_url.as_deref()),
    ]
    .into_iter()
    .flatten()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_urls() {
        assert!(is_valid_url(Some("https://example.com")));
        assert!(is_valid_url(Some("http://example.com/a?b=c#d")));
        assert!(is_valid_url(Some("mailto:studio@example.com")));
    }

    #[test]
    fn test_invalid_urls() {
        assert!(!is_valid_url(None));
        assert!(!is_valid_url(Some("")));
        assert!(!is_valid_url(Some("   ")));
        assert!(!is_valid_url(Some("www.example.com")));
        assert!(!is_valid_url(Some("/relative/path")));
        assert!(!is_valid_url(Some("http://")));
    }

    #[test]
    fn test_studio_links_skip_invalid() {
        let mut studio = Studio::new("a", "A");
        studio.website = Some("not a url".to_string());
        studio.portfolio_url = Some("https://example.com/album".to_string());
        studio.price_url = None;

        let links = studio_links(&studio);
        assert_eq!(
            links,
            vec![Link {
                label: "Mở portfolio/album (studio)",
                url: "https://example.com/album".to_string(),
            }]
        );
    }

    #[test]
    fn test_studio_without_links() {
        assert!(studio_links(&Studio::new("a", "A")).is_empty());
    }
}
