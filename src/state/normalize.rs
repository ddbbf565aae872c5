/// Search text normalization
///
/// Studio names and districts are Vietnamese, so users type them with or
/// without tone marks. Both sides of a comparison go through `normalize`.
use unicode_normalization::UnicodeNormalization;

/// Normalize possibly absent text. `None` is treated as the empty string.
pub fn normalize_text(value: Option<&str>) -> String {
    value.map(normalize).unwrap_or_default()
}

/// Lowercase, strip combining diacritics and fold `đ` to `d`.
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| if c == 'đ' { 'd' } else { c })
        .collect()
}

fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vietnamese_matches_plain_ascii() {
        assert_eq!(normalize("Đà Lạt"), normalize("da lat"));
        assert_eq!(normalize("Đà Lạt"), "da lat");
    }

    #[test]
    fn test_absent_and_empty_input() {
        assert_eq!(normalize_text(None), "");
        assert_eq!(normalize_text(Some("")), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_district_names() {
        assert_eq!(normalize("Quận Bình Thạnh"), "quan binh thanh");
        assert_eq!(normalize("PHÚ NHUẬN"), "phu nhuan");
    }

    #[test]
    fn test_precomposed_and_decomposed_forms_agree() {
        // "ế" as one code point vs "e" + circumflex + acute
        assert_eq!(normalize("Huế"), normalize("Hue\u{0302}\u{0301}"));
    }

    #[test]
    fn test_non_latin_text_is_kept() {
        assert_eq!(normalize("Studio 99 • TP.HCM"), "studio 99 • tp.hcm");
    }
}
