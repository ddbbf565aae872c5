use iced::widget::{button, pick_list, row, text, text_input, Space};
use iced::{Alignment, Element, Length};
use std::fmt;

use crate::state::filter::{result_summary, CatalogFilter};
use crate::Message;

/// Entry of the district selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DistrictOption {
    All,
    District(String),
}

impl DistrictOption {
    /// "All districts" followed by the catalog's districts
    pub fn list(districts: Vec<String>) -> Vec<DistrictOption> {
        std::iter::once(DistrictOption::All)
            .chain(districts.into_iter().map(DistrictOption::District))
            .collect()
    }

    pub fn from_selection(district: Option<&str>) -> Self {
        match district {
            Some(district) => DistrictOption::District(district.to_string()),
            None => DistrictOption::All,
        }
    }

    pub fn into_district(self) -> Option<String> {
        match self {
            DistrictOption::All => None,
            DistrictOption::District(district) => Some(district),
        }
    }
}

impl fmt::Display for DistrictOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistrictOption::All => write!(f, "Tất cả quận"),
            DistrictOption::District(district) => write!(f, "{}", district),
        }
    }
}

/// Label of the shortlist-only toggle, e.g. "♥ Đã chọn (3)"
pub fn shortlist_toggle_label(count: usize) -> String {
    format!("♥ Đã chọn ({})", count)
}

/// Search box, district selector, shortlist toggle and result counter
pub fn view_toolbar<'a>(
    filter: &'a CatalogFilter,
    options: &'a [DistrictOption],
    shortlist_count: usize,
    shown: usize,
    total: usize,
) -> Element<'a, Message> {
    let search = text_input("Tìm theo tên, quận, giá, ghi chú…", &filter.query)
        .on_input(Message::SearchChanged)
        .padding(10)
        .width(Length::FillPortion(3));

    let district = pick_list(
        options,
        Some(DistrictOption::from_selection(filter.district.as_deref())),
        Message::DistrictSelected,
    )
    .padding(10)
    .width(Length::FillPortion(1));

    let shortlist_only = filter.shortlist_only;
    let toggle = button(text(shortlist_toggle_label(shortlist_count)))
        .on_press(Message::ToggleShortlistOnly)
        .padding(10)
        .style(move |theme, status| {
            if shortlist_only {
                button::primary(theme, status)
            } else {
                button::secondary(theme, status)
            }
        });

    row![
        search,
        district,
        toggle,
        Space::with_width(Length::Fixed(12.0)),
        text(result_summary(shown, total)).size(14),
    ]
    .spacing(12)
    .padding(20)
    .align_y(Alignment::Center)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_list_starts_with_all() {
        let options = DistrictOption::list(vec!["Quận 1".to_string(), "Quận 3".to_string()]);
        assert_eq!(options.len(), 3);
        assert_eq!(options[0], DistrictOption::All);
        assert_eq!(options[0].to_string(), "Tất cả quận");
        assert_eq!(options[2].to_string(), "Quận 3");
    }

    #[test]
    fn test_option_round_trips_selection() {
        assert_eq!(DistrictOption::from_selection(None).into_district(), None);
        assert_eq!(
            DistrictOption::from_selection(Some("Gò Vấp")).into_district(),
            Some("Gò Vấp".to_string())
        );
    }

    #[test]
    fn test_shortlist_toggle_label() {
        assert_eq!(shortlist_toggle_label(0), "♥ Đã chọn (0)");
    }
}
