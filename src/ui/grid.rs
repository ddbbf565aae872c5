use iced::widget::{button, column, container, row, scrollable, text, tooltip, Space};
use iced::{Alignment, Element, Length, Pixels};
use iced_aw::Wrap;

use crate::state::catalog::{format_districts, Catalog};
use crate::state::data::{ImageSource, Studio};
use crate::state::shortlist::Shortlist;
use crate::ui::image_view;
use crate::ui::links::{link, Link};
use crate::Message;

/// Width of one studio card in the grid
const CARD_WIDTH: f32 = 300.0;
const COVER_HEIGHT: f32 = 200.0;

pub const BADGES: [&str; 3] = ["Studio", "TP.HCM", "Không ngoại cảnh"];

/// Everything one card displays
#[derive(Debug, Clone, PartialEq)]
pub struct CardModel {
    pub studio_id: String,
    pub cover: Option<ImageSource>,
    pub cover_alt: String,
    pub picked: bool,
    pub heart_label: &'static str,
    pub title: String,
    pub meta_line: String,
    pub price: String,
    pub hotline: String,
    pub album_label: String,
    pub portfolio: Option<Link>,
}

impl CardModel {
    pub fn build(catalog: &Catalog, studio: &Studio, picked: bool) -> Self {
        let cover = studio
            .images
            .first()
            .map(|reference| catalog.image_source(reference));

        CardModel {
            studio_id: studio.id.clone(),
            cover,
            cover_alt: format!("{} — ảnh studio (portfolio)", studio.name),
            picked,
            heart_label: if picked { "Bỏ chọn" } else { "Chọn studio này" },
            title: studio.name.clone(),
            meta_line: format!("{} • {}", format_districts(studio), studio.address),
            price: studio
                .price
                .clone()
                .filter(|price| !price.is_empty())
                .unwrap_or_else(|| "Liên hệ".to_string()),
            hotline: studio
                .phone
                .first()
                .cloned()
                .unwrap_or_else(|| "—".to_string()),
            album_label: format!("Xem album ({})", studio.image_count()),
            portfolio: link("Portfolio", studio.portfolio_url.as_deref()),
        }
    }
}

/// Cards for the filtered studios, in order
pub fn build_cards(catalog: &Catalog, studios: &[&Studio], shortlist: &Shortlist) -> Vec<CardModel> {
    studios
        .iter()
        .map(|studio| CardModel::build(catalog, studio, shortlist.contains(&studio.id)))
        .collect()
}

/// The scrollable card grid
pub fn view_grid<'a>(cards: Vec<CardModel>) -> Element<'a, Message> {
    if cards.is_empty() {
        return container(text("Không có studio phù hợp.").size(16))
            .width(Length::Fill)
            .padding(40)
            .center_x(Length::Fill)
            .into();
    }

    let elements: Vec<Element<'a, Message>> = cards.into_iter().map(view_card).collect();

    scrollable(
        container(
            Wrap::with_elements(elements)
                .spacing(Pixels(16.0))
                .line_spacing(Pixels(16.0)),
        )
        .padding(20)
        .width(Length::Fill),
    )
    .height(Length::Fill)
    .into()
}

fn view_card<'a>(card: CardModel) -> Element<'a, Message> {
    let picked = card.picked;
    let heart = button(text("♥").size(18))
        .on_press(Message::ToggleShortlist(card.studio_id.clone()))
        .style(move |theme, status| {
            if picked {
                button::danger(theme, status)
            } else {
                button::secondary(theme, status)
            }
        })
        .padding([4, 10]);

    let badges = BADGES.iter().fold(row![].spacing(6), |badges, badge| {
        badges.push(
            container(text(*badge).size(11))
                .padding([2, 8])
                .style(container::rounded_box),
        )
    });

    let cover = tooltip(
        image_view(card.cover.as_ref(), CARD_WIDTH, COVER_HEIGHT),
        text(card.cover_alt).size(12),
        tooltip::Position::Bottom,
    )
    .style(container::rounded_box);

    let heart = tooltip(
        heart,
        text(card.heart_label).size(12),
        tooltip::Position::Left,
    )
    .style(container::rounded_box);

    let media = column![
        cover,
        row![badges, Space::with_width(Length::Fill), heart].align_y(Alignment::Center),
    ]
    .spacing(8);

    let facts = row![
        fact("Giá", card.price),
        fact("Hotline", card.hotline),
    ]
    .spacing(24);

    let mut actions = row![button(text(card.album_label))
        .on_press(Message::OpenAlbum(card.studio_id.clone()))
        .style(button::primary)]
    .spacing(10);

    if let Some(portfolio) = card.portfolio {
        actions = actions.push(
            button(text(portfolio.label))
                .on_press(Message::CopyLink(portfolio.url))
                .style(button::secondary),
        );
    }

    let body = column![
        text(card.title).size(20),
        text(card.meta_line).size(13),
        facts,
        actions,
    ]
    .spacing(10);

    container(column![media, body].spacing(12))
        .width(CARD_WIDTH + 24.0)
        .padding(12)
        .style(container::rounded_box)
        .into()
}

fn fact<'a>(label: &'static str, value: String) -> Element<'a, Message> {
    column![text(label).size(11), text(value).size(14)]
        .spacing(2)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_studio() -> Studio {
        let mut studio = Studio::new("aurora", "Aurora Bridal");
        studio.address = "12 Nguyễn Đình Chiểu".to_string();
        studio.districts = vec!["Quận 1".to_string(), "Quận 3".to_string()];
        studio.phone = vec!["0901 234 567".to_string(), "028 3333 4444".to_string()];
        studio.price = Some("từ 8.000.000đ".to_string());
        studio.portfolio_url = Some("https://example.com/aurora".to_string());
        studio.images = vec!["https://img.example.com/1.jpg".to_string(), "https://img.example.com/2.jpg".to_string()];
        studio
    }

    #[test]
    fn test_card_projection() {
        let catalog = Catalog::default();
        let card = CardModel::build(&catalog, &full_studio(), true);

        assert_eq!(card.title, "Aurora Bridal");
        assert_eq!(card.meta_line, "Quận 1 • Quận 3 • 12 Nguyễn Đình Chiểu");
        assert_eq!(card.price, "từ 8.000.000đ");
        assert_eq!(card.hotline, "0901 234 567");
        assert_eq!(card.album_label, "Xem album (2)");
        assert_eq!(card.cover_alt, "Aurora Bridal — ảnh studio (portfolio)");
        assert_eq!(
            card.cover,
            Some(ImageSource::Remote("https://img.example.com/1.jpg".to_string()))
        );
        assert!(card.picked);
        assert_eq!(card.heart_label, "Bỏ chọn");
        assert_eq!(card.portfolio.unwrap().url, "https://example.com/aurora");
    }

    #[test]
    fn test_card_fallbacks() {
        let catalog = Catalog::default();
        let mut studio = Studio::new("bare", "Bare Studio");
        studio.portfolio_url = Some("portfolio coming soon".to_string());
        let card = CardModel::build(&catalog, &studio, false);

        assert_eq!(card.meta_line, "TP.HCM • ");
        assert_eq!(card.price, "Liên hệ");
        assert_eq!(card.hotline, "—");
        assert_eq!(card.album_label, "Xem album (0)");
        assert_eq!(card.cover, None);
        assert_eq!(card.heart_label, "Chọn studio này");
        assert_eq!(card.portfolio, None);
    }

    #[test]
    fn test_build_cards_marks_shortlisted() {
        let catalog = Catalog::default();
        let first = full_studio();
        let second = Studio::new("lotus", "Lotus");
        let shortlist: Shortlist = ["lotus"].into_iter().collect();

        let cards = build_cards(&catalog, &[&first, &second], &shortlist);
        assert_eq!(cards.iter().map(|c| c.picked).collect::<Vec<_>>(), vec![false, true]);
        assert_eq!(cards[0].studio_id, "aurora");
    }
}
