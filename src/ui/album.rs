use iced::widget::{button, column, container, row, scrollable, text, tooltip, Column, Space};
use iced::{Alignment, Element, Length};

use crate::state::album::AlbumViewer;
use crate::state::catalog::format_districts;
use crate::state::data::{ImageSource, Studio};
use crate::ui::image_view;
use crate::ui::links::{studio_links, Link};
use crate::Message;

const CRITERIA: &str = "Chỉ chụp studio (không ngoại cảnh) • TP.HCM";
const NO_CONTACT: &str = "Đang cập nhật thông tin liên hệ.";
const DEFAULT_NOTE: &str = "Ảnh demo lấy từ portfolio chính chủ.";
const NO_LINKS: &str = "Không có liên kết.";

#[derive(Debug, Clone, PartialEq)]
pub struct Thumbnail {
    pub index: usize,
    pub source: ImageSource,
    pub current: bool,
    pub label: String,
}

/// Everything the album modal displays for the open studio
#[derive(Debug, Clone, PartialEq)]
pub struct AlbumModel {
    pub studio_id: String,
    pub title: String,
    pub subtitle: String,
    pub current: Option<ImageSource>,
    pub image_alt: String,
    pub caption: String,
    pub thumbnails: Vec<Thumbnail>,
    /// (label, value) pairs; empty when the studio has no contact data
    pub contact_lines: Vec<(&'static str, String)>,
    pub note: String,
    pub links: Vec<Link>,
    pub shortlisted: bool,
}

impl AlbumModel {
    pub fn build(studio: &Studio, viewer: &AlbumViewer, shortlisted: bool) -> Self {
        let images = viewer.images();
        let count = images.len();
        let position = viewer.index() + 1;

        let (image_alt, caption) = if count == 0 {
            (String::new(), String::new())
        } else {
            (
                format!("{} — ảnh studio {}/{}", studio.name, position, count),
                format!("Ảnh {}/{} • Nguồn: portfolio chính chủ", position, count),
            )
        };

        let thumbnails = images
            .iter()
            .enumerate()
            .map(|(index, source)| Thumbnail {
                index,
                source: source.clone(),
                current: index == viewer.index(),
                label: format!("Mở ảnh {}", index + 1),
            })
            .collect();

        AlbumModel {
            studio_id: studio.id.clone(),
            title: studio.name.clone(),
            subtitle: format!(
                "{} • Studio (không ngoại cảnh) • {} ảnh",
                format_districts(studio),
                studio.image_count()
            ),
            current: viewer.current_image().cloned(),
            image_alt,
            caption,
            thumbnails,
            contact_lines: contact_lines(studio),
            note: studio
                .note
                .clone()
                .filter(|note| !note.is_empty())
                .unwrap_or_else(|| DEFAULT_NOTE.to_string()),
            links: studio_links(studio),
            shortlisted,
        }
    }
}

fn contact_lines(studio: &Studio) -> Vec<(&'static str, String)> {
    let mut lines = Vec::new();

    if !studio.address.is_empty() {
        lines.push(("Địa chỉ", studio.address.clone()));
    }
    if !studio.phone.is_empty() {
        lines.push(("Hotline", studio.phone.join(" • ")));
    }
    if let Some(email) = studio.email.as_ref().filter(|email| !email.is_empty()) {
        lines.push(("Email", email.clone()));
    }
    if let Some(price) = studio.price.as_ref().filter(|price| !price.is_empty()) {
        lines.push(("Giá", price.clone()));
    }

    lines
}

/// Modal body: header, main image with arrows, thumbnails, info panel
pub fn view_album<'a>(model: AlbumModel) -> Element<'a, Message> {
    let shortlisted = model.shortlisted;
    let shortlist_button = button(text(if shortlisted { "♥ Đã chọn" } else { "♡ Chọn studio" }))
        .on_press(Message::ToggleShortlist(model.studio_id.clone()))
        .style(move |theme, status| {
            if shortlisted {
                button::danger(theme, status)
            } else {
                button::secondary(theme, status)
            }
        });

    let header = row![
        column![text(model.title).size(26), text(model.subtitle).size(14)].spacing(4),
        Space::with_width(Length::Fill),
        shortlist_button,
        button(text("✕")).on_press(Message::CloseAlbum).style(button::text),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let stage = row![
        button(text("‹").size(28))
            .on_press(Message::NavigateAlbum(-1))
            .style(button::text),
        tooltip(
            image_view(model.current.as_ref(), Length::Fill, 480),
            text(model.image_alt).size(12),
            tooltip::Position::Bottom,
        )
        .style(container::rounded_box),
        button(text("›").size(28))
            .on_press(Message::NavigateAlbum(1))
            .style(button::text),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let thumbnails = model.thumbnails.into_iter().fold(row![].spacing(6), |strip, thumb| {
        let current = thumb.current;
        let thumb_button = button(image_view(Some(&thumb.source), 72, 54))
            .on_press(Message::SelectThumbnail(thumb.index))
            .padding(2)
            .style(move |theme, status| {
                if current {
                    button::primary(theme, status)
                } else {
                    button::secondary(theme, status)
                }
            });
        strip.push(tooltip(thumb_button, text(thumb.label).size(12), tooltip::Position::Top))
    });

    let gallery = column![
        stage,
        text(model.caption).size(13),
        scrollable(thumbnails).direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::default()
        )),
    ]
    .spacing(12)
    .width(Length::FillPortion(3));

    let info = view_info(model.contact_lines, model.note, model.links);

    container(
        column![
            header,
            row![gallery, scrollable(info).width(Length::FillPortion(2))].spacing(20),
        ]
        .spacing(16),
    )
    .width(Length::Fixed(1100.0))
    .padding(24)
    .style(container::rounded_box)
    .into()
}

fn view_info<'a>(
    contact_lines: Vec<(&'static str, String)>,
    note: String,
    links: Vec<Link>,
) -> Column<'a, Message> {
    let mut info = column![
        heading("Tiêu chí"),
        text(CRITERIA).size(14),
        heading("Thông tin"),
    ]
    .spacing(8);

    if contact_lines.is_empty() {
        info = info.push(text(NO_CONTACT).size(14));
    }
    for (label, value) in contact_lines {
        info = info.push(text(format!("{}: {}", label, value)).size(14));
    }

    info = info.push(heading("Ghi chú")).push(text(note).size(14));
    info = info.push(heading("Liên kết"));

    if links.is_empty() {
        info = info.push(text(NO_LINKS).size(14));
    }
    for link in links {
        info = info.push(
            button(text(link.label).size(14))
                .on_press(Message::CopyLink(link.url))
                .style(button::text)
                .padding(0),
        );
    }

    info
}

fn heading<'a>(label: &'static str) -> Element<'a, Message> {
    text(label).size(18).into()
}
