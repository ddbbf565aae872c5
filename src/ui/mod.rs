/// View layer
///
/// Each screen region is built from a plain model struct (testable without a
/// window) and a `view` function that turns it into iced widgets.
use iced::widget::{center, container, image, mouse_area, opaque, stack, text};
use iced::{Color, ContentFit, Element, Length};

use crate::state::data::ImageSource;

pub mod album;
pub mod grid;
pub mod links;
pub mod toolbar;

/// Picture for an image source, or a neutral placeholder.
///
/// Remote images are never downloaded.
pub fn image_view<'a, Message: 'a>(
    source: Option<&ImageSource>,
    width: impl Into<Length>,
    height: impl Into<Length>,
) -> Element<'a, Message> {
    let width = width.into();
    let height = height.into();

    match source {
        Some(ImageSource::Local(path)) => image::<image::Handle>(image::Handle::from_path(path))
            .width(width)
            .height(height)
            .content_fit(ContentFit::Cover)
            .into(),
        Some(ImageSource::Remote(_)) => placeholder("Ảnh trực tuyến", width, height),
        None => placeholder("Chưa có ảnh", width, height),
    }
}

fn placeholder<'a, Message: 'a>(label: &'a str, width: Length, height: Length) -> Element<'a, Message> {
    container(text(label).size(12))
        .width(width)
        .height(height)
        .center_x(width)
        .center_y(height)
        .style(container::rounded_box)
        .into()
}

/// Show `content` above `base`, dimming and blocking the base.
/// Clicking outside the content emits `on_blur`.
pub fn modal<'a, Message>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    stack![
        base.into(),
        opaque(
            mouse_area(center(opaque(content)).style(|_theme| {
                container::Style {
                    background: Some(
                        Color {
                            a: 0.8,
                            ..Color::BLACK
                        }
                        .into(),
                    ),
                    ..container::Style::default()
                }
            }))
            .on_press(on_blur)
        )
    ]
    .into()
}
