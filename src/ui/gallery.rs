/// Gallery screen: artwork, caption card and prev/next buttons
use iced::font::Weight;
use iced::widget::{button, canvas, column, container, image, row, text, Space};
use iced::{Alignment, Color, Element, Font, Length};

use super::artwork::{ArtworkLibrary, Placeholder};
use crate::state::gallery::{Gallery, GalleryState, Navigation};
use crate::Message;

const ARTWORK_HEIGHT: f32 = 300.0;

pub fn view<'a>(
    gallery: &'a Gallery,
    state: GalleryState,
    artwork: &'a ArtworkLibrary,
) -> Element<'a, Message> {
    let item = gallery.current(state);

    let picture: Element<Message> = match artwork.handle(&item.image) {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => canvas(Placeholder::for_image(&item.image))
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
    };

    let picture = container(picture)
        .padding(8)
        .width(Length::Fill)
        .height(Length::Fixed(ARTWORK_HEIGHT))
        .style(container::rounded_box);

    let bold = Font {
        weight: Weight::Bold,
        ..Font::DEFAULT
    };

    let caption = container(
        column![
            text(format!("Titre : {}", item.title)).size(30).font(bold),
            text(format!("Artiste : {}", item.artist)).size(24),
            text(format!("Année : {}", item.year)).size(20),
        ]
        .align_x(Alignment::Center)
        .width(Length::Fill),
    )
    .padding(16)
    .width(Length::Fill)
    .style(container::rounded_box);

    let (position, count) = state.position();

    let buttons = row![
        nav_button("← Précédent", Navigation::Previous),
        nav_button("Suivant →", Navigation::Next),
    ]
    .spacing(40);

    let content = column![
        Space::with_height(40),
        picture,
        caption,
        text(format!("{} / {}", position, count)).size(14),
        buttons,
    ]
    .spacing(16)
    .padding(16)
    .max_width(560)
    .align_x(Alignment::Center);

    container(content).center_x(Length::Fill).into()
}

fn nav_button(label: &str, navigation: Navigation) -> Element<'_, Message> {
    button(text(label).color(Color::WHITE))
        .padding([8, 16])
        .style(button::success)
        .on_press(Message::Navigate(navigation))
        .into()
}
