/// Tip calculator screen
use iced::widget::{column, container, horizontal_space, row, scrollable, text, text_input, toggler, Space};
use iced::{Alignment, Element, Length};

use crate::state::tip::TipRequest;
use crate::Message;

pub fn view<'a>(request: &'a TipRequest, tip: &'a str) -> Element<'a, Message> {
    let content = column![
        text("Calculate Tip").size(20),
        number_field("Bill Amount", &request.amount_text, Message::AmountChanged),
        number_field(
            "Tip Percentage",
            &request.tip_percent_text,
            Message::TipPercentChanged
        ),
        row![
            text("Round up tip?"),
            horizontal_space(),
            toggler(request.round_up).on_toggle(Message::RoundUpToggled),
        ]
        .align_y(Alignment::Center)
        .width(Length::Fill),
        text(format!("Tip Amount: {}", tip)).size(36),
        Space::with_height(150),
    ]
    .spacing(32)
    .padding([40, 40])
    .max_width(480);

    scrollable(container(content).center_x(Length::Fill)).into()
}

/// Labelled single-line numeric input
fn number_field<'a>(
    label: &'a str,
    value: &'a str,
    on_input: fn(String) -> Message,
) -> Element<'a, Message> {
    column![
        text(label).size(14),
        text_input("0", value).on_input(on_input).padding(10),
    ]
    .spacing(6)
    .into()
}
