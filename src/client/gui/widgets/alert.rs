// Widget di alert bloccante: sostituisce il form finché non viene chiuso
use iced::widget::{Button, Column, Container, Row, Text};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::models::messages::Message;

const ALERT_BG: Color = Color::from_rgb(0.18, 0.19, 0.36);
const WARNING_COLOR: Color = Color::from_rgb(1.0, 0.8, 0.0);

fn alert_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(ALERT_BG)),
        text_color: Some(Color::WHITE),
        border: iced::Border {
            width: 2.0,
            color: WARNING_COLOR,
            radius: 12.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 4.0),
            blur_radius: 12.0,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
        },
    }
}

pub fn view<'a>(msg: &'a str, ok_label: &'a str) -> Element<'a, Message> {
    let body = Column::new()
        .spacing(20)
        .padding(24)
        .align_items(Alignment::Center)
        .push(
            Row::new()
                .spacing(12)
                .align_items(Alignment::Center)
                .push(Text::new("⚠️").font(Font::with_name("Segoe UI Emoji")).size(24))
                .push(Text::new(msg).size(18).style(Color::WHITE)),
        )
        .push(
            Button::new(Text::new(ok_label).size(14))
                .style(iced::theme::Button::Primary)
                .on_press(Message::DismissAlert)
                .padding([8, 24]),
        );

    Container::new(
        Container::new(body).style(iced::theme::Container::Custom(Box::new(alert_appearance))),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x()
    .center_y()
    .into()
}
