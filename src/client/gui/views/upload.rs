use iced::widget::{Button, Column, Container, Row, Space, Text, TextInput};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::gui::views::logger::logger_view;
use crate::client::gui::widgets::{alert, file_list};
use crate::client::models::app_state::UploadState;
use crate::client::models::file_browser::FileBrowser;
use crate::client::models::messages::Message;

const BG_MAIN: Color = Color::from_rgb(0.06, 0.07, 0.18); // Deep navy
const CARD_BG: Color = Color::from_rgb(0.18, 0.19, 0.36);
const INPUT_BG: Color = Color::from_rgb(0.12, 0.13, 0.26);
const ACCENT_COLOR: Color = Color::from_rgb(0.0, 0.7, 0.3);
const TEXT_PRIMARY: Color = Color::WHITE;
const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7);

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

const EMOJI_FONT: Font = Font::with_name("Segoe UI Emoji");

fn bg_main_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(BG_MAIN)),
        text_color: Some(TEXT_PRIMARY),
        ..Default::default()
    }
}

fn card_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(CARD_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 16.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 4.0),
            blur_radius: 12.0,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
        },
    }
}

fn list_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(INPUT_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 1.0,
            color: Color::from_rgb(0.3, 0.3, 0.4),
            radius: 12.0.into(),
        },
        ..Default::default()
    }
}

fn card<'a>(content: impl Into<Element<'a, Message>>) -> Container<'a, Message> {
    Container::new(content)
        .width(Length::Fill)
        .padding(20)
        .style(iced::theme::Container::Custom(Box::new(card_appearance)))
}

fn picker_section<'a>(state: &'a UploadState, browser: &'a FileBrowser) -> Element<'a, Message> {
    let locale = state.locale;

    let mut parent_btn = Button::new(
        Row::new()
            .spacing(6)
            .align_items(Alignment::Center)
            .push(Text::new("⬆️").font(EMOJI_FONT).size(14))
            .push(Text::new(locale.parent_dir()).size(14)),
    )
    .style(iced::theme::Button::Secondary)
    .padding([8, 12]);
    if browser.has_parent() {
        parent_btn = parent_btn.on_press(Message::BrowseParent);
    }

    let path_row = Row::new()
        .spacing(8)
        .align_items(Alignment::Center)
        .push(
            TextInput::new(locale.path_placeholder(), &browser.path_input)
                .on_input(Message::PathInputChanged)
                .on_submit(Message::PathSubmitted)
                .padding(10)
                .size(14)
                .width(Length::Fill),
        )
        .push(parent_btn);

    let selected_path = state.selected_file.as_ref().and_then(|f| f.source.as_deref());
    let listing = Container::new(
        iced::widget::scrollable(file_list::view(&browser.entries, selected_path))
            .width(Length::Fill)
            .height(Length::Fixed(220.0)),
    )
    .padding(8)
    .style(iced::theme::Container::Custom(Box::new(list_appearance)));

    let selection: Element<Message> = match &state.selected_file {
        Some(file) => Text::new(locale.selected_file(&file.file_name, file.len()))
            .size(14)
            .style(ACCENT_COLOR)
            .into(),
        None => Text::new(locale.no_selection()).size(14).style(TEXT_SECONDARY).into(),
    };

    card(
        Column::new()
            .spacing(12)
            .push(Text::new(locale.pick_file_label()).font(BOLD_FONT).size(18))
            .push(path_row)
            .push(listing)
            .push(selection),
    )
    .into()
}

fn action_section(state: &UploadState) -> Element<'_, Message> {
    let locale = state.locale;

    let generate_btn = Button::new(
        Text::new(locale.generate_button())
            .font(BOLD_FONT)
            .size(16)
            .style(TEXT_PRIMARY),
    )
    .style(iced::theme::Button::Primary)
    .on_press(Message::GenerateSummary)
    .padding([12, 24]);

    let mut row = Row::new()
        .spacing(16)
        .align_items(Alignment::Center)
        .push(generate_btn);

    if state.show_busy_indicator() {
        row = row
            .push(Text::new("⏳").font(EMOJI_FONT).size(18))
            .push(Text::new(locale.busy()).size(14).style(TEXT_SECONDARY));
    }

    Container::new(row).width(Length::Fill).center_x().into()
}

fn summary_section(state: &UploadState) -> Element<'_, Message> {
    match state.summary_block() {
        Some(summary) => card(
            Column::new()
                .spacing(10)
                .push(
                    Text::new(state.locale.summary_heading())
                        .font(BOLD_FONT)
                        .size(20),
                )
                .push(Text::new(summary).size(15)),
        )
        .into(),
        None => Space::new(Length::Fill, Length::Fixed(0.0)).into(),
    }
}

pub fn view<'a>(state: &'a UploadState, browser: &'a FileBrowser) -> Element<'a, Message> {
    let content: Element<Message> = if let Some(msg) = &state.alert {
        alert::view(msg, state.locale.ok())
    } else {
        let title = Container::new(
            Text::new(state.locale.title())
                .font(BOLD_FONT)
                .size(30)
                .style(TEXT_PRIMARY),
        )
        .width(Length::Fill)
        .center_x()
        .padding([20, 0, 8, 0]);

        let body = Column::new()
            .spacing(20)
            .padding([0, 24])
            .push(picker_section(state, browser))
            .push(action_section(state))
            .push(summary_section(state));

        Column::new()
            .push(title)
            .push(iced::widget::scrollable(body).width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    };

    let logger_bar: Element<Message> = if !state.logger.is_empty() {
        Container::new(logger_view(&state.logger))
            .width(Length::Fill)
            .padding([8, 12, 0, 12])
            .into()
    } else {
        Space::new(Length::Fill, Length::Fixed(0.0)).into()
    };

    let footer = Container::new(Text::new(state.locale.footer()).size(12).style(TEXT_SECONDARY))
        .width(Length::Fill)
        .center_x()
        .padding(12);

    Container::new(
        Column::new()
            .push(logger_bar)
            .push(content)
            .push(footer)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(bg_main_appearance)))
    .into()
}
