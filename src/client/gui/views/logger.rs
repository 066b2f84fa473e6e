use iced::widget::{container, Container, Row, Space, Text};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::models::messages::Message;

const BAR_TEXT: Color = Color::WHITE;
const EMOJI_FONT: Font = Font::with_name("Segoe UI Emoji");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Success,
    Error,
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogMessage {
    pub level: LogLevel,
    pub message: String,
}

impl LogMessage {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self.level {
            LogLevel::Success => "✅",
            LogLevel::Error => "❌",
            LogLevel::Info => "ℹ️",
            LogLevel::Warning => "⚠️",
        }
    }

    pub fn color(&self) -> Color {
        match self.level {
            LogLevel::Success => Color::from_rgb(0.16, 0.55, 0.34),
            LogLevel::Error => Color::from_rgb(0.75, 0.22, 0.22),
            LogLevel::Info => Color::from_rgb(0.22, 0.42, 0.72),
            LogLevel::Warning => Color::from_rgb(0.78, 0.55, 0.12),
        }
    }
}

fn log_bar_appearance(tint: Color) -> impl Fn(&iced::Theme) -> container::Appearance {
    move |_: &iced::Theme| container::Appearance {
        background: Some(iced::Background::Color(tint)),
        text_color: Some(BAR_TEXT),
        border: iced::Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Status bar showing the newest log entry only.
pub fn logger_view(messages: &[LogMessage]) -> Element<'_, Message> {
    let Some(latest) = messages.last() else {
        return Space::new(Length::Fill, Length::Fixed(0.0)).into();
    };

    let line = Row::new()
        .spacing(10)
        .align_items(Alignment::Center)
        .push(Text::new(latest.emoji()).font(EMOJI_FONT).size(16))
        .push(Text::new(&latest.message).size(14).style(BAR_TEXT));

    Container::new(line)
        .width(Length::Fill)
        .padding([8, 14])
        .style(iced::theme::Container::Custom(Box::new(log_bar_appearance(
            latest.color(),
        ))))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_level_has_its_own_tint() {
        let levels = [LogLevel::Success, LogLevel::Error, LogLevel::Info, LogLevel::Warning];
        let tints: Vec<Color> = levels.iter().map(|l| LogMessage::new(*l, "x").color()).collect();
        for (i, a) in tints.iter().enumerate() {
            for b in &tints[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn log_bar_uses_the_entry_tint() {
        let msg = LogMessage::new(LogLevel::Error, "Lecture impossible");
        let appearance = log_bar_appearance(msg.color())(&iced::Theme::Dark);
        assert_eq!(
            appearance.background,
            Some(iced::Background::Color(Color::from_rgb(0.75, 0.22, 0.22)))
        );
        assert_eq!(msg.emoji(), "❌");
    }
}
