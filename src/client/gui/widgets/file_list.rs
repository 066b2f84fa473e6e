// Lista delle voci della cartella corrente
use std::path::Path;

use iced::widget::{Button, Column, Row, Text};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::models::file_browser::BrowserEntry;
use crate::client::models::messages::Message;

const SELECTED_COLOR: Color = Color::from_rgb(0.0, 0.7, 0.3);

/// True when `entry` is the file the current selection was read from.
pub fn is_selected(entry: &BrowserEntry, selected: Option<&Path>) -> bool {
    !entry.is_dir && selected == Some(entry.path.as_path())
}

fn entry_row<'a>(entry: &'a BrowserEntry, selected: Option<&Path>) -> Element<'a, Message> {
    let (icon, on_press) = if entry.is_dir {
        ("📁", Message::BrowseTo(entry.path.clone()))
    } else {
        ("📄", Message::FilePicked(entry.path.clone()))
    };
    let label = if is_selected(entry, selected) {
        Text::new(&entry.name).size(14).style(SELECTED_COLOR)
    } else {
        Text::new(&entry.name).size(14)
    };

    Button::new(
        Row::new()
            .spacing(8)
            .align_items(Alignment::Center)
            .push(Text::new(icon).font(Font::with_name("Segoe UI Emoji")).size(14))
            .push(label),
    )
    .style(iced::theme::Button::Text)
    .on_press(on_press)
    .width(Length::Fill)
    .padding([4, 8])
    .into()
}

pub fn view<'a>(entries: &'a [BrowserEntry], selected: Option<&Path>) -> Element<'a, Message> {
    let items: Vec<Element<'a, Message>> = entries
        .iter()
        .map(|entry| entry_row(entry, selected))
        .collect();
    Column::with_children(items).spacing(2).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn file(dir: &str, name: &str) -> BrowserEntry {
        BrowserEntry {
            name: name.to_string(),
            path: PathBuf::from(dir).join(name),
            is_dir: false,
        }
    }

    #[test]
    fn same_name_in_another_folder_is_not_selected() {
        let picked = PathBuf::from("/docs/a/rapport.pdf");
        assert!(is_selected(&file("/docs/a", "rapport.pdf"), Some(&picked)));
        assert!(!is_selected(&file("/docs/b", "rapport.pdf"), Some(&picked)));
        assert!(!is_selected(&file("/docs/a", "rapport.pdf"), None));
    }

    #[test]
    fn directories_are_never_selected() {
        let dir = BrowserEntry {
            name: "a".to_string(),
            path: PathBuf::from("/docs/a"),
            is_dir: true,
        };
        assert!(!is_selected(&dir, Some(Path::new("/docs/a"))));
    }
}
