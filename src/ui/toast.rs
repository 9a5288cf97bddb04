/// Transient notifications
/// Toasts stack in the bottom-right corner and expire on a timer the app schedules
use iced::widget::{column, container, mouse_area, text, Column};
use iced::{Border, Color, Element, Length, Theme};

/// Severity decides the toast colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub level: Level,
    pub message: String,
}

/// Toasts currently on screen, oldest first
#[derive(Debug, Default)]
pub struct Toasts {
    items: Vec<Toast>,
    next_id: u64,
}

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a toast and return its id for later dismissal
    pub fn push(&mut self, level: Level, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast {
            id,
            level,
            message: message.into(),
        });
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(Level::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(Level::Error, message)
    }

    /// Remove a toast; unknown ids are ignored
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    /// Overlay layer with every toast; clicking one dismisses it
    pub fn view<'a, Message: Clone + 'a>(
        &'a self,
        on_dismiss: fn(u64) -> Message,
    ) -> Element<'a, Message> {
        let cards: Column<'a, Message> = column(self.iter().map(|toast| {
            let card = container(text(&toast.message).size(15))
                .padding(14)
                .width(340.0)
                .style(move |_theme: &Theme| card_style(toast.level));

            mouse_area(card).on_press(on_dismiss(toast.id)).into()
        }))
        .spacing(10);

        container(cards)
            .padding(24)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_right(Length::Fill)
            .align_bottom(Length::Fill)
            .into()
    }
}

fn card_style(level: Level) -> container::Style {
    let accent = match level {
        Level::Success => Color::from_rgb8(0x25, 0xD3, 0x66),
        Level::Error => Color::from_rgb8(0xE5, 0x48, 0x4D),
    };

    container::Style {
        text_color: Some(Color::WHITE),
        background: Some(Color::from_rgb8(0x1F, 0x29, 0x37).into()),
        border: Border {
            color: accent,
            width: 2.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}
