use iced::widget::{center, column, container, image, mouse_area, stack, text};
use iced::{Border, Color, ContentFit, Element, Length, Theme};

use crate::upload::ImageSelector;

const ACCENT: Color = Color {
    r: 0.145,
    g: 0.827,
    b: 0.4,
    a: 1.0,
};

/// The clickable drop area, showing either the hint text or the preview
///
/// Files are dropped on the window, not on this widget, so it only reflects
/// the selector's drag flag.
pub fn view<'a, Message: Clone + 'a>(
    selector: &'a ImageSelector,
    on_pick: Message,
) -> Element<'a, Message> {
    let content: Element<'a, Message> = match selector.preview() {
        Some(preview) => stack![
            center(
                image(preview.handle.clone())
                    .content_fit(ContentFit::Contain)
                    .width(Length::Fill)
                    .height(Length::Fill)
            ),
            container(text("Alterar imagem").size(14))
                .padding(8)
                .align_right(Length::Fill)
                .align_bottom(Length::Fill),
        ]
        .into(),
        None if selector.is_reading() => center(text("Carregando imagem...").size(16)).into(),
        None => center(
            column![
                text("🖼").size(40),
                text("Arraste e solte sua imagem aqui").size(18),
                text("ou clique para selecionar").size(14),
                text("PNG, JPG ou GIF (máx. 10MB)").size(12),
            ]
            .spacing(6)
            .align_x(iced::Alignment::Center),
        )
        .into(),
    };

    let height = if selector.is_previewing() { 256.0 } else { 176.0 };
    let dragging = selector.is_dragging();

    let zone = container(content)
        .padding(16)
        .width(Length::Fill)
        .height(height)
        .style(move |theme: &Theme| zone_style(theme, dragging));

    mouse_area(zone).on_press(on_pick).into()
}

fn zone_style(theme: &Theme, dragging: bool) -> container::Style {
    let palette = theme.extended_palette();

    let (border_color, background) = if dragging {
        (ACCENT, Some(Color { a: 0.1, ..ACCENT }.into()))
    } else {
        (palette.background.strong.color, None)
    };

    container::Style {
        background,
        border: Border {
            color: border_color,
            width: 2.0,
            radius: 12.0.into(),
        },
        ..Default::default()
    }
}
