//! Meme editor screen rendering
//!
//! Draws the page model: both caption inputs, the generate button, the error
//! line, the rendered meme card and the key hints with data freshness.

use chrono::Duration;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::page::{
    BorderStyle, Focus, OutputContainer, OutputElement, OverlayAnchor, OverlayStyle, TextInput,
};

/// Border color for a caption input
fn input_border_color(border: BorderStyle, focused: bool) -> Color {
    match (border, focused) {
        (BorderStyle::Error, _) => Color::Red,
        (BorderStyle::Neutral, true) => Color::Cyan,
        (BorderStyle::Neutral, false) => Color::Gray,
    }
}

/// Text style for a caption overlay
fn overlay_text_style(style: &OverlayStyle) -> Style {
    let mut text_style = Style::default().fg(Color::White);
    if style.bold {
        text_style = text_style.add_modifier(Modifier::BOLD);
    }
    if style.outlined {
        text_style = text_style.bg(Color::Black);
    }
    text_style
}

/// Formats how long ago the meme list was fetched
fn format_age(age: Duration) -> String {
    let minutes = age.num_minutes();
    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{}m ago", minutes)
    } else {
        format!("{}h {}m ago", minutes / 60, minutes % 60)
    }
}

/// Largest rect inside `area` matching the image aspect ratio
///
/// Terminal cells are roughly twice as tall as wide, so widths are doubled.
fn image_rect(area: Rect, width: u32, height: u32) -> Rect {
    if width == 0 || height == 0 || area.width == 0 || area.height == 0 {
        return area;
    }

    let ratio = (width as f64 * 2.0) / height as f64;
    let mut card_height = area.height;
    let mut card_width = (card_height as f64 * ratio).round() as u16;
    if card_width > area.width {
        card_width = area.width;
        card_height = ((card_width as f64 / ratio).round() as u16).clamp(1, area.height);
    }
    // Leave room for the border and both captions
    card_width = card_width.max(area.width.min(24));
    card_height = card_height.max(area.height.min(6));

    Rect {
        x: area.x + (area.width - card_width) / 2,
        y: area.y,
        width: card_width,
        height: card_height,
    }
}

/// Renders the meme editor screen
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Top caption
            Constraint::Length(3), // Bottom caption
            Constraint::Length(1), // Button
            Constraint::Length(1), // Error text
            Constraint::Min(5),    // Output
            Constraint::Length(1), // Help
        ])
        .split(area);

    let focus = app.page.focus;
    render_input(
        frame,
        chunks[0],
        " Top text ",
        &app.page.top_input,
        focus == Focus::TopInput,
    );
    render_input(
        frame,
        chunks[1],
        " Bottom text ",
        &app.page.bottom_input,
        focus == Focus::BottomInput,
    );
    render_button(frame, chunks[2], focus == Focus::SubmitButton);
    render_error(frame, chunks[3], &app.page.error_text);
    render_output(frame, chunks[4], &app.page.output);
    render_help(frame, chunks[5], app);
}

fn render_input(frame: &mut Frame, area: Rect, title: &str, input: &TextInput, focused: bool) {
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(input_border_color(input.border, focused)));

    let paragraph = Paragraph::new(input.value.as_str()).block(block);
    frame.render_widget(paragraph, area);

    if focused {
        let max_x = area.x + area.width.saturating_sub(2);
        let x = (area.x + 1 + input.value.chars().count() as u16).min(max_x);
        frame.set_cursor_position((x, area.y + 1));
    }
}

fn render_button(frame: &mut Frame, area: Rect, focused: bool) {
    let style = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let button = Paragraph::new(Span::styled("[ Generate ]", style)).alignment(Alignment::Center);
    frame.render_widget(button, area);
}

fn render_error(frame: &mut Frame, area: Rect, error_text: &str) {
    if error_text.is_empty() {
        return;
    }
    let error = Paragraph::new(error_text)
        .style(Style::default().fg(Color::Red))
        .alignment(Alignment::Center);
    frame.render_widget(error, area);
}

fn render_output(frame: &mut Frame, area: Rect, output: &OutputContainer) {
    let Some(OutputElement::Image {
        url,
        alt,
        width,
        height,
    }) = output.image()
    else {
        let placeholder = Paragraph::new("Your meme will appear here")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        frame.render_widget(placeholder, area);
        return;
    };

    let card = image_rect(area, *width, *height);
    let border_color = if output.styled { Color::Yellow } else { Color::Gray };
    let block = Block::default()
        .title(format!(" {} ", alt))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(2),
        ])
        .split(inner);

    let image_info = vec![
        Line::from(Span::styled(url.as_str(), Style::default().fg(Color::Blue))),
        Line::from(Span::styled(
            format!("{}x{}", width, height),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(
        Paragraph::new(image_info)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        rows[1],
    );

    // Overlays are drawn after the image, in container order
    for child in &output.children {
        if let OutputElement::Overlay {
            anchor,
            text,
            style,
        } = child
        {
            let slot = match anchor {
                OverlayAnchor::Top => rows[0],
                OverlayAnchor::Bottom => rows[2],
            };
            let alignment = if style.centered {
                Alignment::Center
            } else {
                Alignment::Left
            };
            let overlay = Paragraph::new(Span::styled(text.as_str(), overlay_text_style(style)))
                .alignment(alignment)
                .wrap(Wrap { trim: true });
            frame.render_widget(overlay, slot);
        }
    }
}

/// Renders the key hints with data freshness
fn render_help(frame: &mut Frame, area: Rect, app: &App) {
    let mut help_spans = vec![
        Span::styled("Tab", Style::default().fg(Color::Yellow)),
        Span::raw(" Next field  "),
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::raw(" Generate  "),
        Span::styled("F1", Style::default().fg(Color::Yellow)),
        Span::raw(" Help  "),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::raw(" Quit"),
    ];

    if app.in_flight > 0 {
        help_spans.push(Span::raw("  |  "));
        help_spans.push(Span::styled(
            "Fetching memes...",
            Style::default().fg(Color::Cyan),
        ));
    } else if let Some(age) = app.cache_age() {
        help_spans.push(Span::raw("  |  "));
        help_spans.push(Span::styled(
            format!("Memes fetched {}", format_age(age)),
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(help_spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MemeRecord;
    use crate::render::render_meme;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &App) -> String {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    fn record() -> MemeRecord {
        MemeRecord {
            id: "1".to_string(),
            name: "Distracted Boyfriend".to_string(),
            url: "https://x/1.png".to_string(),
            width: 1200,
            height: 800,
            box_count: 3,
            captions: 0,
        }
    }

    #[test]
    fn test_empty_editor_renders_inputs_and_placeholder() {
        let app = App::new();
        let content = draw(&app);

        assert!(content.contains("Top text"));
        assert!(content.contains("Bottom text"));
        assert!(content.contains("Generate"));
        assert!(content.contains("Your meme will appear here"));
    }

    #[test]
    fn test_typed_text_is_shown() {
        let mut app = App::new();
        app.page.top_input.value = "hello there".to_string();
        let content = draw(&app);

        assert!(content.contains("hello there"));
    }

    #[test]
    fn test_error_text_is_shown() {
        let mut app = App::new();
        app.page.error_text = "Please enter text in both input fields!".to_string();
        let content = draw(&app);

        assert!(content.contains("Please enter text in both input fields!"));
    }

    #[test]
    fn test_rendered_meme_shows_captions_and_url() {
        let mut app = App::new();
        render_meme(&mut app.page, &record(), "HELLO", "WORLD");
        let content = draw(&app);

        assert!(content.contains("Distracted Boyfriend"));
        assert!(content.contains("https://x/1.png"));
        assert!(content.contains("HELLO"));
        assert!(content.contains("WORLD"));
        assert!(!content.contains("Your meme will appear here"));
    }

    #[test]
    fn test_help_text_is_rendered() {
        let app = App::new();
        let content = draw(&app);

        assert!(content.contains("Generate") && content.contains("Quit"));
    }

    #[test]
    fn test_fetching_indicator() {
        let mut app = App::new();
        app.in_flight = 1;
        let content = draw(&app);

        assert!(content.contains("Fetching memes..."));
    }

    #[test]
    fn test_input_border_colors() {
        assert_eq!(input_border_color(BorderStyle::Error, false), Color::Red);
        assert_eq!(input_border_color(BorderStyle::Error, true), Color::Red);
        assert_eq!(input_border_color(BorderStyle::Neutral, true), Color::Cyan);
        assert_eq!(input_border_color(BorderStyle::Neutral, false), Color::Gray);
    }

    #[test]
    fn test_format_age() {
        assert_eq!(format_age(Duration::seconds(20)), "just now");
        assert_eq!(format_age(Duration::minutes(5)), "5m ago");
        assert_eq!(format_age(Duration::minutes(125)), "2h 5m ago");
    }

    #[test]
    fn test_image_rect_fits_inside_area() {
        let area = Rect::new(0, 0, 80, 20);

        let wide = image_rect(area, 2000, 500);
        assert!(wide.width <= area.width && wide.height <= area.height);
        assert_eq!(wide.width, 80);

        let tall = image_rect(area, 500, 2000);
        assert!(tall.width <= area.width && tall.height <= area.height);
        assert_eq!(tall.height, 20);
        assert!(tall.x > 0, "narrow card should be centered");
    }

    #[test]
    fn test_image_rect_zero_dimensions_uses_area() {
        let area = Rect::new(2, 3, 40, 10);
        assert_eq!(image_rect(area, 0, 100), area);
    }
}
