//! Shared UI pieces
//!
//! Popups, the flash line, the status bar, and the image placeholder used
//! by the edit screen.

use crate::types::image_label;
use crate::ui::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render a centered popup dialog
pub fn render_popup(
    frame: &mut Frame,
    title: &str,
    content: Vec<Line>,
    buttons: &[(&str, char)], // (label, key)
    theme: &Theme,
    area: Rect,
) {
    let popup_width = 56.min(area.width.saturating_sub(4));
    let popup_height = (content.len() as u16 + 6).min(area.height.saturating_sub(2));
    let popup_area = centered_rect(popup_width, popup_height, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border_focused())
        .style(theme.text());
    frame.render_widget(block, popup_area);

    let inner = Rect {
        x: popup_area.x + 2,
        y: popup_area.y + 1,
        width: popup_area.width.saturating_sub(4),
        height: popup_area.height.saturating_sub(4),
    };
    let body = Paragraph::new(content)
        .style(theme.text())
        .wrap(Wrap { trim: false });
    frame.render_widget(body, inner);

    if buttons.is_empty() {
        return;
    }

    let button_area = Rect {
        x: popup_area.x + 2,
        y: popup_area.y + popup_area.height.saturating_sub(2),
        width: popup_area.width.saturating_sub(4),
        height: 1,
    };
    let spans: Vec<Span> = buttons
        .iter()
        .enumerate()
        .flat_map(|(i, (label, key))| {
            let mut spans = vec![
                Span::styled("[", theme.text_dim()),
                Span::styled(
                    key.to_string(),
                    Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
                ),
                Span::styled("] ", theme.text_dim()),
                Span::styled(*label, theme.text()),
            ];
            if i < buttons.len() - 1 {
                spans.push(Span::raw("    "));
            }
            spans
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        button_area,
    );
}

/// Render an error popup
pub fn render_error_popup(frame: &mut Frame, title: &str, message: &str, theme: &Theme, area: Rect) {
    let content = vec![
        Line::raw(""),
        Line::styled(message, theme.error()),
        Line::raw(""),
    ];
    render_popup(frame, title, content, &[("OK", 'o')], theme, area);
}

/// Render a flash message on the bottom line
pub fn render_flash_message(frame: &mut Frame, message: &str, is_error: bool, theme: &Theme, area: Rect) {
    let style = if is_error { theme.error() } else { theme.success() };
    let prefix = if is_error { "✗ " } else { "✓ " };

    let flash_area = bottom_line(area);
    frame.render_widget(Clear, flash_area);
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(prefix, style),
            Span::styled(message, style),
        ])),
        flash_area,
    );
}

/// Render status bar at bottom
pub fn render_status_bar(frame: &mut Frame, left: &str, right: &str, theme: &Theme, area: Rect) {
    let status_area = bottom_line(area);
    frame.render_widget(Clear, status_area);

    frame.render_widget(Paragraph::new(left).style(theme.text_dim()), status_area);
    frame.render_widget(
        Paragraph::new(right)
            .style(theme.text_dim())
            .alignment(Alignment::Right),
        status_area,
    );
}

/// Framed stand-in for an image: terminals cannot show the picture itself
pub fn render_image(frame: &mut Frame, uri: &str, theme: &Theme, area: Rect) {
    let block = Block::default()
        .title(" Image ")
        .title_style(theme.text_dim())
        .borders(Borders::ALL)
        .border_style(theme.border())
        .style(theme.block_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let content = vec![
        Line::styled(format!("🖼  {}", image_label(uri)), theme.text()),
        Line::styled(uri, theme.text_dim()),
    ];
    frame.render_widget(
        Paragraph::new(content)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner,
    );
}

fn bottom_line(area: Rect) -> Rect {
    Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1.min(area.height),
    }
}

/// Helper: Create a centered rect of given size
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
