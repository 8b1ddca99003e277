use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::menu::Menu;
use crate::page::Page;
use crate::theme::Theme;

/// One tab cell of the strip: display title plus its column extent inside
/// the strip content.
#[derive(Debug, Clone, PartialEq)]
pub struct StripCell {
    pub id: String,
    pub title: String,
    pub offset: usize,
    pub width: usize,
}

/// Lay the tab cells out left to right. Each cell is its padded title; the
/// padding doubles as the gap between neighbours.
pub fn layout_strip(tabs: &[(String, String)]) -> Vec<StripCell> {
    let mut cells = Vec::with_capacity(tabs.len());
    let mut offset = 0;
    for (id, title) in tabs {
        let width = title.chars().count() + 4;
        cells.push(StripCell {
            id: id.clone(),
            title: title.clone(),
            offset,
            width,
        });
        offset += width;
    }
    cells
}

/// Widget builders for the card screen.
pub struct ScreenPainter;

impl Default for ScreenPainter {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenPainter {
    pub fn new() -> Self {
        ScreenPainter
    }

    pub fn draw_header(&self, frame: &mut Frame, area: Rect, menu: &Menu, theme: &Theme) {
        let identity = Line::from(vec![
            Span::raw(" "),
            Span::styled(menu.name.to_string(), theme.title_style()),
            Span::raw("  "),
            Span::styled(menu.tagline.to_string(), theme.tagline_style()),
        ]);
        let hints = Line::from(Span::styled(
            " [t] next section  [1-9] jump  [←/→] strip  [d] theme  [c] contact  [w] whatsapp  [q] quit",
            theme.muted_style(),
        ));
        let header = Paragraph::new(vec![identity, hints])
            .style(theme.base_style())
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(theme.border_style()),
            );
        frame.render_widget(header, area);
    }

    /// Render the horizontally scrollable tab strip: the visible window of
    /// the cell row at `strip_offset`, framed by the two edge affordances.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_tab_strip(
        &self,
        frame: &mut Frame,
        area: Rect,
        cells: &[StripCell],
        active_id: Option<&str>,
        strip_offset: f64,
        can_scroll_left: bool,
        can_scroll_right: bool,
        theme: &Theme,
    ) {
        let visible = area.width.saturating_sub(2) as usize;

        let mut buf: Vec<(char, Style)> = Vec::new();
        for cell in cells {
            let style = if active_id == Some(cell.id.as_str()) {
                theme.tab_active_style()
            } else {
                theme.tab_style()
            };
            while buf.len() < cell.offset {
                buf.push((' ', theme.base_style()));
            }
            for ch in format!("  {}  ", cell.title).chars() {
                buf.push((ch, style));
            }
        }

        let start = (strip_offset.round().max(0.0) as usize).min(buf.len());
        let end = (start + visible).min(buf.len());
        let mut spans = vec![if can_scroll_left {
            Span::styled("❮", theme.affordance_style())
        } else {
            Span::raw(" ")
        }];
        spans.extend(spans_from_cells(&buf[start..end]));
        let shown = end - start;
        if shown < visible {
            spans.push(Span::raw(" ".repeat(visible - shown)));
        }
        spans.push(if can_scroll_right {
            Span::styled("❯", theme.affordance_style())
        } else {
            Span::raw(" ")
        });

        let strip = Paragraph::new(Line::from(spans))
            .style(theme.base_style())
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(theme.border_style()),
            );
        frame.render_widget(strip, area);
    }

    pub fn draw_page(&self, frame: &mut Frame, area: Rect, page: &Page, offset: u16, theme: &Theme) {
        let body = Paragraph::new(page.lines.clone())
            .style(theme.base_style())
            .scroll((offset, 0));
        frame.render_widget(body, area);
    }

    pub fn draw_status(&self, frame: &mut Frame, area: Rect, message: Option<&str>, theme: &Theme) {
        let text = message.unwrap_or(" ↑/↓ scroll · PgUp/PgDn page · Home/End edges");
        let status = Paragraph::new(Line::from(Span::styled(text.to_string(), theme.status_style())))
            .style(theme.base_style());
        frame.render_widget(status, area);
    }

    /// Centered contact overlay listing the order lines, each behind a copy
    /// key.
    pub fn draw_contact_overlay(&self, frame: &mut Frame, menu: &Menu, theme: &Theme) {
        let area = frame.area();
        let popup = self.popup_area(area, 70, 50);

        frame.render_widget(Clear, popup);

        let mut lines = vec![
            Line::default(),
            Line::from(Span::styled("  Order lines", theme.muted_style())),
        ];
        for (idx, phone) in menu.phones.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(format!("  [{}] ", idx + 1), theme.highlight_style()),
                Span::styled(format!("Phone {}  ", idx + 1), theme.muted_style()),
                Span::styled(phone.to_string(), theme.item_style()),
            ]));
        }
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("  [w] ", theme.highlight_style()),
            Span::styled("WhatsApp  ", theme.muted_style()),
            Span::styled(menu.whatsapp_link(), theme.item_style()),
        ]));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "  press a key to copy · Esc to close",
            theme.muted_style(),
        )));

        let overlay = Paragraph::new(lines).style(theme.base_style()).block(
            Block::default()
                .title(" Contact ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(theme.border_style()),
        );
        frame.render_widget(overlay, popup);
    }

    /// Helper function to create a centered rectangle.
    fn popup_area(&self, area: Rect, percent_x: u16, percent_y: u16) -> Rect {
        let popup_width = (area.width as f32 * (percent_x as f32 / 100.0)) as u16;
        let popup_height = (area.height as f32 * (percent_y as f32 / 100.0)) as u16;

        let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
        let y = area.y + (area.height.saturating_sub(popup_height)) / 2;

        Rect::new(x, y, popup_width, popup_height)
    }
}

fn spans_from_cells(window: &[(char, Style)]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut run = String::new();
    let mut run_style: Option<Style> = None;
    for (ch, style) in window {
        match run_style {
            Some(current) if current == *style => run.push(*ch),
            _ => {
                if let Some(current) = run_style {
                    if !run.is_empty() {
                        spans.push(Span::styled(std::mem::take(&mut run), current));
                    }
                }
                run.clear();
                run.push(*ch);
                run_style = Some(*style);
            }
        }
    }
    if let (Some(style), false) = (run_style, run.is_empty()) {
        spans.push(Span::styled(run, style));
    }
    spans
}
