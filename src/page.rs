use ratatui::text::{Line, Span};
use textwrap::wrap;

use crate::menu::{Addition, Menu, MenuItem, MenuSection, ADDITIONS_ID};
use crate::theme::Theme;
use crate::viewport::Region;

/// Left margin of the page body, in columns.
const GUTTER: usize = 1;
/// Width of one price column.
const PRICE_COL: usize = 10;

/// The laid-out page: every row of the scrollable body plus one region per
/// navigable section, in menu order. Region coordinates are line indices,
/// which is exactly the rectangle abstraction the visibility tracker wants.
pub struct Page {
    pub lines: Vec<Line<'static>>,
    pub regions: Vec<Region>,
}

impl Page {
    pub fn empty() -> Self {
        Self {
            lines: Vec::new(),
            regions: Vec::new(),
        }
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    pub fn section_tops(&self) -> Vec<(String, f64)> {
        self.regions
            .iter()
            .map(|region| (region.id.clone(), region.top))
            .collect()
    }
}

/// Lay the whole card out for the given terminal width.
pub fn build(menu: &Menu, width: u16, theme: &Theme) -> Page {
    let cols = (width as usize).saturating_sub(GUTTER + 1).max(24);
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut regions: Vec<Region> = Vec::new();

    push_hero(&mut lines, menu, cols, theme);

    for section in &menu.sections {
        let top = lines.len();
        push_section(&mut lines, section, cols, theme);
        regions.push(Region::new(section.id, top as f64, (lines.len() - top) as f64));
    }

    let top = lines.len();
    push_additions(&mut lines, menu, cols, theme);
    regions.push(Region::new(ADDITIONS_ID, top as f64, (lines.len() - top) as f64));

    push_footer(&mut lines, menu, cols, theme);

    Page { lines, regions }
}

fn push_hero(lines: &mut Vec<Line<'static>>, menu: &Menu, cols: usize, theme: &Theme) {
    lines.push(Line::default());
    lines.push(body_line(Span::styled(menu.name.to_string(), theme.title_style())));
    lines.push(body_line(Span::styled(
        menu.tagline.to_string(),
        theme.tagline_style(),
    )));
    for row in wrap(menu.address, cols) {
        lines.push(body_line(Span::styled(row.to_string(), theme.muted_style())));
    }
    lines.push(Line::default());
}

fn push_section(lines: &mut Vec<Line<'static>>, section: &MenuSection, cols: usize, theme: &Theme) {
    lines.push(body_line(Span::styled(
        format!(" {}  {} ", section.emoji, section.title),
        theme.banner_style(),
    )));
    if !section.subtitles.is_empty() {
        lines.push(caption_line(&section.subtitles, cols, theme));
    }
    for item in &section.items {
        push_item(lines, item, cols, theme);
    }
    lines.push(Line::default());
}

fn caption_line(subtitles: &[&'static str], cols: usize, theme: &Theme) -> Line<'static> {
    let captions: String = subtitles
        .iter()
        .map(|sub| format!("{:>width$}", sub, width = PRICE_COL))
        .collect();
    let pad = (GUTTER + cols).saturating_sub(captions.chars().count());
    Line::from(vec![
        Span::raw(" ".repeat(pad)),
        Span::styled(captions, theme.muted_style()),
    ])
}

fn price_spans(item: &MenuItem, theme: &Theme) -> (usize, Vec<Span<'static>>) {
    let mut spans = Vec::new();
    let mut total = 0;
    for (idx, price) in item.prices.iter().enumerate() {
        let cell = match &item.labels {
            Some(labels) => match labels.get(idx) {
                Some(label) => format!("{} {}", label, price),
                None => price.to_string(),
            },
            None => price.to_string(),
        };
        let cell = format!("{:>width$}", cell, width = PRICE_COL);
        total += cell.chars().count();
        spans.push(Span::styled(cell, theme.price_style()));
    }
    (total, spans)
}

fn push_item(lines: &mut Vec<Line<'static>>, item: &MenuItem, cols: usize, theme: &Theme) {
    let (price_width, price_cells) = price_spans(item, theme);
    let marker_width = if item.popular { 2 } else { 0 };
    let name_width = cols.saturating_sub(price_width + marker_width).max(8);

    for (idx, row) in wrap(item.name, name_width).iter().enumerate() {
        let mut spans: Vec<Span<'static>> = vec![Span::raw(" ".repeat(GUTTER))];
        if item.popular {
            if idx == 0 {
                spans.push(Span::styled("★ ".to_string(), theme.popular_style()));
            } else {
                spans.push(Span::raw("  ".to_string()));
            }
        }
        spans.push(Span::styled(row.to_string(), theme.item_style()));
        if idx == 0 {
            let used = GUTTER + marker_width + row.chars().count();
            let pad = (GUTTER + cols).saturating_sub(used + price_width);
            spans.push(Span::raw(" ".repeat(pad)));
            spans.extend(price_cells.iter().cloned());
        }
        lines.push(Line::from(spans));
    }
}

fn push_addition_row(lines: &mut Vec<Line<'static>>, addition: &Addition, cols: usize, theme: &Theme) {
    let price = format!("{:>width$}", addition.price, width = PRICE_COL);
    let used = GUTTER + addition.name.chars().count();
    let pad = (GUTTER + cols).saturating_sub(used + price.chars().count());
    lines.push(Line::from(vec![
        Span::raw(" ".repeat(GUTTER)),
        Span::styled(addition.name.to_string(), theme.item_style()),
        Span::raw(" ".repeat(pad)),
        Span::styled(price, theme.price_style()),
    ]));
}

fn push_additions(lines: &mut Vec<Line<'static>>, menu: &Menu, cols: usize, theme: &Theme) {
    lines.push(body_line(Span::styled(
        " ✨  Additions ".to_string(),
        theme.banner_style(),
    )));
    for addition in &menu.additions_general {
        push_addition_row(lines, addition, cols, theme);
    }
    lines.push(body_line(Span::styled(
        "Protein add-ons".to_string(),
        theme.highlight_style(),
    )));
    for addition in &menu.additions_protein {
        push_addition_row(lines, addition, cols, theme);
    }
    for row in wrap(menu.delivery_note, cols.saturating_sub(3)) {
        lines.push(body_line(Span::styled(
            format!("🛵 {}", row),
            theme.tagline_style(),
        )));
    }
    lines.push(Line::default());
}

fn push_footer(lines: &mut Vec<Line<'static>>, menu: &Menu, cols: usize, theme: &Theme) {
    lines.push(Line::default());
    for row in wrap(menu.address, cols.saturating_sub(3)) {
        lines.push(body_line(Span::styled(
            format!("📍 {}", row),
            theme.muted_style(),
        )));
    }
    for row in wrap(&menu.maps_link(), cols) {
        lines.push(body_line(Span::styled(row.to_string(), theme.muted_style())));
    }
    lines.push(Line::default());
    lines.push(body_line(Span::styled(
        menu.credit.to_string(),
        theme.muted_style(),
    )));
    if let Some(phone) = menu.phones.first() {
        lines.push(body_line(Span::styled(
            format!("Contact {}", phone),
            theme.tagline_style(),
        )));
    }
    lines.push(Line::default());
}

fn body_line(span: Span<'static>) -> Line<'static> {
    Line::from(vec![Span::raw(" ".repeat(GUTTER)), span])
}
