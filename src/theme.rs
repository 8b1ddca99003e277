use ratatui::style::{Color, Modifier, Style};

/// Brand orange carried over from the printed card.
pub const ACCENT: Color = Color::Rgb(243, 111, 33);

const DARK_BG: Color = Color::Rgb(5, 5, 5);
const DARK_FG: Color = Color::Rgb(228, 228, 231);
const DARK_MUTED: Color = Color::Rgb(113, 113, 122);
const LIGHT_BG: Color = Color::Rgb(250, 250, 250);
const LIGHT_FG: Color = Color::Rgb(24, 24, 27);
const LIGHT_MUTED: Color = Color::Rgb(141, 141, 148);

/// Dark/light palette. One boolean decides everything; the flag is what
/// gets persisted between runs.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub dark: bool,
}

impl Theme {
    pub fn new(dark: bool) -> Self {
        Self { dark }
    }

    pub fn toggle(&mut self) {
        self.dark = !self.dark;
    }

    pub fn bg(&self) -> Color {
        if self.dark {
            DARK_BG
        } else {
            LIGHT_BG
        }
    }

    pub fn fg(&self) -> Color {
        if self.dark {
            DARK_FG
        } else {
            LIGHT_FG
        }
    }

    pub fn muted(&self) -> Color {
        if self.dark {
            DARK_MUTED
        } else {
            LIGHT_MUTED
        }
    }

    pub fn base_style(&self) -> Style {
        Style::new().fg(self.fg()).bg(self.bg())
    }

    pub fn title_style(&self) -> Style {
        Style::new()
            .fg(self.fg())
            .add_modifier(Modifier::BOLD | Modifier::ITALIC)
    }

    pub fn tagline_style(&self) -> Style {
        Style::new().fg(ACCENT).add_modifier(Modifier::BOLD)
    }

    pub fn muted_style(&self) -> Style {
        Style::new().fg(self.muted())
    }

    pub fn banner_style(&self) -> Style {
        Style::new()
            .fg(Color::White)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn item_style(&self) -> Style {
        Style::new().fg(self.fg())
    }

    pub fn price_style(&self) -> Style {
        Style::new().fg(ACCENT).add_modifier(Modifier::BOLD)
    }

    pub fn popular_style(&self) -> Style {
        Style::new().fg(ACCENT)
    }

    pub fn tab_style(&self) -> Style {
        Style::new().fg(self.muted())
    }

    pub fn tab_active_style(&self) -> Style {
        Style::new()
            .fg(Color::White)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn affordance_style(&self) -> Style {
        Style::new().fg(ACCENT).add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        Style::new().fg(self.muted())
    }

    pub fn status_style(&self) -> Style {
        Style::new().fg(self.muted())
    }

    pub fn highlight_style(&self) -> Style {
        Style::new().fg(ACCENT).add_modifier(Modifier::BOLD)
    }
}
