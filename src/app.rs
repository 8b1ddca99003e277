use std::path::PathBuf;
use std::time::{Duration, Instant};

use arboard::Clipboard;
use crossterm::event::{KeyCode, KeyModifiers};
use log::warn;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use crate::menu::Menu;
use crate::nav::{NavConfig, NavController, NudgeDirection, ViewportHost};
use crate::page::{self, Page};
use crate::prefs;
use crate::render::{self, ScreenPainter, StripCell};
use crate::theme::Theme;
use crate::viewport::{Band, PageViewport, SectionTracker, TabSlot};

const HEADER_ROWS: u16 = 3;
const STRIP_ROWS: u16 = 2;
const STATUS_ROWS: u16 = 1;
/// How long a copy confirmation stays in the status bar.
const STATUS_TTL: Duration = Duration::from_secs(2);

/// Controller constants rescaled to terminal cells. The page chrome sits
/// outside the scrolled area, so no header offset is needed; the settle
/// window stays at the web card's one second.
fn tui_nav_config() -> NavConfig {
    NavConfig {
        header_offset: 0.0,
        suppress_window: Duration::from_secs(1),
        edge_tolerance: 1.0,
        nudge_step: 12.0,
    }
}

fn tui_band() -> Band {
    Band {
        top_offset: 0.0,
        bottom_fraction: 0.4,
    }
}

pub struct App {
    menu: Menu,
    ids: Vec<String>,
    pub theme: Theme,
    nav: NavController,
    tracker: SectionTracker,
    viewport: PageViewport,
    page: Page,
    strip_cells: Vec<StripCell>,
    painter: ScreenPainter,
    show_contact: bool,
    status: Option<(String, Instant)>,
    prefs_path: Option<PathBuf>,
    last_size: (u16, u16),
    pub should_quit: bool,
}

impl App {
    pub fn new(menu: Menu, theme: Theme, prefs_path: Option<PathBuf>) -> Self {
        let ids = menu.section_ids();
        Self {
            nav: NavController::new(ids.clone(), tui_nav_config()),
            tracker: SectionTracker::new(tui_band()),
            viewport: PageViewport::new(),
            page: Page::empty(),
            strip_cells: Vec::new(),
            painter: ScreenPainter::new(),
            show_contact: false,
            status: None,
            prefs_path,
            last_size: (0, 0),
            should_quit: false,
            menu,
            ids,
            theme,
        }
    }

    /// Rebuild everything that depends on the terminal size or the theme:
    /// the laid-out page, the tracker regions, the host geometry and the
    /// affordance flags. Runs at mount and on every resize.
    pub fn relayout(&mut self, width: u16, height: u16, now: Instant) {
        self.last_size = (width, height);

        self.page = page::build(&self.menu, width, &self.theme);
        self.tracker.set_regions(self.page.regions.clone());

        let view_height = height.saturating_sub(HEADER_ROWS + STRIP_ROWS + STATUS_ROWS);
        self.viewport.set_page_geometry(
            self.page.height() as f64,
            view_height as f64,
            self.page.section_tops(),
        );

        let tabs: Vec<(String, String)> = self
            .menu
            .sections
            .iter()
            .map(|section| (section.id.to_string(), section.title.to_string()))
            .chain(std::iter::once((
                crate::menu::ADDITIONS_ID.to_string(),
                "Additions".to_string(),
            )))
            .collect();
        self.strip_cells = render::layout_strip(&tabs);
        let slots = self
            .strip_cells
            .iter()
            .map(|cell| TabSlot {
                id: cell.id.clone(),
                offset: cell.offset as f64,
                width: cell.width as f64,
            })
            .collect();
        self.viewport
            .set_strip_geometry(width.saturating_sub(2) as f64, slots);

        self.nav.refresh_affordances(&self.viewport);
        self.sync_visibility(now);
    }

    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers, now: Instant) {
        if self.show_contact {
            self.handle_contact_key(code, now);
            return;
        }

        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => self.quit(),
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Char('c') => self.show_contact = true,
            KeyCode::Tab | KeyCode::Char('t') => self.step_section(1, now),
            KeyCode::BackTab => self.step_section(-1, now),
            KeyCode::Char(digit @ '1'..='9') => {
                let index = digit as usize - '1' as usize;
                if let Some(id) = self.ids.get(index).cloned() {
                    self.navigate(&id, now);
                }
            }
            KeyCode::Down => self.scroll_page(1.0, now),
            KeyCode::Up => self.scroll_page(-1.0, now),
            KeyCode::PageDown => self.scroll_page(self.page_step(), now),
            KeyCode::PageUp => self.scroll_page(-self.page_step(), now),
            KeyCode::Home => {
                self.viewport.scroll_main_to(0.0);
                self.sync_visibility(now);
            }
            KeyCode::End => {
                let bottom = self.viewport.max_main_offset();
                self.viewport.scroll_main_to(bottom);
                self.sync_visibility(now);
            }
            KeyCode::Left => self.nudge(NudgeDirection::Left),
            KeyCode::Right => self.nudge(NudgeDirection::Right),
            KeyCode::Char('d') => {
                self.theme.toggle();
                self.persist_theme();
                self.relayout(self.last_size.0, self.last_size.1, now);
            }
            KeyCode::Char('w') => {
                let link = self.menu.whatsapp_link();
                self.copy(link, "WhatsApp link copied", now);
            }
            _ => {}
        }
    }

    fn handle_contact_key(&mut self, code: KeyCode, now: Instant) {
        match code {
            KeyCode::Esc | KeyCode::Char('c') | KeyCode::Char('q') => self.show_contact = false,
            KeyCode::Char('w') => {
                let link = self.menu.whatsapp_link();
                self.copy(link, "WhatsApp link copied", now);
            }
            KeyCode::Char(digit @ '1'..='9') => {
                let index = digit as usize - '1' as usize;
                if let Some(phone) = self.menu.phones.get(index) {
                    let link = Menu::tel_link(phone);
                    let message = format!("Copied {}", link);
                    self.copy(link, &message, now);
                }
            }
            _ => {}
        }
    }

    /// Drive the passive path: report newly visible sections to the
    /// controller and refresh the strip flags. Runs after every scroll of
    /// the main viewport, whoever caused it.
    fn sync_visibility(&mut self, now: Instant) {
        let entered = self
            .tracker
            .observe(self.viewport.main_offset(), self.viewport.view_height());
        for id in entered {
            self.nav.on_section_visible(&id, now, &mut self.viewport);
        }
        self.nav.refresh_affordances(&self.viewport);
    }

    fn navigate(&mut self, id: &str, now: Instant) {
        self.nav.navigate_to(id, now, &mut self.viewport);
        self.sync_visibility(now);
    }

    fn step_section(&mut self, delta: i32, now: Instant) {
        if self.ids.is_empty() {
            return;
        }
        let len = self.ids.len() as i32;
        let next = match self
            .nav
            .active_id()
            .and_then(|id| self.ids.iter().position(|known| known == id))
        {
            Some(current) => (current as i32 + delta).rem_euclid(len) as usize,
            None if delta >= 0 => 0,
            None => self.ids.len() - 1,
        };
        let id = self.ids[next].clone();
        self.navigate(&id, now);
    }

    fn scroll_page(&mut self, delta: f64, now: Instant) {
        self.viewport.scroll_main_by(delta);
        self.sync_visibility(now);
    }

    fn nudge(&mut self, direction: NudgeDirection) {
        self.nav.nudge(direction, &mut self.viewport);
        // The strip scroll is what recomputes the flags, per the controller
        // contract.
        self.nav.refresh_affordances(&self.viewport);
    }

    fn page_step(&self) -> f64 {
        (self.viewport.view_height() - 2.0).max(1.0)
    }

    fn copy(&mut self, text: String, message: &str, now: Instant) {
        if let Ok(mut clipboard) = Clipboard::new() {
            if clipboard.set_text(text).is_ok() {
                self.status = Some((message.to_string(), now));
            }
        }
    }

    fn persist_theme(&self) {
        if let Some(path) = &self.prefs_path {
            if let Err(err) = prefs::store(path, self.theme.dark) {
                warn!("{:#}", err);
            }
        }
    }

    pub fn tick(&mut self, now: Instant) {
        self.nav.tick(now);
        if let Some((_, since)) = &self.status {
            if now.duration_since(*since) >= STATUS_TTL {
                self.status = None;
            }
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                [
                    Constraint::Length(HEADER_ROWS),
                    Constraint::Length(STRIP_ROWS),
                    Constraint::Min(0),
                    Constraint::Length(STATUS_ROWS),
                ]
                .as_ref(),
            )
            .split(frame.area());

        self.painter
            .draw_header(frame, chunks[0], &self.menu, &self.theme);
        self.painter.draw_tab_strip(
            frame,
            chunks[1],
            &self.strip_cells,
            self.nav.active_id(),
            self.viewport.strip_offset(),
            self.nav.can_scroll_left(),
            self.nav.can_scroll_right(),
            &self.theme,
        );
        self.painter.draw_page(
            frame,
            chunks[2],
            &self.page,
            self.viewport.main_offset() as u16,
            &self.theme,
        );
        self.painter.draw_status(
            frame,
            chunks[3],
            self.status.as_ref().map(|(message, _)| message.as_str()),
            &self.theme,
        );
        if self.show_contact {
            self.painter
                .draw_contact_overlay(frame, &self.menu, &self.theme);
        }
    }

    fn quit(&mut self) {
        self.should_quit = true;
    }
}
