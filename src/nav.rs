use std::time::{Duration, Instant};

use log::debug;

/// Tuning constants for the navigation controller.
///
/// The defaults mirror the printed card's origin (a mobile web page with an
/// 80px sticky header and smooth scrolling); none of the exact values carry
/// meaning beyond "approximately this".
#[derive(Debug, Clone, Copy)]
pub struct NavConfig {
    /// Gap between the viewport top and where a jumped-to section lands.
    pub header_offset: f64,
    /// How long passive tracking stays inert after an explicit jump. Must
    /// cover the worst-case scroll animation of the host.
    pub suppress_window: Duration,
    /// Slack absorbing sub-cell rounding when testing the strip edges.
    pub edge_tolerance: f64,
    /// Strip distance covered by one affordance press.
    pub nudge_step: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            header_offset: 80.0,
            suppress_window: Duration::from_secs(1),
            edge_tolerance: 15.0,
            nudge_step: 200.0,
        }
    }
}

/// Current geometry of the tab strip, read fresh on every use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripMetrics {
    /// Current scroll offset. May be negative in right-to-left layouts;
    /// consumers compare its absolute value.
    pub offset: f64,
    /// Total scrollable width of the strip content.
    pub content_width: f64,
    /// Width of the visible part of the strip.
    pub visible_width: f64,
}

/// Position of one tab within the strip content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabBounds {
    pub offset: f64,
    pub width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NudgeDirection {
    Left,
    Right,
}

/// Capability surface the controller drives.
///
/// The controller never touches a concrete widget or scroll primitive; the
/// host exposes geometry reads and scroll commands, and any read may come
/// back `None` (element not laid out yet), which degrades that single
/// operation to a no-op.
pub trait ViewportHost {
    /// Scroll geometry of the tab strip, if the strip is laid out.
    fn strip_metrics(&self) -> Option<StripMetrics>;
    /// Offset and width of the tab for `id` inside the strip content.
    fn tab_bounds(&self, id: &str) -> Option<TabBounds>;
    /// Top edge of the section `id` in page coordinates.
    fn section_top(&self, id: &str) -> Option<f64>;
    /// Scroll the main viewport so `offset` becomes the top visible row.
    fn scroll_main_to(&mut self, offset: f64);
    /// Scroll the tab strip to an absolute offset.
    fn scroll_strip_to(&mut self, offset: f64);
    /// Scroll the tab strip by a relative amount.
    fn scroll_strip_by(&mut self, delta: f64);
}

/// Section-synchronized navigation controller.
///
/// Owns the active section id, the suppression deadline and the strip
/// affordance flags. All mutation happens through one entry point per event
/// type, called from a single sequential event stream; there is no second
/// writer to arbitrate with.
pub struct NavController {
    ids: Vec<String>,
    active: Option<String>,
    /// The one suppression deadline. Re-armed (never stacked) on every
    /// explicit navigation.
    suppress_until: Option<Instant>,
    can_scroll_left: bool,
    can_scroll_right: bool,
    config: NavConfig,
}

impl NavController {
    pub fn new(ids: Vec<String>, config: NavConfig) -> Self {
        Self {
            ids,
            active: None,
            suppress_until: None,
            can_scroll_left: false,
            can_scroll_right: false,
            config,
        }
    }

    /// Id of the currently highlighted section, if any. Exactly one or zero
    /// tabs are highlighted at any time.
    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn can_scroll_left(&self) -> bool {
        self.can_scroll_left
    }

    pub fn can_scroll_right(&self) -> bool {
        self.can_scroll_right
    }

    /// True while an explicit navigation's settle window is still open.
    pub fn is_suppressed(&self, now: Instant) -> bool {
        self.suppress_until.is_some_and(|until| now < until)
    }

    /// Passive path: a section's rectangle newly entered the detection band.
    ///
    /// Ignored entirely while suppressed, so the controller's own
    /// programmatic scrolling is never misread as user navigation. When
    /// several reports arrive in one batch the last one processed wins.
    pub fn on_section_visible(&mut self, id: &str, now: Instant, host: &mut dyn ViewportHost) {
        if self.is_suppressed(now) {
            return;
        }
        if !self.knows(id) {
            return;
        }
        if self.active.as_deref() != Some(id) {
            debug!("section '{}' entered the detection band", id);
            self.active = Some(id.to_string());
        }
        self.center_active_tab(host);
    }

    /// Explicit path: the user tapped a tab.
    ///
    /// Sets the active id synchronously (optimistic, before any scroll
    /// settles), re-arms the suppression window and commands the main
    /// viewport to bring the section top `header_offset` below the viewport
    /// top. Unknown ids do nothing. Fire-and-forget: a second tap before the
    /// window expires retargets and restarts it.
    pub fn navigate_to(&mut self, id: &str, now: Instant, host: &mut dyn ViewportHost) {
        if !self.knows(id) {
            debug!("ignoring navigation to unknown section '{}'", id);
            return;
        }
        self.active = Some(id.to_string());
        self.suppress_until = Some(now + self.config.suppress_window);
        if let Some(top) = host.section_top(id) {
            host.scroll_main_to((top - self.config.header_offset).max(0.0));
        }
        self.center_active_tab(host);
    }

    /// Bring the active tab to the center of the strip's visible window.
    /// Runs on every active-id change, whichever path caused it.
    pub fn center_active_tab(&self, host: &mut dyn ViewportHost) {
        let Some(id) = self.active.as_deref() else {
            return;
        };
        let (Some(tab), Some(strip)) = (host.tab_bounds(id), host.strip_metrics()) else {
            return;
        };
        let target = tab.offset - strip.visible_width / 2.0 + tab.width / 2.0;
        host.scroll_strip_to(target);
    }

    /// Recompute the edge affordance flags from the strip's current
    /// geometry. Called on every strip scroll and on resize; the flags hold
    /// no independent truth and are never cached across layout changes.
    pub fn refresh_affordances(&mut self, host: &dyn ViewportHost) {
        let Some(strip) = host.strip_metrics() else {
            self.can_scroll_left = false;
            self.can_scroll_right = false;
            return;
        };
        let at_start = strip.offset.abs() < self.config.edge_tolerance;
        let at_end =
            strip.offset.abs() + strip.visible_width >= strip.content_width - self.config.edge_tolerance;
        self.can_scroll_left = !at_start;
        self.can_scroll_right = !at_end;
    }

    /// Manual affordance press: a fixed-size strip scroll. The strip's own
    /// scroll event recomputes the flags afterwards.
    pub fn nudge(&self, direction: NudgeDirection, host: &mut dyn ViewportHost) {
        let step = match direction {
            NudgeDirection::Left => -self.config.nudge_step,
            NudgeDirection::Right => self.config.nudge_step,
        };
        host.scroll_strip_by(step);
    }

    /// Timer event: close the suppression window once its deadline passed.
    pub fn tick(&mut self, now: Instant) {
        if self.suppress_until.is_some_and(|until| now >= until) {
            self.suppress_until = None;
            debug!("suppression window expired, passive tracking resumed");
        }
    }

    fn knows(&self, id: &str) -> bool {
        self.ids.iter().any(|known| known == id)
    }
}
