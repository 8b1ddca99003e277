use crate::nav::{StripMetrics, TabBounds, ViewportHost};

/// The detection band: the viewport with its top inset by `top_offset` and
/// its bottom `bottom_fraction` excluded. A section counts as "current" once
/// its rectangle overlaps this band, i.e. once its top has scrolled near the
/// header rather than only when fully visible.
///
/// The exact values are heuristics carried over from the card's web origin
/// (80px header, bottom 40% excluded); hosts pass whatever suits their
/// chrome.
#[derive(Debug, Clone, Copy)]
pub struct Band {
    pub top_offset: f64,
    pub bottom_fraction: f64,
}

impl Default for Band {
    fn default() -> Self {
        Self {
            top_offset: 80.0,
            bottom_fraction: 0.4,
        }
    }
}

/// One registered section rectangle, in page coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl Region {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Edge-triggered observer over the registered section rectangles.
///
/// `observe` reports the ids that newly entered the band since the previous
/// observation, in registration order. Consumers treat the batch as "last
/// processed wins"; no stronger ordering is promised.
pub struct SectionTracker {
    band: Band,
    regions: Vec<Region>,
    inside: Vec<bool>,
}

impl SectionTracker {
    pub fn new(band: Band) -> Self {
        Self {
            band,
            regions: Vec::new(),
            inside: Vec::new(),
        }
    }

    pub fn register(&mut self, region: Region) {
        self.regions.push(region);
        self.inside.push(false);
    }

    /// Replace all region geometry after a relayout. Edge state resets, so
    /// the next observation re-reports whatever currently sits in the band.
    pub fn set_regions(&mut self, regions: Vec<Region>) {
        self.inside = vec![false; regions.len()];
        self.regions = regions;
    }

    /// Unregister everything. The tracker is inert afterwards.
    pub fn detach_all(&mut self) {
        self.regions.clear();
        self.inside.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Report the ids whose rectangles newly intersect the band for the
    /// given scroll position.
    pub fn observe(&mut self, scroll_offset: f64, view_height: f64) -> Vec<String> {
        let band_top = scroll_offset + self.band.top_offset;
        let band_bottom = scroll_offset + view_height * (1.0 - self.band.bottom_fraction);
        let mut entered = Vec::new();
        for (region, inside) in self.regions.iter().zip(self.inside.iter_mut()) {
            let hit = region.top < band_bottom && region.bottom() > band_top;
            if hit && !*inside {
                entered.push(region.id.clone());
            }
            *inside = hit;
        }
        entered
    }
}

/// Position of one tab cell inside the strip content.
#[derive(Debug, Clone, PartialEq)]
pub struct TabSlot {
    pub id: String,
    pub offset: f64,
    pub width: f64,
}

/// The concrete `ViewportHost` for the terminal page.
///
/// Terminal scrolling is instantaneous, so commanded "animated" scrolls
/// degenerate to jumps; the controller's suppression window is kept all the
/// same. Offsets are clamped to the scrollable range so a command can never
/// leave the page.
#[derive(Debug, Default)]
pub struct PageViewport {
    main_offset: f64,
    strip_offset: f64,
    content_height: f64,
    view_height: f64,
    strip_visible_width: f64,
    strip_content_width: f64,
    tabs: Vec<TabSlot>,
    section_tops: Vec<(String, f64)>,
}

impl PageViewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn main_offset(&self) -> f64 {
        self.main_offset
    }

    pub fn strip_offset(&self) -> f64 {
        self.strip_offset
    }

    pub fn view_height(&self) -> f64 {
        self.view_height
    }

    /// Re-measure the scrolled page after a relayout. Current offsets are
    /// re-clamped against the new range.
    pub fn set_page_geometry(
        &mut self,
        content_height: f64,
        view_height: f64,
        section_tops: Vec<(String, f64)>,
    ) {
        self.content_height = content_height.max(0.0);
        self.view_height = view_height.max(0.0);
        self.section_tops = section_tops;
        self.main_offset = self.main_offset.clamp(0.0, self.max_main_offset());
    }

    /// Re-measure the tab strip after a relayout.
    pub fn set_strip_geometry(&mut self, visible_width: f64, tabs: Vec<TabSlot>) {
        self.strip_visible_width = visible_width.max(0.0);
        self.strip_content_width = tabs
            .last()
            .map(|tab| tab.offset + tab.width)
            .unwrap_or(0.0);
        self.tabs = tabs;
        self.strip_offset = self.strip_offset.clamp(0.0, self.max_strip_offset());
    }

    pub fn scroll_main_by(&mut self, delta: f64) {
        self.scroll_main_to(self.main_offset + delta);
    }

    pub fn max_main_offset(&self) -> f64 {
        (self.content_height - self.view_height).max(0.0)
    }

    fn max_strip_offset(&self) -> f64 {
        (self.strip_content_width - self.strip_visible_width).max(0.0)
    }
}

impl ViewportHost for PageViewport {
    fn strip_metrics(&self) -> Option<StripMetrics> {
        if self.strip_visible_width <= 0.0 {
            return None;
        }
        Some(StripMetrics {
            offset: self.strip_offset,
            content_width: self.strip_content_width,
            visible_width: self.strip_visible_width,
        })
    }

    fn tab_bounds(&self, id: &str) -> Option<TabBounds> {
        self.tabs.iter().find(|tab| tab.id == id).map(|tab| TabBounds {
            offset: tab.offset,
            width: tab.width,
        })
    }

    fn section_top(&self, id: &str) -> Option<f64> {
        self.section_tops
            .iter()
            .find(|(section, _)| section == id)
            .map(|(_, top)| *top)
    }

    fn scroll_main_to(&mut self, offset: f64) {
        self.main_offset = offset.clamp(0.0, self.max_main_offset());
    }

    fn scroll_strip_to(&mut self, offset: f64) {
        self.strip_offset = offset.clamp(0.0, self.max_strip_offset());
    }

    fn scroll_strip_by(&mut self, delta: f64) {
        self.scroll_strip_to(self.strip_offset + delta);
    }
}
