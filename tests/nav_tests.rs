use std::time::{Duration, Instant};

use menucard::nav::{
    NavConfig, NavController, NudgeDirection, StripMetrics, TabBounds, ViewportHost,
};

/// Host double that serves canned geometry and records every scroll command.
#[derive(Default)]
struct MockHost {
    strip: Option<StripMetrics>,
    tabs: Vec<(String, TabBounds)>,
    sections: Vec<(String, f64)>,
    main_scrolls: Vec<f64>,
    strip_scrolls: Vec<f64>,
    strip_deltas: Vec<f64>,
}

impl ViewportHost for MockHost {
    fn strip_metrics(&self) -> Option<StripMetrics> {
        self.strip
    }

    fn tab_bounds(&self, id: &str) -> Option<TabBounds> {
        self.tabs
            .iter()
            .find(|(tab, _)| tab == id)
            .map(|(_, bounds)| *bounds)
    }

    fn section_top(&self, id: &str) -> Option<f64> {
        self.sections
            .iter()
            .find(|(section, _)| section == id)
            .map(|(_, top)| *top)
    }

    fn scroll_main_to(&mut self, offset: f64) {
        self.main_scrolls.push(offset);
    }

    fn scroll_strip_to(&mut self, offset: f64) {
        self.strip_scrolls.push(offset);
    }

    fn scroll_strip_by(&mut self, delta: f64) {
        self.strip_deltas.push(delta);
    }
}

fn section_ids(count: usize) -> Vec<String> {
    (1..=count).map(|idx| format!("section-{}", idx)).collect()
}

fn controller(count: usize) -> NavController {
    NavController::new(section_ids(count), NavConfig::default())
}

#[test]
fn test_last_visibility_report_wins() {
    let mut nav = controller(3);
    let mut host = MockHost::default();
    let t0 = Instant::now();

    nav.on_section_visible("section-1", t0, &mut host);
    assert_eq!(nav.active_id(), Some("section-1"));

    nav.on_section_visible("section-2", t0, &mut host);
    nav.on_section_visible("section-3", t0, &mut host);
    assert_eq!(nav.active_id(), Some("section-3"));
}

#[test]
fn test_visibility_reports_are_inert_while_suppressed() {
    let mut nav = controller(3);
    let mut host = MockHost::default();
    let t0 = Instant::now();

    nav.navigate_to("section-2", t0, &mut host);
    assert!(nav.is_suppressed(t0));

    nav.on_section_visible("section-1", t0 + Duration::from_millis(200), &mut host);
    nav.on_section_visible("section-3", t0 + Duration::from_millis(900), &mut host);
    assert_eq!(nav.active_id(), Some("section-2"));
}

#[test]
fn test_explicit_navigation_is_synchronous() {
    let mut nav = controller(3);
    let mut host = MockHost {
        sections: vec![("section-2".to_string(), 500.0)],
        ..MockHost::default()
    };
    let t0 = Instant::now();

    nav.navigate_to("section-2", t0, &mut host);

    // Active before any scroll settles, and the main viewport is asked to
    // park the section top below the sticky header (default offset 80).
    assert_eq!(nav.active_id(), Some("section-2"));
    assert_eq!(host.main_scrolls, vec![420.0]);
    assert!(nav.is_suppressed(t0));
}

#[test]
fn test_navigation_to_unknown_id_is_a_noop() {
    let mut nav = controller(3);
    let mut host = MockHost::default();
    let t0 = Instant::now();

    nav.navigate_to("desserts", t0, &mut host);

    assert_eq!(nav.active_id(), None);
    assert!(!nav.is_suppressed(t0));
    assert!(host.main_scrolls.is_empty());
    assert!(host.strip_scrolls.is_empty());
}

#[test]
fn test_renavigation_restarts_the_window() {
    let mut nav = controller(3);
    let mut host = MockHost::default();
    let t0 = Instant::now();

    nav.navigate_to("section-1", t0, &mut host);
    // Second tap on the already-active tab: valid no-op transition, but the
    // single suppression deadline re-arms instead of stacking.
    nav.navigate_to("section-1", t0 + Duration::from_millis(900), &mut host);

    let late = t0 + Duration::from_millis(1500);
    assert!(nav.is_suppressed(late));
    nav.on_section_visible("section-3", late, &mut host);
    assert_eq!(nav.active_id(), Some("section-1"));

    let expired = t0 + Duration::from_millis(1900);
    nav.tick(expired);
    assert!(!nav.is_suppressed(expired));
    nav.on_section_visible("section-3", expired, &mut host);
    assert_eq!(nav.active_id(), Some("section-3"));
}

#[test]
fn test_affordance_boundaries() {
    let mut nav = controller(1);
    let mut host = MockHost::default();

    host.strip = Some(StripMetrics {
        offset: 0.0,
        content_width: 1000.0,
        visible_width: 400.0,
    });
    nav.refresh_affordances(&host);
    assert!(!nav.can_scroll_left());
    assert!(nav.can_scroll_right());

    host.strip = Some(StripMetrics {
        offset: 600.0,
        content_width: 1000.0,
        visible_width: 400.0,
    });
    nav.refresh_affordances(&host);
    assert!(nav.can_scroll_left());
    assert!(!nav.can_scroll_right());

    host.strip = Some(StripMetrics {
        offset: 300.0,
        content_width: 1000.0,
        visible_width: 400.0,
    });
    nav.refresh_affordances(&host);
    assert!(nav.can_scroll_left());
    assert!(nav.can_scroll_right());
}

#[test]
fn test_affordances_use_absolute_offset_for_rtl_strips() {
    let mut nav = controller(1);
    let host = MockHost {
        strip: Some(StripMetrics {
            offset: -600.0,
            content_width: 1000.0,
            visible_width: 400.0,
        }),
        ..MockHost::default()
    };

    nav.refresh_affordances(&host);
    assert!(nav.can_scroll_left());
    assert!(!nav.can_scroll_right());
}

#[test]
fn test_affordances_clear_without_strip_geometry() {
    let mut nav = controller(1);
    let mut host = MockHost::default();

    host.strip = Some(StripMetrics {
        offset: 300.0,
        content_width: 1000.0,
        visible_width: 400.0,
    });
    nav.refresh_affordances(&host);
    assert!(nav.can_scroll_left());

    host.strip = None;
    nav.refresh_affordances(&host);
    assert!(!nav.can_scroll_left());
    assert!(!nav.can_scroll_right());
}

#[test]
fn test_tab_centering_formula() {
    let mut nav = controller(3);
    let mut host = MockHost {
        strip: Some(StripMetrics {
            offset: 0.0,
            content_width: 1200.0,
            visible_width: 400.0,
        }),
        tabs: vec![(
            "section-2".to_string(),
            TabBounds {
                offset: 500.0,
                width: 80.0,
            },
        )],
        ..MockHost::default()
    };
    let t0 = Instant::now();

    nav.on_section_visible("section-2", t0, &mut host);

    // 500 - 400/2 + 80/2
    assert_eq!(host.strip_scrolls, vec![340.0]);
}

#[test]
fn test_nudge_requests_fixed_size_scroll() {
    let nav = controller(1);
    let mut host = MockHost::default();

    nav.nudge(NudgeDirection::Left, &mut host);
    nav.nudge(NudgeDirection::Right, &mut host);

    assert_eq!(host.strip_deltas, vec![-200.0, 200.0]);
}

#[test]
fn test_missing_host_geometry_degrades_silently() {
    let mut nav = controller(3);
    let mut host = MockHost::default();
    let t0 = Instant::now();

    // Known id, but the host cannot resolve any geometry: the highlight
    // still moves, the scroll commands silently drop.
    nav.navigate_to("section-3", t0, &mut host);

    assert_eq!(nav.active_id(), Some("section-3"));
    assert!(nav.is_suppressed(t0));
    assert!(host.main_scrolls.is_empty());
    assert!(host.strip_scrolls.is_empty());
}

#[test]
fn test_end_to_end_tap_then_passive_correction() {
    let mut nav = controller(5);
    let mut host = MockHost::default();
    let t0 = Instant::now();

    nav.navigate_to("section-3", t0, &mut host);
    assert_eq!(nav.active_id(), Some("section-3"));

    // Synthetic visibility event 200ms later, window (1000ms) still open.
    let during = t0 + Duration::from_millis(200);
    nav.on_section_visible("section-1", during, &mut host);
    assert_eq!(nav.active_id(), Some("section-3"));

    // Past the window the passive path corrects the highlight again.
    let after = t0 + Duration::from_millis(1000);
    nav.tick(after);
    nav.on_section_visible("section-2", after, &mut host);
    assert_eq!(nav.active_id(), Some("section-2"));
}
