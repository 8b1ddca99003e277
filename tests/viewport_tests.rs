use menucard::nav::ViewportHost;
use menucard::viewport::{Band, PageViewport, Region, SectionTracker, TabSlot};

fn flat_band() -> Band {
    Band {
        top_offset: 0.0,
        bottom_fraction: 0.4,
    }
}

fn three_sections() -> Vec<Region> {
    vec![
        Region::new("starters", 0.0, 10.0),
        Region::new("mains", 10.0, 10.0),
        Region::new("drinks", 20.0, 10.0),
    ]
}

#[test]
fn test_reports_sections_entering_the_band() {
    let mut tracker = SectionTracker::new(flat_band());
    tracker.set_regions(three_sections());

    // View height 20 puts the band at [0, 12): the first two sections sit
    // inside it at mount.
    let entered = tracker.observe(0.0, 20.0);
    assert_eq!(entered, vec!["starters".to_string(), "mains".to_string()]);
}

#[test]
fn test_reports_are_edge_triggered() {
    let mut tracker = SectionTracker::new(flat_band());
    tracker.set_regions(three_sections());

    tracker.observe(0.0, 20.0);
    assert!(tracker.observe(0.0, 20.0).is_empty());

    // Scrolling down pulls the third section into the band; the other two
    // are still inside and are not re-reported.
    let entered = tracker.observe(9.0, 20.0);
    assert_eq!(entered, vec!["drinks".to_string()]);
}

#[test]
fn test_left_sections_are_reported_again_on_reentry() {
    let mut tracker = SectionTracker::new(flat_band());
    tracker.set_regions(three_sections());

    tracker.observe(0.0, 20.0);
    // Far below the content: everything leaves the band.
    assert!(tracker.observe(100.0, 20.0).is_empty());

    let entered = tracker.observe(15.0, 20.0);
    assert_eq!(entered, vec!["mains".to_string(), "drinks".to_string()]);
}

#[test]
fn test_set_regions_resets_edge_state() {
    let mut tracker = SectionTracker::new(flat_band());
    tracker.set_regions(three_sections());

    tracker.observe(0.0, 20.0);
    tracker.set_regions(three_sections());

    // Relayout re-reports whatever currently sits in the band.
    let entered = tracker.observe(0.0, 20.0);
    assert_eq!(entered, vec!["starters".to_string(), "mains".to_string()]);
}

#[test]
fn test_detached_tracker_is_inert() {
    let mut tracker = SectionTracker::new(flat_band());
    tracker.set_regions(three_sections());
    tracker.detach_all();

    assert!(tracker.is_empty());
    assert!(tracker.observe(0.0, 20.0).is_empty());
}

#[test]
fn test_band_excludes_header_and_bottom_slice() {
    // The web defaults: top inset 80, bottom 40% excluded.
    let mut tracker = SectionTracker::new(Band::default());
    tracker.set_regions(vec![
        Region::new("above", 0.0, 70.0),
        Region::new("inside", 500.0, 50.0),
        Region::new("below", 700.0, 50.0),
    ]);

    // Band for a 1000-unit viewport at offset 0 is [80, 600).
    let entered = tracker.observe(0.0, 1000.0);
    assert_eq!(entered, vec!["inside".to_string()]);
}

#[test]
fn test_degenerate_band_matches_nothing() {
    let mut tracker = SectionTracker::new(Band::default());
    tracker.set_regions(three_sections());

    // Viewport shorter than the top inset: the band collapses.
    assert!(tracker.observe(0.0, 100.0).is_empty());
}

#[test]
fn test_page_viewport_clamps_main_scroll() {
    let mut viewport = PageViewport::new();
    viewport.set_page_geometry(100.0, 20.0, vec![("mains".to_string(), 40.0)]);

    viewport.scroll_main_to(500.0);
    assert_eq!(viewport.main_offset(), 80.0);

    viewport.scroll_main_to(-5.0);
    assert_eq!(viewport.main_offset(), 0.0);

    viewport.scroll_main_by(30.0);
    assert_eq!(viewport.main_offset(), 30.0);
}

#[test]
fn test_page_viewport_strip_geometry() {
    let mut viewport = PageViewport::new();
    viewport.set_strip_geometry(
        40.0,
        vec![
            TabSlot {
                id: "starters".to_string(),
                offset: 0.0,
                width: 30.0,
            },
            TabSlot {
                id: "mains".to_string(),
                offset: 30.0,
                width: 30.0,
            },
        ],
    );

    let metrics = viewport.strip_metrics().expect("strip is laid out");
    assert_eq!(metrics.content_width, 60.0);
    assert_eq!(metrics.visible_width, 40.0);

    let bounds = viewport.tab_bounds("mains").expect("tab exists");
    assert_eq!(bounds.offset, 30.0);
    assert!(viewport.tab_bounds("desserts").is_none());

    viewport.scroll_strip_by(100.0);
    assert_eq!(viewport.strip_offset(), 20.0);
    viewport.scroll_strip_by(-100.0);
    assert_eq!(viewport.strip_offset(), 0.0);
}

#[test]
fn test_page_viewport_without_strip_reports_no_metrics() {
    let viewport = PageViewport::new();
    assert!(viewport.strip_metrics().is_none());
    assert!(viewport.section_top("starters").is_none());
}

#[test]
fn test_page_viewport_section_lookup() {
    let mut viewport = PageViewport::new();
    viewport.set_page_geometry(
        200.0,
        20.0,
        vec![
            ("starters".to_string(), 5.0),
            ("mains".to_string(), 90.0),
        ],
    );

    assert_eq!(viewport.section_top("mains"), Some(90.0));
    assert!(viewport.section_top("desserts").is_none());
}
