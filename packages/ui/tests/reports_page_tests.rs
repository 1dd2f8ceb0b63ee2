#![allow(clippy::disallowed_methods)]

use dioxus::prelude::*;
use ui::admin::AdminReportsPage;

fn render_page() -> String {
    let mut dom = VirtualDom::new(AdminReportsPage);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn page_renders_bundled_reports_newest_first() {
    let html = render_page();

    assert!(html.contains("Hazard Reports"));
    assert_eq!(html.matches("class=\"report-row").count(), 6);

    let newest = html.find("Car Nicobar").expect("newest report");
    let oldest = html.find("Baga Beach").expect("oldest report");
    assert!(newest < oldest);
}

#[test]
fn page_summarizes_statuses() {
    let html = render_page();

    assert!(html.contains("<div class=\"stat-card-value\">6</div>"));
    assert!(html.contains("<div class=\"stat-card-value\">4</div>"));
    assert!(html.contains("Times shown in UTC+05:30."));
    assert!(!html.contains("error-banner"));
    assert!(!html.contains("report-detail-panel"));
}
