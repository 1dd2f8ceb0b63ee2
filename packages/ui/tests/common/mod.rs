#![allow(dead_code)]

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, TimeZone, Utc};
use dioxus::prelude::*;
use dioxus_core::{ElementId, Event, Mutation, Mutations};
use dioxus_html::{PlatformEventData, SerializedHtmlEventConverter, SerializedMouseData};
use hazard_core::{ModerationRequest, Report, ReportId, SortColumn, SortDirective, SortOrder};

use ui::admin::{ReportTable, ReportTableProps};

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()
}

pub fn table_props(reports: Vec<Report>, selected: Vec<ReportId>) -> ReportTableProps {
    ReportTableProps {
        reports,
        selected,
        on_select_report: None,
        on_select_all: None,
        on_view_report: None,
        on_verify_report: None,
        on_reject_report: None,
        sort_by: SortColumn::default(),
        sort_order: SortOrder::default(),
        on_sort: None,
        now: Some(fixed_now()),
    }
}

pub fn render_table(props: ReportTableProps) -> String {
    let mut dom = VirtualDom::new_with_props(ReportTable, props);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Opening tag of the `<input>` carrying the given aria-label.
pub fn checkbox_markup<'a>(html: &'a str, label: &str) -> &'a str {
    let needle = format!("aria-label=\"{label}\"");
    let at = html.find(&needle).expect("checkbox present");
    let start = html[..at].rfind("<input").expect("input tag");
    let end = at + html[at..].find('>').expect("tag end");
    &html[start..=end]
}

/// A callback invocation seen by a test harness.
#[derive(Debug, Clone, PartialEq)]
pub enum Recorded {
    Select(ReportId, bool),
    View(ReportId),
    Verify(ModerationRequest),
    Reject(ModerationRequest),
    Sort(SortDirective),
}

/// Shared log the harness callbacks push into, provided as root context.
#[derive(Clone, Default)]
pub struct EventLog(Rc<RefCell<Vec<Recorded>>>);

impl EventLog {
    pub fn push(&self, event: Recorded) {
        self.0.borrow_mut().push(event);
    }

    /// Drain everything recorded so far.
    pub fn take(&self) -> Vec<Recorded> {
        std::mem::take(&mut *self.0.borrow_mut())
    }
}

/// Build `dom` and return the edits of the first render.
pub fn mount(dom: VirtualDom, log: &EventLog) -> (VirtualDom, Mutations) {
    let mut dom = dom.with_root_context(log.clone());
    let mutations = dom.rebuild_to_vec();
    (dom, mutations)
}

/// Elements that registered a listener for `event`, in creation order.
pub fn listeners(mutations: &Mutations, event: &str) -> Vec<ElementId> {
    mutations
        .edits
        .iter()
        .filter_map(|edit| match edit {
            Mutation::NewEventListener { name, id } if name == event => Some(*id),
            _ => None,
        })
        .collect()
}

/// Dispatch a bubbling click on `target`.
pub fn click(dom: &VirtualDom, target: ElementId) {
    dioxus_html::set_event_converter(Box::new(SerializedHtmlEventConverter));
    let data = PlatformEventData::new(Box::<SerializedMouseData>::default());
    let event = Event::new(Rc::new(data) as Rc<dyn Any>, true);
    dom.runtime().handle_event("click", event, target);
}
