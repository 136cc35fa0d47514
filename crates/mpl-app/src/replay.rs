// ABOUTME: Drives a split layout from scripted host events.
// ABOUTME: Converts reports, rejected drags and geometry snapshots into printable records.

use mpl_core::Extent;
use mpl_layout::{DragOutcome, Geometry, QueueHost, SizeReport, SplitLayout, SplitterState};
use serde::Serialize;

use crate::script::Event;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RectRecord {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SplitterRecord {
    pub index: usize,
    pub rect: RectRecord,
    pub state: &'static str,
    pub bar: String,
    pub handle: String,
}

/// One line of replay output
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Record {
    Sizes(Vec<f64>),
    Dimensions(Vec<(f64, f64)>),
    Rejected { position: f64 },
    Ignored { event: &'static str },
    Geometry {
        laid_out: bool,
        panes: Vec<RectRecord>,
        splitters: Vec<SplitterRecord>,
    },
}

impl From<&SizeReport> for Record {
    fn from(report: &SizeReport) -> Self {
        match report {
            SizeReport::Sizes(sizes) => Record::Sizes(sizes.clone()),
            SizeReport::Dimensions(dims) => Record::Dimensions(dims.clone()),
        }
    }
}

fn rect_record(rect: &mpl_layout::Rect) -> RectRecord {
    RectRecord {
        x: rect.x,
        y: rect.y,
        width: rect.width,
        height: rect.height,
    }
}

fn state_name(state: SplitterState) -> &'static str {
    match state {
        SplitterState::Idle => "idle",
        SplitterState::Hover => "hover",
        SplitterState::Active => "active",
    }
}

fn geometry_record(laid_out: bool, geometry: &Geometry) -> Record {
    Record::Geometry {
        laid_out,
        panes: geometry.panes.iter().map(|p| rect_record(&p.rect)).collect(),
        splitters: geometry
            .splitters
            .iter()
            .map(|s| SplitterRecord {
                index: s.index,
                rect: rect_record(&s.rect),
                state: state_name(s.state),
                bar: s.bar.to_hex(),
                handle: s.handle.to_hex(),
            })
            .collect(),
    }
}

/// Apply one event. Size reports reach the layout's listener; anything else
/// worth printing is returned.
pub fn apply(layout: &mut SplitLayout<QueueHost>, event: &Event) -> Option<Record> {
    match event {
        Event::Mount => layout.mount(),
        Event::Unmount => layout.unmount(),
        Event::Measure { width, height } => layout.measure(Extent::new(*width, *height)),
        Event::Content { panes } => layout.set_content(panes),
        Event::Press { splitter, position } => {
            if !layout.pointer_down(*splitter, *position) {
                return Some(Record::Ignored { event: "press" });
            }
        }
        Event::Move { position } => match layout.pointer_move(*position) {
            DragOutcome::Accepted => {}
            DragOutcome::Rejected => return Some(Record::Rejected { position: *position }),
            DragOutcome::Ignored => return Some(Record::Ignored { event: "move" }),
        },
        Event::Release => {
            layout.pointer_up();
        }
        Event::Hover { splitter } => layout.pointer_hover(*splitter),
        Event::Frame => {
            layout.run_pending_frames();
        }
        Event::SetSizes { sizes } => {
            if !layout.set_sizes(sizes) {
                return Some(Record::Ignored { event: "set_sizes" });
            }
        }
        Event::Snapshot => {
            return Some(geometry_record(layout.is_laid_out(), &layout.geometry()));
        }
    }
    None
}
