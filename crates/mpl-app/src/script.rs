// ABOUTME: Event script format for the replay host.
// ABOUTME: Parses JSON-lines files of mount, measurement, content and pointer events.

use mpl_core::PaneDescriptor;
use serde::Deserialize;
use std::path::Path;

/// One host event. Each script line holds a single event, e.g.
/// `"mount"`, `{"measure": {"width": 800, "height": 600}}` or
/// `{"move": {"position": 420}}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Event {
    Mount,
    Unmount,
    Measure { width: f64, height: f64 },
    Content { panes: Vec<PaneDescriptor> },
    Press { splitter: usize, position: f64 },
    Move { position: f64 },
    Release,
    Hover { splitter: Option<usize> },
    /// Let every scheduled frame run
    Frame,
    SetSizes { sizes: Vec<f64> },
    /// Print the current pane and splitter geometry
    Snapshot,
}

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("Failed to read script: {0}")]
    Io(#[from] std::io::Error),

    #[error("Line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Parse script text. Blank lines and lines starting with `#` are skipped.
pub fn parse(text: &str) -> Result<Vec<Event>, ScriptError> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line, content)| {
            serde_json::from_str(content).map_err(|source| ScriptError::Parse { line, source })
        })
        .collect()
}

pub fn load(path: &Path) -> Result<Vec<Event>, ScriptError> {
    let text = std::fs::read_to_string(path)?;
    parse(&text)
}
