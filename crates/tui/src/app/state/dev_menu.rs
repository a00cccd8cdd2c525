use crate::app::modal::ModalSnapshot;
use crate::app::state::theme::{Appearance, ThemeMode};
use serde::Serialize;
use serde_json::Value;

pub const DEFAULT_COLLAPSE: usize = 1;
const MAX_COLLAPSE: usize = 8;
const JSON_INDENT: &str = "  ";

pub struct DevMenuState {
    pub expanded: bool,
    /// Containers at or below this depth are folded.
    pub collapse: usize,
}

impl DevMenuState {
    pub fn new(expanded: bool) -> Self {
        Self {
            expanded,
            collapse: DEFAULT_COLLAPSE,
        }
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn expand_json(&mut self) {
        self.collapse = (self.collapse + 1).min(MAX_COLLAPSE);
    }

    pub fn fold_json(&mut self) {
        self.collapse = self.collapse.saturating_sub(1);
    }
}

impl Default for DevMenuState {
    fn default() -> Self {
        Self::new(false)
    }
}

#[derive(Debug, Serialize)]
pub struct SessionSnapshot {
    pub route: &'static str,
    pub theme: ThemeMode,
    pub appearance: Appearance,
    pub modal: ModalSnapshot,
    pub toasts: usize,
}

pub fn json_box_lines(value: &Value, collapse: usize) -> Vec<String> {
    let mut out = Vec::new();
    push_json(&mut out, String::new(), value, 0, collapse, false);
    out
}

fn push_json(
    out: &mut Vec<String>,
    prefix: String,
    value: &Value,
    depth: usize,
    collapse: usize,
    comma: bool,
) {
    let indent = JSON_INDENT.repeat(depth);
    let tail = if comma { "," } else { "" };
    match value {
        Value::Object(map) if map.is_empty() => out.push(format!("{indent}{prefix}{{}}{tail}")),
        Value::Array(items) if items.is_empty() => out.push(format!("{indent}{prefix}[]{tail}")),
        Value::Object(_) if depth >= collapse => out.push(format!("{indent}{prefix}{{…}}{tail}")),
        Value::Array(_) if depth >= collapse => out.push(format!("{indent}{prefix}[…]{tail}")),
        Value::Object(map) => {
            out.push(format!("{indent}{prefix}{{"));
            let last = map.len() - 1;
            for (index, (key, child)) in map.iter().enumerate() {
                let key = Value::String(key.clone());
                push_json(
                    out,
                    format!("{key}: "),
                    child,
                    depth + 1,
                    collapse,
                    index != last,
                );
            }
            out.push(format!("{indent}}}{tail}"));
        }
        Value::Array(items) => {
            out.push(format!("{indent}{prefix}["));
            let last = items.len() - 1;
            for (index, child) in items.iter().enumerate() {
                push_json(out, String::new(), child, depth + 1, collapse, index != last);
            }
            out.push(format!("{indent}]{tail}"));
        }
        scalar => out.push(format!("{indent}{prefix}{scalar}{tail}")),
    }
}
