//! Decoder for event lines.
//!
//! A line is `<key>:"<value>"`. A key without `/` declares a branch and its
//! value is nothing but commands. Otherwise the key is
//! `<id>/<precondition>/...` and the value is
//! `<music>/<x> <y>/<actors>/<command>/...`.

use cutscene_data::{BranchDef, EventData, EventDef, PreconditionRegistry, TilePos};
use log::info;

use crate::diagnostics::{DiagnosticKind, Diagnostics};

mod actors;
mod commands;
pub(crate) mod cursor;
mod helpers;
mod preconditions;

pub use actors::parse_actors;
pub use commands::{parse_command, parse_commands};
pub use preconditions::{decode_precondition, parse_preconditions};

use cursor::Cursor;
use helpers::{extract_value, parse_int_field};

/// Number of value fields in front of the commands of a full event.
const EVENT_HEADER_FIELDS: usize = 3;

/// An event decoded from a file, with the line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedEvent {
    pub line: usize,
    pub data: EventData,
}

/// Result of decoding a whole event file.
#[derive(Debug, Clone, Default)]
pub struct DecodedEvents {
    pub events: Vec<DecodedEvent>,
    pub diagnostics: Diagnostics,
}

impl DecodedEvents {
    pub fn into_data(self) -> Vec<EventData> {
        self.events.into_iter().map(|e| e.data).collect()
    }
}

/// Decode one event line.
///
/// Returns `None` when the line has no `:` at all; every other problem is
/// reported to `diags` and replaced with a default.
///
/// ```
/// use cutscene_codec::{Diagnostics, decode_line};
/// use cutscene_data::{EventData, PreconditionRegistry};
///
/// let mut diags = Diagnostics::new();
/// let data = decode_line(r#"  intro:"pause 500/end""#, &PreconditionRegistry::new(), &mut diags);
/// match data {
///     Some(EventData::Branch(branch)) => assert_eq!(branch.commands.len(), 2),
///     other => panic!("expected a branch, got {other:?}"),
/// }
/// ```
pub fn decode_line(line: &str, registry: &PreconditionRegistry, diags: &mut Diagnostics) -> Option<EventData> {
    let mut cursor = Cursor::new(line);
    cursor.skip_whitespace();
    let Some(key) = cursor.take_until(':') else {
        diags.report(DiagnosticKind::MalformedEventLine);
        return None;
    };
    let value = extract_value(cursor.rest(), diags);

    let data = match key.split_once('/') {
        None => EventData::Branch(BranchDef {
            name: key.to_string(),
            commands: parse_commands(&value, 0),
        }),
        Some((id, list)) => EventData::Event(decode_event(id, list, &value, registry, diags)),
    };
    Some(data)
}

fn decode_event(
    id: &str,
    list: &str,
    value: &str,
    registry: &PreconditionRegistry,
    diags: &mut Diagnostics,
) -> EventDef {
    let id = parse_int_field(id, "event id", diags);
    let preconditions = parse_preconditions(list, registry, diags);

    let mut fields = value.splitn(EVENT_HEADER_FIELDS + 1, '/');
    let music = fields.next().unwrap_or_default().to_string();
    let viewport = match fields.next() {
        Some(field) => decode_viewport(field, diags),
        None => {
            diags.report(DiagnosticKind::MissingField { field: "viewport" });
            TilePos::default()
        },
    };
    let actors = match fields.next() {
        Some(field) => parse_actors(field, diags),
        None => {
            diags.report(DiagnosticKind::MissingField { field: "actor list" });
            Vec::new()
        },
    };

    EventDef {
        id,
        preconditions,
        music,
        viewport,
        actors,
        commands: parse_commands(value, EVENT_HEADER_FIELDS),
    }
}

/// `<x> <y>`: x is everything before the first space, y everything after it.
fn decode_viewport(field: &str, diags: &mut Diagnostics) -> TilePos {
    match field.split_once(' ') {
        Some((x, y)) => TilePos::new(
            parse_int_field(x, "viewport x", diags),
            parse_int_field(y, "viewport y", diags),
        ),
        None => {
            let x = parse_int_field(field, "viewport x", diags);
            diags.report(DiagnosticKind::MissingField { field: "viewport y" });
            TilePos::new(x, 0)
        },
    }
}

/// Decode every event line of `src`.
///
/// Blank lines and lines starting with `#` are skipped. Diagnostics carry the
/// 1-based line number they were found on.
pub fn decode_events(src: &str, registry: &PreconditionRegistry) -> DecodedEvents {
    let mut diagnostics = Diagnostics::new();
    let mut events = Vec::new();

    for (idx, line) in src.lines().enumerate() {
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let line_no = idx + 1;
        diagnostics.set_line(Some(line_no));
        if let Some(data) = decode_line(line, registry, &mut diagnostics) {
            events.push(DecodedEvent { line: line_no, data });
        }
    }
    diagnostics.set_line(None);

    info!(
        "{} event lines decoded with {} diagnostic(s)",
        events.len(),
        diagnostics.len()
    );
    DecodedEvents { events, diagnostics }
}
