#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! cutscene_codec: decoder and encoder for cutscene event lines.
//!
//! Events are stored one per line as `<key>:"<value>"`:
//! - `intro:"pause 500/end"` declares a branch made only of commands,
//! - `42/f Abigail 500/w rainy:"none/64 15/farmer 64 16 2/pause 500/end"` is a
//!   full event with an id, preconditions, music, viewport, actors and commands.
//!
//! Precondition parameter shapes come from a type table loaded at startup
//! (see [`registry`]). Decoding never aborts; problems are collected in
//! [`Diagnostics`] and the affected field falls back to a default.

pub const CODEC_VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod data_paths;
pub mod diagnostics;
pub mod encoder;
mod parser;
pub mod registry;

pub use config::{CodecConfig, load_config};
pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
pub use encoder::{encode_events, to_game_format};
pub use parser::{
    DecodedEvent, DecodedEvents, decode_events, decode_line, decode_precondition, parse_actors, parse_command,
    parse_commands, parse_preconditions,
};
pub use registry::{load_types, parse_type_line, parse_types, try_load_types};
