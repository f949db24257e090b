//! Loader for the precondition type table.
//!
//! Each definition line has the shape `<id>=<count><type><spec>;...=<label>`.
//! `<count>` is a single digit; every parameter group is a type character
//! followed by either a label or, for enum types, a comma-separated value list,
//! and ends with `;`. Lines that do not fit the shape are skipped so the table
//! can carry comments and blank lines.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use cutscene_data::{ParamType, PreconditionRegistry, PreconditionType};
use log::{debug, info, warn};

use crate::parser::cursor::Cursor;

/// Build a registry from the full text of a type table.
///
/// Duplicate ids keep the definition that appears first.
pub fn parse_types(src: &str) -> PreconditionRegistry {
    let mut registry = PreconditionRegistry::new();
    for (idx, line) in src.lines().enumerate() {
        let Some(ty) = parse_type_line(line) else {
            if !line.trim().is_empty() {
                debug!("type table line {} skipped: {line:?}", idx + 1);
            }
            continue;
        };
        let id = ty.id;
        if !registry.insert(ty) {
            warn!("precondition type '{id}' redefined on line {}, keeping the first definition", idx + 1);
        }
    }
    registry
}

/// Parse one definition line, or `None` when the line is not a definition.
///
/// ```
/// use cutscene_codec::parse_type_line;
/// use cutscene_data::ParamType;
///
/// let ty = parse_type_line("f=2sNPC;iPoints;=Friendship").unwrap();
/// assert_eq!(ty.id, 'f');
/// assert_eq!(ty.param_types, vec![ParamType::String, ParamType::Integer]);
/// assert_eq!(ty.param_labels, vec!["NPC", "Points"]);
/// assert_eq!(ty.label, "Friendship");
/// ```
pub fn parse_type_line(line: &str) -> Option<PreconditionType> {
    let mut cursor = Cursor::new(line);
    let id = cursor.next_char()?;
    if cursor.next_char()? != '=' {
        return None;
    }
    let spec = cursor.take_until('=')?;
    let label = cursor.take_rest();

    let mut ty = PreconditionType {
        id,
        label: label.to_string(),
        param_types: Vec::new(),
        param_labels: Vec::new(),
        enum_values: Vec::new(),
    };
    parse_param_spec(spec, &mut ty)?;
    Some(ty)
}

/// Fill in the parameters of `ty` from `<count><type><spec>;...`.
///
/// A group without its closing `;` ends the parameter list early.
fn parse_param_spec(spec: &str, ty: &mut PreconditionType) -> Option<()> {
    let mut cursor = Cursor::new(spec);
    let count = match cursor.next_char() {
        None => 0,
        Some(digit) => digit.to_digit(10)?,
    };

    for _ in 0..count {
        let Some(type_char) = cursor.next_char() else {
            break;
        };
        let Some(values) = cursor.take_until(';') else {
            break;
        };
        let kind = ParamType::from_char(type_char);
        if kind.is_enum() {
            ty.enum_values = values
                .split(',')
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .collect();
            ty.param_labels.push(String::new());
        } else {
            ty.param_labels.push(values.to_string());
        }
        ty.param_types.push(kind);
    }
    Some(())
}

/// Load the type table at `path`, falling back to an empty registry.
///
/// A missing or unreadable file is logged and treated as "no types".
pub fn load_types(path: &Path) -> PreconditionRegistry {
    match try_load_types(path) {
        Ok(registry) => {
            info!(
                "{} precondition types loaded from '{}'",
                registry.len(),
                path.display()
            );
            registry
        },
        Err(e) => {
            warn!("Could not load precondition types: {e:#}. Continuing with no types.");
            PreconditionRegistry::new()
        },
    }
}

/// Load the type table at `path`.
///
/// # Errors
/// Returns an error if the file cannot be read.
pub fn try_load_types(path: &Path) -> Result<PreconditionRegistry> {
    let src = fs::read_to_string(path)
        .with_context(|| format!("reading precondition types from '{}'", path.display()))?;
    Ok(parse_types(&src))
}
