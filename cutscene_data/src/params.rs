//! Typed view of precondition parameters.
//!
//! Preconditions store their parameters as the raw strings found in the event
//! file. The helpers here interpret those strings against a `PreconditionType`,
//! turn typed values back into strings, and build fresh instances with every
//! slot set to its zero value.

use std::fmt;

use crate::{EventData, ParamType, Precondition, PreconditionRegistry, PreconditionType, TilePos};

/// A parameter value interpreted according to its declared `ParamType`.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Integer(i32),
    Double(f64),
    Bool(bool),
    /// `String` and `Unknown` parameters.
    Text(String),
    Enum(String),
    EnumSet(Vec<String>),
    Position(TilePos),
}

/// Reasons a precondition's raw parameters do not fit its type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamError {
    Missing { index: usize, label: String },
    Extra { count: usize },
    Invalid { index: usize, raw: String, expected: &'static str },
    NotInEnum { index: usize, value: String },
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamError::Missing { index, label } if label.is_empty() => {
                write!(f, "missing parameter #{index}")
            },
            ParamError::Missing { index, label } => {
                write!(f, "missing parameter #{index} ({label})")
            },
            ParamError::Extra { count } => write!(f, "{count} unexpected trailing parameter(s)"),
            ParamError::Invalid { index, raw, expected } => {
                write!(f, "parameter #{index} '{raw}' is not a valid {expected}")
            },
            ParamError::NotInEnum { index, value } => {
                write!(f, "parameter #{index} '{value}' is not one of the allowed values")
            },
        }
    }
}

impl std::error::Error for ParamError {}

/// Build a precondition of type `ty` with every slot set to its zero value.
///
/// ```
/// use cutscene_data::{ParamType, PreconditionType, default_instance};
///
/// let ty = PreconditionType {
///     id: 'a',
///     label: "Tile".into(),
///     param_types: vec![ParamType::Integer, ParamType::Position, ParamType::Bool],
///     param_labels: vec!["Count".into(), "Tile".into(), "Flag".into()],
///     enum_values: Vec::new(),
/// };
/// assert_eq!(default_instance(&ty).params, vec!["0", "0", "0", "false"]);
/// ```
pub fn default_instance(ty: &PreconditionType) -> Precondition {
    let mut params = Vec::with_capacity(ty.slot_count());
    for kind in &ty.param_types {
        match kind {
            ParamType::Integer | ParamType::Double => params.push("0".to_string()),
            ParamType::Bool => params.push("false".to_string()),
            ParamType::String | ParamType::Unknown => params.push(String::new()),
            ParamType::EnumOne => params.push(ty.enum_values.first().cloned().unwrap_or_default()),
            ParamType::EnumMany => {},
            ParamType::Position => {
                params.push("0".to_string());
                params.push("0".to_string());
            },
        }
    }
    Precondition {
        type_id: ty.id,
        params,
    }
}

/// Interpret the raw parameters of `prec` against its type.
///
/// `EnumMany` takes every token that is left when it is reached; `Position`
/// takes two. Enum membership is only enforced when the type lists values.
///
/// # Errors
/// Returns the first mismatch between the raw tokens and the declared types.
pub fn decode_values(prec: &Precondition, ty: &PreconditionType) -> Result<Vec<ParamValue>, ParamError> {
    let mut tokens = prec.params.iter();
    let mut values = Vec::with_capacity(ty.param_types.len());

    for (index, kind) in ty.param_types.iter().enumerate() {
        let value = match kind {
            ParamType::Integer => {
                let raw = take(&mut tokens, ty, index)?;
                ParamValue::Integer(parse_int(raw, index)?)
            },
            ParamType::Double => {
                let raw = take(&mut tokens, ty, index)?;
                let v = raw.trim().parse::<f64>().map_err(|_| ParamError::Invalid {
                    index,
                    raw: raw.clone(),
                    expected: "number",
                })?;
                ParamValue::Double(v)
            },
            ParamType::Bool => {
                let raw = take(&mut tokens, ty, index)?;
                match raw.as_str() {
                    "true" => ParamValue::Bool(true),
                    "false" => ParamValue::Bool(false),
                    _ => {
                        return Err(ParamError::Invalid {
                            index,
                            raw: raw.clone(),
                            expected: "bool",
                        });
                    },
                }
            },
            ParamType::String | ParamType::Unknown => ParamValue::Text(take(&mut tokens, ty, index)?.clone()),
            ParamType::EnumOne => {
                let raw = take(&mut tokens, ty, index)?;
                check_enum(ty, raw, index)?;
                ParamValue::Enum(raw.clone())
            },
            ParamType::Position => {
                let x = parse_int(take(&mut tokens, ty, index)?, index)?;
                let y = parse_int(take(&mut tokens, ty, index)?, index)?;
                ParamValue::Position(TilePos::new(x, y))
            },
            ParamType::EnumMany => {
                let rest: Vec<String> = tokens.by_ref().cloned().collect();
                for raw in &rest {
                    check_enum(ty, raw, index)?;
                }
                ParamValue::EnumSet(rest)
            },
        };
        values.push(value);
    }

    let count = tokens.count();
    if count > 0 {
        return Err(ParamError::Extra { count });
    }
    Ok(values)
}

/// Flatten typed values back into raw parameter strings.
pub fn encode_values(values: &[ParamValue]) -> Vec<String> {
    let mut out = Vec::with_capacity(values.len());
    for value in values {
        match value {
            ParamValue::Integer(v) => out.push(v.to_string()),
            ParamValue::Double(v) => out.push(v.to_string()),
            ParamValue::Bool(v) => out.push(v.to_string()),
            ParamValue::Text(v) | ParamValue::Enum(v) => out.push(v.clone()),
            ParamValue::EnumSet(set) => out.extend(set.iter().cloned()),
            ParamValue::Position(pos) => {
                out.push(pos.x.to_string());
                out.push(pos.y.to_string());
            },
        }
    }
    out
}

/// Rewrite the parameters of `prec` in canonical form (`007` becomes `7`,
/// `1.50` becomes `1.5`).
///
/// # Errors
/// Returns the `decode_values` error when the parameters do not fit `ty`.
pub fn normalize_params(prec: &Precondition, ty: &PreconditionType) -> Result<Precondition, ParamError> {
    let values = decode_values(prec, ty)?;
    Ok(Precondition {
        type_id: prec.type_id,
        params: encode_values(&values),
    })
}

/// Normalize the preconditions of every full event in place.
///
/// Preconditions of unknown types, or whose parameters do not decode, are left
/// as written. Returns how many preconditions changed.
pub fn normalize_events(events: &mut [EventData], registry: &PreconditionRegistry) -> usize {
    let mut changed = 0;
    for data in events {
        let EventData::Event(event) = data else { continue };
        for prec in &mut event.preconditions {
            let Some(ty) = registry.get(prec.type_id) else { continue };
            if let Ok(normal) = normalize_params(prec, ty)
                && normal != *prec
            {
                *prec = normal;
                changed += 1;
            }
        }
    }
    changed
}

fn take<'a>(
    tokens: &mut std::slice::Iter<'a, String>,
    ty: &PreconditionType,
    index: usize,
) -> Result<&'a String, ParamError> {
    tokens.next().ok_or_else(|| ParamError::Missing {
        index,
        label: ty.param_labels.get(index).cloned().unwrap_or_default(),
    })
}

fn parse_int(raw: &str, index: usize) -> Result<i32, ParamError> {
    raw.trim().parse::<i32>().map_err(|_| ParamError::Invalid {
        index,
        raw: raw.to_string(),
        expected: "integer",
    })
}

fn check_enum(ty: &PreconditionType, raw: &str, index: usize) -> Result<(), ParamError> {
    if ty.enum_values.is_empty() || ty.enum_values.iter().any(|v| v == raw) {
        Ok(())
    } else {
        Err(ParamError::NotInEnum {
            index,
            value: raw.to_string(),
        })
    }
}
