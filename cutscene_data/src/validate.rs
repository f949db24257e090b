use std::collections::HashSet;
use std::fmt;

use crate::*;

/// Validation error for inconsistent or unresolvable event data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateId { kind: &'static str, id: String },
    UnknownPreconditionType { id: char, context: String },
    InvalidParams { id: char, context: String, error: ParamError },
    DuplicateActor { name: String, context: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateId { kind, id } => {
                write!(f, "duplicate {kind} '{id}'")
            },
            ValidationError::UnknownPreconditionType { id, context } => {
                write!(f, "unknown precondition type '{id}' ({context})")
            },
            ValidationError::InvalidParams { id, context, error } => {
                write!(f, "precondition '{id}': {error} ({context})")
            },
            ValidationError::DuplicateActor { name, context } => {
                write!(f, "actor '{name}' placed more than once ({context})")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check a decoded event file for problems the line decoder cannot see.
///
/// ```
/// use cutscene_data::{BranchDef, EventData, PreconditionRegistry, validate_events};
///
/// let events = vec![
///     EventData::Branch(BranchDef { name: "intro".into(), commands: Vec::new() }),
///     EventData::Branch(BranchDef { name: "intro".into(), commands: Vec::new() }),
/// ];
/// let errors = validate_events(&events, &PreconditionRegistry::new());
/// assert_eq!(errors.len(), 1);
/// ```
pub fn validate_events(events: &[EventData], registry: &PreconditionRegistry) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut event_ids = HashSet::new();
    let mut branch_names = HashSet::new();

    for data in events {
        match data {
            EventData::Branch(branch) => {
                if !branch_names.insert(branch.name.as_str()) {
                    errors.push(ValidationError::DuplicateId {
                        kind: "branch",
                        id: branch.name.clone(),
                    });
                }
            },
            EventData::Event(event) => {
                if !event_ids.insert(event.id) {
                    errors.push(ValidationError::DuplicateId {
                        kind: "event id",
                        id: event.id.to_string(),
                    });
                }
                validate_event(event, registry, &mut errors);
            },
        }
    }

    errors
}

fn validate_event(event: &EventDef, registry: &PreconditionRegistry, errors: &mut Vec<ValidationError>) {
    let context = format!("event {}", event.id);

    for prec in &event.preconditions {
        let Some(ty) = registry.get(prec.type_id) else {
            errors.push(ValidationError::UnknownPreconditionType {
                id: prec.type_id,
                context: context.clone(),
            });
            continue;
        };
        if let Err(error) = decode_values(prec, ty) {
            errors.push(ValidationError::InvalidParams {
                id: prec.type_id,
                context: context.clone(),
                error,
            });
        }
    }

    let mut names = HashSet::new();
    for actor in &event.actors {
        if !names.insert(actor.name.as_str()) {
            errors.push(ValidationError::DuplicateActor {
                name: actor.name.clone(),
                context: context.clone(),
            });
        }
    }
}
