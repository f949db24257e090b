use cutscene_data::{Precondition, PreconditionRegistry};

use crate::diagnostics::{DiagnosticKind, Diagnostics};

use super::cursor::Cursor;
use super::helpers::split_words;

/// Decode a `/`-separated precondition list, keeping source order.
pub fn parse_preconditions(
    list: &str,
    registry: &PreconditionRegistry,
    diags: &mut Diagnostics,
) -> Vec<Precondition> {
    let mut out = Vec::new();
    if list.is_empty() {
        return out;
    }
    for token in list.split('/') {
        if token.is_empty() {
            diags.report(DiagnosticKind::EmptyPrecondition { list: list.to_string() });
            continue;
        }
        if let Some(prec) = decode_precondition(token, registry, diags) {
            out.push(prec);
        }
    }
    out
}

/// Decode one `<type> <param> <param>...` token.
///
/// The character after the type id is a separator and is skipped whatever it
/// is. A parameter count that disagrees with the type is reported but the
/// parameters are kept as written.
///
/// The expected count is the type's slot count: a `Position` parameter is
/// written as two values, and a type with an `EnumMany` parameter accepts any
/// count.
pub fn decode_precondition(
    token: &str,
    registry: &PreconditionRegistry,
    diags: &mut Diagnostics,
) -> Option<Precondition> {
    let mut cursor = Cursor::new(token);
    let Some(type_id) = cursor.next_char() else {
        diags.report(DiagnosticKind::EmptyPrecondition { list: token.to_string() });
        return None;
    };
    cursor.next_char();
    let params: Vec<String> = split_words(cursor.rest()).map(str::to_string).collect();

    match registry.get(type_id) {
        None => diags.report(DiagnosticKind::UnknownPreconditionType {
            id: type_id,
            token: token.to_string(),
        }),
        Some(ty) if !ty.is_variadic() && params.len() != ty.slot_count() => {
            diags.report(DiagnosticKind::ArityMismatch {
                token: token.to_string(),
                id: type_id,
                found: params.len(),
                expected: ty.slot_count(),
            });
        },
        Some(_) => {},
    }

    Some(Precondition { type_id, params })
}
