use cutscene_data::{Actor, TilePos};
use log::debug;

use crate::diagnostics::Diagnostics;

use super::helpers::{parse_int_field, split_words};

/// Decode `<name> <x> <y> <facing>` groups from a space-separated list.
///
/// Tokens that do not complete a group of four are dropped without a
/// diagnostic; existing event files depend on that.
pub fn parse_actors(list: &str, diags: &mut Diagnostics) -> Vec<Actor> {
    let tokens: Vec<&str> = split_words(list).collect();
    let groups = tokens.chunks_exact(4);
    let leftover = groups.remainder().len();
    if leftover > 0 {
        debug!("dropping {leftover} trailing actor token(s) from \"{list}\"");
    }

    let mut actors = Vec::with_capacity(tokens.len() / 4);
    for group in groups {
        let x = parse_int_field(group[1], "actor x", diags);
        let y = parse_int_field(group[2], "actor y", diags);
        let facing = parse_int_field(group[3], "actor facing", diags);
        actors.push(Actor {
            name: group[0].to_string(),
            pos: TilePos::new(x, y),
            facing,
        });
    }
    actors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_groups_of_four() {
        let mut diags = Diagnostics::new();
        let actors = parse_actors("farmer 64 15 2 Abigail -3 4 0", &mut diags);
        assert_eq!(actors.len(), 2);
        assert_eq!(actors[1].name, "Abigail");
        assert_eq!(actors[1].pos, TilePos::new(-3, 4));
        assert_eq!(actors[1].facing, 0);
        assert!(diags.is_empty());
    }

    #[test]
    fn incomplete_trailing_group_is_dropped_silently() {
        let mut diags = Diagnostics::new();
        let actors = parse_actors("Bob 1 2 0 Extra", &mut diags);
        assert_eq!(
            actors,
            vec![Actor {
                name: "Bob".into(),
                pos: TilePos::new(1, 2),
                facing: 0,
            }]
        );
        assert!(diags.is_empty());
    }

    #[test]
    fn non_numeric_fields_default_to_zero() {
        let mut diags = Diagnostics::new();
        let actors = parse_actors("Bob x 2 up", &mut diags);
        assert_eq!(actors[0].pos, TilePos::new(0, 2));
        assert_eq!(actors[0].facing, 0);
        assert_eq!(diags.len(), 2);
    }

    #[test]
    fn empty_list_has_no_actors() {
        let mut diags = Diagnostics::new();
        assert!(parse_actors("", &mut diags).is_empty());
    }
}
