use cutscene_codec::{Diagnostics, decode_events, decode_line, parse_types, to_game_format};
use cutscene_data::PreconditionRegistry;
use pretty_assertions::assert_eq;

/// Lines covering the awkward corners of the format.
const LINES: &[&str] = &[
    r#"intro:"""#,
    r#"intro:" ""#,
    r#"intro:"pause 500/end""#,
    r#"   spaced_branch :"/""#,
    r#"quoted:"speak Abigail \"C:\\path\" ok""#,
    r#"3/a 1:"none/10 -2/farmer 5 6 2/end""#,
    r#"7/:"music/1 2/""#,
    r#"8/a 1//b:"x/1  2/Bob 1 2 0 Extra/pause /"#,
    r#"9/a:"x/abc/Bob one 2 3""#,
    r#"bad_id/q  7 8:"x""#,
    r#"10/p 1 2/d mon tue wed:"music/0 0/a 0 0 0 b 1 1 1/ /two  spaces""#,
    r#"11/w rainy:"unterminated/1 2/farmer 1 1 1/end"#,
    r#"12/H:no quotes at all"#,
];

fn registry() -> PreconditionRegistry {
    parse_types("a=1iValue;=Test\np=1pTile;=Tile\nd=1Emon,tue,wed;=Days\nH=0=Host\nw=1erainy,sunny;=Weather\n")
}

#[test]
fn decode_encode_decode_is_stable() {
    let registry = registry();
    for line in LINES {
        let mut diags = Diagnostics::new();
        let Some(first) = decode_line(line, &registry, &mut diags) else {
            panic!("{line} should decode");
        };
        let encoded = to_game_format(&first);

        let mut again_diags = Diagnostics::new();
        let second = decode_line(&encoded, &registry, &mut again_diags);
        assert_eq!(second.as_ref(), Some(&first), "round trip of {line} via {encoded}");
    }
}

#[test]
fn encoding_is_a_fixed_point_after_one_pass() {
    let registry = registry();
    for line in LINES {
        let mut diags = Diagnostics::new();
        let first = decode_line(line, &registry, &mut diags).expect("decodes");
        let once = to_game_format(&first);
        let twice = to_game_format(&decode_line(&once, &registry, &mut diags).expect("decodes"));
        assert_eq!(once, twice);
    }
}

#[test]
fn whole_file_round_trips() {
    let registry = registry();
    let src = LINES.join("\n");
    let first = decode_events(&src, &registry).into_data();
    let encoded = cutscene_codec::encode_events(&first, "    ");
    let second = decode_events(&encoded, &registry).into_data();
    assert_eq!(first, second);
}
