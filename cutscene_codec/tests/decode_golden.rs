use cutscene_codec::{DiagnosticKind, decode_events, encode_events, parse_types};
use cutscene_data::{EventData, ParamType, TilePos, normalize_events, validate_events};
use pretty_assertions::assert_eq;

const TYPES: &str = include_str!("fixtures/preconditions.txt");
const EVENTS: &str = include_str!("fixtures/events.txt");

#[test]
fn type_table_fixture_loads() {
    let registry = parse_types(TYPES);
    assert_eq!(registry.len(), 6);

    let f = registry.get('f').expect("friendship type");
    assert_eq!(f.param_types, vec![ParamType::String, ParamType::Integer]);
    assert_eq!(f.param_labels, vec!["NPC", "Friendship points"]);
    assert!(f.enum_values.is_empty());

    let d = registry.get('d').expect("day type");
    assert_eq!(d.param_types, vec![ParamType::EnumMany]);
    assert_eq!(d.param_labels, vec![""]);
    assert_eq!(d.enum_values.len(), 7);
}

#[test]
fn events_fixture_decodes() {
    let registry = parse_types(TYPES);
    let decoded = decode_events(EVENTS, &registry);

    let lines: Vec<usize> = decoded.events.iter().map(|e| e.line).collect();
    assert_eq!(lines, vec![2, 3, 4, 5, 6]);

    let diagnostics: Vec<(Option<usize>, DiagnosticKind)> =
        decoded.diagnostics.iter().map(|d| (d.line, d.kind.clone())).collect();
    assert_eq!(
        diagnostics,
        vec![
            (
                Some(5),
                DiagnosticKind::ArityMismatch {
                    token: "f Sebastian".into(),
                    id: 'f',
                    found: 1,
                    expected: 2,
                }
            ),
            (Some(7), DiagnosticKind::MalformedEventLine),
        ]
    );

    let events = decoded.into_data();
    let EventData::Branch(intro) = &events[0] else {
        panic!("line 2 should be a branch");
    };
    assert_eq!(intro.name, "intro");
    assert_eq!(intro.commands[1].args_raw, "Abigail \"Hi there.\"");

    let EventData::Event(forty) = &events[1] else {
        panic!("line 3 should be a full event");
    };
    assert_eq!(forty.id, 40);
    assert_eq!(forty.music, "jaunty");
    assert_eq!(forty.viewport, TilePos::new(64, 15));
    assert_eq!(forty.actors.len(), 2);
    let verbs: Vec<&str> = forty.commands.iter().map(|c| c.verb.as_str()).collect();
    assert_eq!(verbs, vec!["skippable", "pause", "speak", "end"]);

    let EventData::Event(forty_one) = &events[2] else {
        panic!("line 4 should be a full event");
    };
    // "Extra" does not complete an actor group and is dropped.
    let names: Vec<&str> = forty_one.actors.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["farmer", "Sam"]);
    assert_eq!(forty_one.preconditions[0].params, vec!["10", "12"]);
}

#[test]
fn events_fixture_reencodes() {
    let registry = parse_types(TYPES);
    let events = decode_events(EVENTS, &registry).into_data();
    let expected = include_str!("fixtures/events_encoded.txt");
    assert_eq!(encode_events(&events, "  "), expected);
}

#[test]
fn events_fixture_validates() {
    let registry = parse_types(TYPES);
    let events = decode_events(EVENTS, &registry).into_data();
    let errors = validate_events(&events, &registry);
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].to_string(),
        "precondition 'f': missing parameter #1 (Friendship points) (event 42)"
    );
}

#[test]
fn fixture_parameters_are_already_canonical() {
    let registry = parse_types(TYPES);
    let mut events = decode_events(EVENTS, &registry).into_data();
    let before = events.clone();
    assert_eq!(normalize_events(&mut events, &registry), 0);
    assert_eq!(events, before);
}
