//! Serialize decoded events back to the line format.
//!
//! Feeding the output of `to_game_format` back through `decode_line` yields the
//! same `EventData` for anything `decode_line` produced.

use cutscene_data::{Actor, Command, EventData, EventDef, Precondition};

/// Encode one event as `<key>:"<value>"`, without indentation.
///
/// ```
/// use cutscene_codec::to_game_format;
/// use cutscene_data::{BranchDef, Command, EventData};
///
/// let branch = EventData::Branch(BranchDef {
///     name: "intro".into(),
///     commands: vec![Command { verb: "speak".into(), args_raw: "Sam \"Hi\"".into() }],
/// });
/// assert_eq!(to_game_format(&branch), r#"intro:"speak Sam \"Hi\"""#);
/// ```
pub fn to_game_format(data: &EventData) -> String {
    let (key, value) = match data {
        EventData::Branch(branch) => (branch.name.clone(), encode_branch(&branch.commands)),
        EventData::Event(event) => (encode_key(event), encode_value(event)),
    };
    format!("{key}:\"{}\"", escape_value(&value))
}

/// Encode a list of events, one per line, each prefixed with `indent`.
pub fn encode_events(events: &[EventData], indent: &str) -> String {
    let mut out = String::new();
    for data in events {
        out.push_str(indent);
        out.push_str(&to_game_format(data));
        out.push('\n');
    }
    out
}

/// `<id>/<precondition>/...`; the `/` after the id is written even when the
/// list is empty so the line still reads as a full event.
fn encode_key(event: &EventDef) -> String {
    let preconditions: Vec<String> = event.preconditions.iter().map(encode_precondition).collect();
    format!("{}/{}", event.id, preconditions.join("/"))
}

fn encode_precondition(prec: &Precondition) -> String {
    let mut out = String::new();
    out.push(prec.type_id);
    if !prec.params.is_empty() {
        out.push(' ');
        out.push_str(&prec.params.join(" "));
    }
    out
}

fn encode_value(event: &EventDef) -> String {
    let actors: Vec<String> = event.actors.iter().map(encode_actor).collect();
    let mut out = format!(
        "{}/{} {}/{}",
        event.music,
        event.viewport.x,
        event.viewport.y,
        actors.join(" ")
    );
    for cmd in &event.commands {
        out.push('/');
        out.push_str(&encode_command(cmd));
    }
    out
}

fn encode_actor(actor: &Actor) -> String {
    format!("{} {} {} {}", actor.name, actor.pos.x, actor.pos.y, actor.facing)
}

/// A lone empty command is written as `" "`; an empty value decodes to no
/// commands at all.
fn encode_branch(commands: &[Command]) -> String {
    let value = commands.iter().map(encode_command).collect::<Vec<_>>().join("/");
    if value.is_empty() && !commands.is_empty() {
        return " ".to_string();
    }
    value
}

fn encode_command(cmd: &Command) -> String {
    if cmd.args_raw.is_empty() {
        cmd.verb.clone()
    } else {
        format!("{} {}", cmd.verb, cmd.args_raw)
    }
}

/// Backslash-escape the characters the value decoder treats specially.
fn escape_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        if ch == '"' || ch == '\\' {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use cutscene_data::TilePos;

    fn event() -> EventDef {
        EventDef {
            id: 3,
            preconditions: vec![
                Precondition {
                    type_id: 'a',
                    params: vec!["1".into(), "2".into()],
                },
                Precondition {
                    type_id: 'H',
                    params: Vec::new(),
                },
            ],
            music: "jaunty".into(),
            viewport: TilePos::new(-100, 7),
            actors: vec![Actor {
                name: "farmer".into(),
                pos: TilePos::new(4, 5),
                facing: 1,
            }],
            commands: vec![
                Command {
                    verb: "message".into(),
                    args_raw: "\"C:\\temp\"".into(),
                },
                Command {
                    verb: "end".into(),
                    args_raw: String::new(),
                },
            ],
        }
    }

    #[test]
    fn full_event_layout() {
        assert_eq!(
            to_game_format(&EventData::Event(event())),
            r#"3/a 1 2/H:"jaunty/-100 7/farmer 4 5 1/message \"C:\\temp\"/end""#
        );
    }

    #[test]
    fn event_without_preconditions_keeps_slash() {
        let bare = EventDef {
            id: 9,
            music: "none".into(),
            ..EventDef::default()
        };
        assert_eq!(to_game_format(&EventData::Event(bare)), r#"9/:"none/0 0/""#);
    }

    #[test]
    fn encode_events_indents_each_line() {
        let branch = EventData::Branch(cutscene_data::BranchDef {
            name: "b".into(),
            commands: Vec::new(),
        });
        assert_eq!(encode_events(&[branch.clone(), branch], "  "), "  b:\"\"\n  b:\"\"\n");
    }

    #[test]
    fn branch_with_one_empty_command_is_not_written_empty() {
        let branch = EventData::Branch(cutscene_data::BranchDef {
            name: "intro".into(),
            commands: vec![Command::default()],
        });
        assert_eq!(to_game_format(&branch), r#"intro:" ""#);

        let mut diags = crate::Diagnostics::new();
        let registry = cutscene_data::PreconditionRegistry::new();
        let decoded = crate::decode_line(&to_game_format(&branch), &registry, &mut diags);
        assert_eq!(decoded, Some(branch));
    }
}
