use cutscene_data::Command;

/// Decode the `/`-separated command stream, ignoring the first `skip` fields.
///
/// Full event values carry music, viewport and actors in front of their
/// commands and are decoded with `skip = 3`; branch values are all commands.
/// Empty fields are kept so that field positions stay stable.
pub fn parse_commands(stream: &str, skip: usize) -> Vec<Command> {
    if stream.is_empty() {
        return Vec::new();
    }
    stream.split('/').skip(skip).map(parse_command).collect()
}

/// Split one command into its verb and the raw text after the first space.
pub fn parse_command(token: &str) -> Command {
    match token.split_once(' ') {
        Some((verb, args)) => Command {
            verb: verb.to_string(),
            args_raw: args.to_string(),
        },
        None => Command {
            verb: token.to_string(),
            args_raw: String::new(),
        },
    }
}
