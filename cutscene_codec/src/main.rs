//! CLI entry point for cutscene_codec.
//! Usage: cargo run -p cutscene_codec -- decode events.txt --out events.ron

use std::path::{Path, PathBuf};
use std::{env, fs, process};

use anyhow::{Context, Result};
use cutscene_codec::data_paths::data_path;
use cutscene_codec::{
    CODEC_VERSION, CodecConfig, Diagnostics, decode_events, decode_line, encode_events, load_config, load_types,
    to_game_format,
};
use cutscene_data::{EventData, PreconditionRegistry, normalize_events, validate_events};
use log::info;

const USAGE: &str = "Usage:
  cutscene_codec decode <events.txt> [--types <file>] [--config <file>] [--out <events.ron>]
  cutscene_codec encode <events.ron> [--config <file>] [--out <events.txt>]
  cutscene_codec lint <events.txt> [--types <file>] [--config <file>] [--deny-warnings]
  cutscene_codec roundtrip <events.txt> [--types <file>] [--config <file>]
  cutscene_codec normalize <events.txt> [--types <file>] [--config <file>] [--out <events.txt>]
  cutscene_codec version";

/// Flags shared by all subcommands.
#[derive(Debug, Default)]
struct Options {
    input: Option<PathBuf>,
    out: Option<PathBuf>,
    types: Option<PathBuf>,
    config: Option<PathBuf>,
    deny_warnings: bool,
}

impl Options {
    fn parse(args: &[String]) -> Result<Options, String> {
        let mut opts = Options::default();
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--out" => opts.out = Some(flag_value(&mut iter, "--out")?),
                "--types" => opts.types = Some(flag_value(&mut iter, "--types")?),
                "--config" => opts.config = Some(flag_value(&mut iter, "--config")?),
                "--deny-warnings" => opts.deny_warnings = true,
                s if s.starts_with("--") => return Err(format!("unknown flag: {s}")),
                s => {
                    if opts.input.is_none() {
                        opts.input = Some(PathBuf::from(s));
                    }
                },
            }
        }
        Ok(opts)
    }

    fn input(&self) -> Result<&Path> {
        self.input.as_deref().context("missing input file")
    }

    fn config(&self) -> CodecConfig {
        let path = self.config.clone().unwrap_or_else(|| data_path("codec.toml"));
        load_config(&path)
    }
}

fn flag_value<'a>(iter: &mut impl Iterator<Item = &'a String>, flag: &str) -> Result<PathBuf, String> {
    iter.next()
        .map(PathBuf::from)
        .ok_or_else(|| format!("{flag} requires a filepath"))
}

fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().skip(1).collect();

    // Accept both `<bin> <cmd> ...` and `<bin> -- <cmd> ...`.
    let args = match args.split_first() {
        Some((first, rest)) if first == "--" => rest,
        _ => &args[..],
    };
    let Some((cmd, rest)) = args.split_first() else {
        eprintln!("{USAGE}");
        process::exit(2);
    };
    let opts = Options::parse(rest).unwrap_or_else(|msg| {
        eprintln!("{msg}\n{USAGE}");
        process::exit(2);
    });

    let result = match cmd.as_str() {
        "decode" => run_decode(&opts),
        "encode" => run_encode(&opts),
        "lint" => run_lint(&opts),
        "roundtrip" => run_roundtrip(&opts),
        "normalize" => run_normalize(&opts),
        "version" | "--version" => {
            println!("cutscene_codec {CODEC_VERSION}");
            Ok(0)
        },
        other => {
            eprintln!("unknown command: {other}\n{USAGE}");
            process::exit(2);
        },
    };
    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e:#}");
            process::exit(1);
        },
    }
}

fn load_registry(opts: &Options, config: &CodecConfig) -> PreconditionRegistry {
    let path = opts.types.as_deref().unwrap_or(config.types_file.as_path());
    load_types(path)
}

fn read_input(opts: &Options) -> Result<String> {
    let path = opts.input()?;
    fs::read_to_string(path).with_context(|| format!("unable to read '{}'", path.display()))
}

fn write_output(opts: &Options, text: &str) -> Result<()> {
    match &opts.out {
        Some(out) => fs::write(out, text).with_context(|| format!("writing '{}'", out.display())),
        None => {
            println!("{text}");
            Ok(())
        },
    }
}

fn print_diagnostics(diagnostics: &Diagnostics) {
    for diagnostic in diagnostics.iter() {
        eprintln!("warning: {diagnostic}");
    }
}

fn run_decode(opts: &Options) -> Result<i32> {
    let config = opts.config();
    let registry = load_registry(opts, &config);
    let src = read_input(opts)?;

    let decoded = decode_events(&src, &registry);
    print_diagnostics(&decoded.diagnostics);
    let events = decoded.into_data();
    let ron = ron::ser::to_string_pretty(&events, ron::ser::PrettyConfig::default())
        .context("serializing decoded events")?;
    write_output(opts, &ron)?;
    info!("decoded {} events", events.len());
    Ok(0)
}

fn run_encode(opts: &Options) -> Result<i32> {
    let config = opts.config();
    let src = read_input(opts)?;
    let events: Vec<EventData> = ron::from_str(&src).context("parsing events RON")?;
    write_output(opts, encode_events(&events, &config.indent).trim_end())?;
    info!("encoded {} events", events.len());
    Ok(0)
}

fn run_lint(opts: &Options) -> Result<i32> {
    let config = opts.config();
    let registry = load_registry(opts, &config);
    let src = read_input(opts)?;

    let decoded = decode_events(&src, &registry);
    print_diagnostics(&decoded.diagnostics);
    let warnings = decoded.diagnostics.len();
    let events = decoded.into_data();

    let errors = validate_events(&events, &registry);
    for err in &errors {
        eprintln!("error: {err}");
    }

    eprintln!(
        "lint: {} events, {} warning(s), {} error(s)",
        events.len(),
        warnings,
        errors.len()
    );
    let deny = opts.deny_warnings || config.deny_warnings;
    if !errors.is_empty() || (deny && warnings > 0) {
        return Ok(1);
    }
    Ok(0)
}

fn run_roundtrip(opts: &Options) -> Result<i32> {
    let config = opts.config();
    let registry = load_registry(opts, &config);
    let src = read_input(opts)?;

    let decoded = decode_events(&src, &registry);
    let mut mismatches = 0;
    for event in &decoded.events {
        let encoded = to_game_format(&event.data);
        let mut scratch = Diagnostics::new();
        let again = decode_line(&encoded, &registry, &mut scratch);
        if again.as_ref() != Some(&event.data) {
            mismatches += 1;
            eprintln!("line {}: re-encoded as {encoded:?} does not decode to the same event", event.line);
        }
    }

    eprintln!(
        "roundtrip: {} events checked, {} mismatch(es)",
        decoded.events.len(),
        mismatches
    );
    Ok(i32::from(mismatches > 0))
}

fn run_normalize(opts: &Options) -> Result<i32> {
    let config = opts.config();
    let registry = load_registry(opts, &config);
    let src = read_input(opts)?;

    let decoded = decode_events(&src, &registry);
    print_diagnostics(&decoded.diagnostics);
    let mut events = decoded.into_data();
    let changed = normalize_events(&mut events, &registry);
    write_output(opts, encode_events(&events, &config.indent).trim_end())?;
    eprintln!("normalize: {} events, {changed} precondition(s) rewritten", events.len());
    Ok(0)
}
