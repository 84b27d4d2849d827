use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

use serde_json::{Map, Value};
use tracing_subscriber::EnvFilter;

use searchattr_core::config::{resolve_config_dir, ConfigSource};
use searchattr_core::{apply_type_map, build_type_map, AttributePayload, Error, SearchAttributes, TypeMap};
use searchattr_index::{es_mapping, es_type};

const USAGE: &str = "Usage: searchattr [--config-dir DIR] <types|get <name>|mapping|apply <file.json>>";

#[derive(Debug, PartialEq)]
enum Command {
    Types,
    Get(String),
    Mapping,
    Apply(String),
}

/// Splits the arguments (program name excluded) into the config directory
/// argument and a command. Errors carry the message to print.
fn parse_args(mut args: Vec<String>) -> Result<(Option<String>, Command), String> {
    let mut config_dir = None;
    if args.first().map(String::as_str) == Some("--config-dir") {
        args.remove(0);
        if args.is_empty() { return Err(USAGE.to_string()); }
        config_dir = Some(args.remove(0));
    }
    if args.is_empty() { return Err(USAGE.to_string()); }
    let cmd = args.remove(0);
    let command = match cmd.as_str() {
        "types" => Command::Types,
        "get" => Command::Get(args.first().cloned().ok_or("Usage: searchattr get <name>")?),
        "mapping" => Command::Mapping,
        "apply" => Command::Apply(args.first().cloned().ok_or("Usage: searchattr apply <file.json>")?),
        _ => return Err(format!("Unknown command: {}\n{}", cmd, USAGE)),
    };
    Ok((config_dir, command))
}

fn load_type_map(config_dir: PathBuf) -> anyhow::Result<TypeMap> {
    let declared = ConfigSource::new(&config_dir).try_search_attributes()?;
    let snapshot = move || declared.clone();
    let type_map = build_type_map(Some(&snapshot))?;
    if type_map.is_empty() {
        tracing::info!(dir = %config_dir.display(), "no search attributes configured");
    } else {
        tracing::info!(count = type_map.len(), "loaded search attribute types");
    }
    Ok(type_map)
}

fn apply_file(type_map: &TypeMap, path: &str) -> anyhow::Result<Value> {
    let raw: Map<String, Value> = serde_json::from_str(&std::fs::read_to_string(path)?)?;
    let mut fields = HashMap::with_capacity(raw.len());
    for (name, value) in raw { fields.insert(name, AttributePayload::new(serde_json::to_vec(&value)?)); }
    let mut attributes = SearchAttributes::new(fields);
    apply_type_map(&mut attributes, type_map);

    let mut out = Map::new();
    for (name, payload) in &attributes.indexed_fields {
        let stamped = match payload.metadata_type() {
            Some(t) => Value::String(t?.to_string()),
            None => Value::Null,
        };
        out.insert(name.clone(), stamped);
    }
    Ok(Value::Object(out))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(std::io::stderr).init();
    let (config_dir, command) = parse_args(env::args().skip(1).collect()).unwrap_or_else(|msg| {
        eprintln!("{}", msg);
        std::process::exit(1)
    });
    let cwd = env::current_dir()?;
    let config_dir = config_dir.map_or_else(|| cwd.clone(), |dir| resolve_config_dir(&cwd, &dir));
    let type_map = load_type_map(config_dir)?;
    match command {
        Command::Types => {
            for (name, t) in type_map.iter() { println!("{:<32} {:<10} {}", name, t, es_type(t)); }
        }
        Command::Get(name) => match type_map.get_type(&name) {
            Ok(t) => println!("{}", t),
            Err(Error::TypeMapEmpty) => { eprintln!("Search attribute typing is not configured."); std::process::exit(2); }
            Err(e) => return Err(e.into()),
        },
        Command::Mapping => println!("{}", serde_json::to_string_pretty(&es_mapping(&type_map))?),
        Command::Apply(path) => println!("{}", serde_json::to_string_pretty(&apply_file(&type_map, &path)?)?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> { list.iter().map(|s| s.to_string()).collect() }

    #[test]
    fn commands_parse_with_and_without_config_dir() {
        assert_eq!(parse_args(args(&["types"])), Ok((None, Command::Types)));
        assert_eq!(
            parse_args(args(&["--config-dir", "~/conf", "get", "CustomKeywordField"])),
            Ok((Some("~/conf".to_string()), Command::Get("CustomKeywordField".to_string())))
        );
        assert_eq!(parse_args(args(&["apply", "attrs.json"])), Ok((None, Command::Apply("attrs.json".to_string()))));
    }

    #[test]
    fn unknown_command_is_rejected_before_any_config_is_read() {
        // the directory does not exist; parsing must fail on the command alone
        let err = parse_args(args(&["--config-dir", "/nonexistent/searchattr", "bogus"])).expect_err("unknown command");
        assert!(err.starts_with("Unknown command: bogus"));
        assert!(err.contains(USAGE));
    }

    #[test]
    fn missing_operands_report_usage() {
        assert!(parse_args(args(&[])).is_err());
        assert!(parse_args(args(&["--config-dir"])).is_err());
        assert_eq!(parse_args(args(&["get"])), Err("Usage: searchattr get <name>".to_string()));
    }

    #[test]
    fn broken_config_surfaces_as_error() {
        let tmp = tempfile::TempDir::new().expect("tempdir");
        std::fs::write(tmp.path().join("config.toml"), "search_attributes = 5\n").expect("write config");
        assert!(load_type_map(tmp.path().to_path_buf()).is_err());
    }
}
