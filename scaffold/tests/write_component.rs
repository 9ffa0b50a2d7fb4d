use std::fs;

use argot_core::{OptionValues, Value};
use argot_scaffold::{
    ComponentSpec, Language, ScaffoldConfig, ScaffoldError, Style, write_component,
};

fn spec(name: &str, style: Style, force: bool) -> ComponentSpec {
    ComponentSpec {
        name: name.to_string(),
        style,
        language: Language::TypeScript,
        redux_connect: false,
        css_extension: "css".to_string(),
        force,
    }
}

// ---------------------------------------------------------------------------
// Writing
// ---------------------------------------------------------------------------

#[test]
fn test_write_creates_directory_and_files() {
    let dir = tempfile::tempdir().unwrap();
    let files = write_component(dir.path(), &spec("user-card", Style::Functional, false)).unwrap();

    assert_eq!(files.dir, dir.path().join("user-card"));
    assert_eq!(files.source, dir.path().join("user-card/user-card.tsx"));
    assert_eq!(files.stylesheet, dir.path().join("user-card/user-card.css"));

    let source = fs::read_to_string(&files.source).unwrap();
    assert!(source.contains("export const UserCard"));
    assert_eq!(fs::read_to_string(&files.stylesheet).unwrap(), "");
}

#[test]
fn test_write_refuses_existing_directory() {
    let dir = tempfile::tempdir().unwrap();
    write_component(dir.path(), &spec("widget", Style::Functional, false)).unwrap();

    let err = write_component(dir.path(), &spec("widget", Style::Class, false)).unwrap_err();
    assert!(matches!(err, ScaffoldError::AlreadyExists(path) if path == dir.path().join("widget")));
}

#[test]
fn test_force_replaces_existing_directory() {
    let dir = tempfile::tempdir().unwrap();
    write_component(dir.path(), &spec("widget", Style::Functional, false)).unwrap();
    fs::write(dir.path().join("widget/stale.txt"), "old").unwrap();

    let mut js = spec("widget", Style::Class, true);
    js.language = Language::JavaScript;
    let files = write_component(dir.path(), &js).unwrap();

    assert!(!dir.path().join("widget/stale.txt").exists());
    assert!(!dir.path().join("widget/widget.tsx").exists());
    let source = fs::read_to_string(files.source).unwrap();
    assert!(source.contains("export class Widget extends Component {"));
}

#[test]
fn test_force_keeps_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("widget");
    fs::write(&path, "not a component").unwrap();

    let err = write_component(dir.path(), &spec("widget", Style::Functional, true)).unwrap_err();
    assert!(matches!(err, ScaffoldError::AlreadyExists(found) if found == path));
    assert_eq!(fs::read_to_string(&path).unwrap(), "not a component");
}

// ---------------------------------------------------------------------------
// From parsed options
// ---------------------------------------------------------------------------

#[test]
fn test_parsed_options_to_files() {
    let mut command = argot_core::Command::new();
    command
        .create_command("component <component_name>", "")
        .unwrap()
        .create_option("-f --functional", "", false)
        .unwrap()
        .create_option("-c --class", "", false)
        .unwrap()
        .create_option("-t --type [type]", "", "typescript")
        .unwrap()
        .create_option("-r --redux-connect", "", false)
        .unwrap()
        .create_option("--cssext [cssExt]", "", "css")
        .unwrap();

    let result = command
        .parse_tokens(&["component", "side-panel", "-c", "--redux-connect", "-t", "js"])
        .unwrap()
        .into_result();
    let name = result.arg_values[0].as_str().unwrap();
    let spec = ComponentSpec::from_options(name, &result.option_values).unwrap();

    assert_eq!(spec.style, Style::Class);
    assert_eq!(spec.language, Language::JavaScript);
    assert!(spec.redux_connect);

    let dir = tempfile::tempdir().unwrap();
    let files = write_component(dir.path(), &spec).unwrap();
    let source = fs::read_to_string(files.source).unwrap();
    assert!(source.contains("\nclass SidePanel extends Component {"));
    assert!(source.contains("(SidePanel);"));
}

#[test]
fn test_config_defaults_flow_into_spec() {
    let dir = tempfile::tempdir().unwrap();
    let config = ScaffoldConfig {
        language: Language::JavaScript,
        css_extension: "sass".to_string(),
        ..ScaffoldConfig::default()
    };
    config.save(dir.path().join(argot_scaffold::CONFIG_FILE_NAME)).unwrap();

    let loaded = ScaffoldConfig::discover(dir.path()).unwrap();
    let mut options = OptionValues::new();
    options.insert("functional".to_string(), Value::Bool(true));
    options.insert("type".to_string(), Value::from(loaded.language.as_str()));
    options.insert("cssext".to_string(), Value::from(loaded.css_extension.as_str()));

    let spec = ComponentSpec::from_options("card", &options).unwrap();
    let files = write_component(dir.path(), &spec).unwrap();
    assert_eq!(files.source, dir.path().join("card/card.jsx"));
    assert_eq!(files.stylesheet, dir.path().join("card/card.sass"));
}
