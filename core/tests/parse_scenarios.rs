use argot_core::{Command, Error, Outcome, ParseResult, Registry, Value, ValueKind};

fn component_command() -> Command {
    let mut command = Command::new();
    command
        .create_command("component <component_name>", "desc")
        .expect("command descriptor")
        .create_option("-f --functional", "Functional Component", false)
        .expect("functional option")
        .create_option("-c --class", "Class Component", false)
        .expect("class option")
        .create_option("-t --type [type]", "Component language", "typescript")
        .expect("type option")
        .create_option("-r, --redux-connect", "Add redux connect option", false)
        .expect("redux option")
        .create_option("--cssext [cssExt]", "CSS extension", "css")
        .expect("cssext option")
        .create_option("--tag [tag...]", "Tags", Value::empty_list())
        .expect("tag option");
    command
}

fn parse(command: &Command, tokens: &[&str]) -> ParseResult {
    match command.parse_tokens(tokens).expect("tokens should parse") {
        Outcome::Parsed(result) => result,
        other => panic!("expected parsed values, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Descriptor declarations
// ---------------------------------------------------------------------------

#[test]
fn descriptor_tokens_become_arguments() {
    let cases = [
        ("one <a>", vec![("a", true, false)]),
        ("two <a> [b]", vec![("a", true, false), ("b", false, false)]),
        (
            "three [a] <b...> [c...]",
            vec![("a", false, false), ("b", true, true), ("c", false, true)],
        ),
    ];

    for (descriptor, expected) in cases {
        let mut command = Command::new();
        command.create_command(descriptor, "").unwrap();

        assert_eq!(command.arguments.len(), expected.len(), "{descriptor}");
        for (arg, (name, required, list)) in command.arguments.iter().zip(expected) {
            assert_eq!(arg.name, name);
            assert_eq!(arg.required, required);
            assert_eq!(arg.kind == ValueKind::List, list);
            assert!(!arg.name.contains("..."));
        }
    }
}

// ---------------------------------------------------------------------------
// Concrete scenarios
// ---------------------------------------------------------------------------

#[test]
fn component_widget_functional() {
    let mut command = Command::new();
    command
        .create_command("component <component_name>", "desc")
        .unwrap()
        .create_option("-f --functional", "Functional", false)
        .unwrap()
        .create_option("-t --type [type]", "Type", "typescript")
        .unwrap();

    let result = parse(&command, &["component", "widget", "-f"]);
    assert_eq!(result.arg_values, vec![Value::from("widget")]);
    assert_eq!(result.option_values.len(), 2);
    assert_eq!(result.option("functional"), Some(&Value::Bool(true)));
    assert_eq!(result.option("type"), Some(&Value::from("typescript")));
}

#[test]
fn missing_required_positional_is_an_error() {
    let command = component_command();
    let err = command.parse_tokens(&["component"]).unwrap_err();
    assert!(matches!(err, Error::MissingArgument(name) if name == "component_name"));
}

#[test]
fn missing_optional_positional_uses_default() {
    let mut command = Command::new();
    command
        .create_command("copy <source> [dest]", "")
        .unwrap()
        .create_option("--force", "", false)
        .unwrap();

    let result = parse(&command, &["copy", "a.txt"]);
    assert_eq!(result.arg_values, vec![Value::from("a.txt"), Value::from("")]);
}

#[test]
fn command_name_never_given() {
    let command = component_command();
    let err = command.parse_tokens(&["badtoken"]).unwrap_err();
    assert!(matches!(err, Error::InvalidCommand(_)));
}

#[test]
fn unknown_options_are_errors() {
    let command = component_command();

    let err = command.parse_tokens(&["component", "w", "-fz"]).unwrap_err();
    assert!(matches!(err, Error::UnknownShortOption('z')));

    let err = command
        .parse_tokens(&["component", "w", "--bogus"])
        .unwrap_err();
    assert!(matches!(err, Error::UnknownLongOption(token) if token == "--bogus"));
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[test]
fn list_option_accumulates_in_order() {
    let command = component_command();
    let result = parse(&command, &["component", "w", "--tag", "a", "--tag", "b"]);
    assert_eq!(result.option("tag"), Some(&Value::list(["a", "b"])));
}

#[test]
fn short_clusters_are_order_independent() {
    let command = component_command();
    let fc = parse(&command, &["component", "w", "-fc"]);
    let cf = parse(&command, &["component", "w", "-cf"]);
    let split = parse(&command, &["component", "w", "-c", "-f"]);

    assert_eq!(fc, cf);
    assert_eq!(fc, split);
    assert!(fc.flag("functional") && fc.flag("class"));
    assert!(!fc.flag("reduxConnect"));
}

#[test]
fn leading_help_is_always_the_empty_result() {
    let mut registry = Registry::new("argot");
    registry.register(component_command());

    let cases: [&[&str]; 4] = [&["-h"], &["--help"], &["-h", "component", "w"], &[]];
    for tokens in cases {
        let mut out = Vec::new();
        let result = registry.run("component", tokens, &mut out).unwrap();
        assert!(result.is_empty());
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Commands:"), "{tokens:?}");
    }
}

#[test]
fn long_options_match_kebab_spelling() {
    let command = component_command();
    let result = parse(
        &command,
        &["component", "w", "--redux-connect", "--cssext", "scss"],
    );
    assert!(result.flag("reduxConnect"));
    assert_eq!(result.option("cssext"), Some(&Value::from("scss")));
}

#[test]
fn rendered_usage_with_defaults_parses_back() {
    let command = component_command();

    let mut tokens: Vec<String> = vec![command.name.clone()];
    for arg in &command.arguments {
        tokens.push(arg.name.clone());
    }
    for option in &command.options {
        if let Some(argument) = &option.argument {
            if let Value::String(default) = &argument.default {
                tokens.push(option.long.clone());
                tokens.push(default.clone());
            }
        }
    }

    let outcome = command.parse_tokens(&tokens).expect("round trip should parse");
    let Outcome::Parsed(result) = outcome else {
        panic!("expected parsed values");
    };
    assert_eq!(result.option("type"), Some(&Value::from("typescript")));
    assert_eq!(result.option("cssext"), Some(&Value::from("css")));
}

#[test]
fn option_values_follow_declaration_order() {
    let command = component_command();
    let result = parse(&command, &["component", "w"]);
    let names: Vec<&str> = result.option_values.keys().map(String::as_str).collect();
    assert_eq!(
        names,
        vec!["functional", "class", "type", "reduxConnect", "cssext", "tag"]
    );
    assert_eq!(result.option("tag"), Some(&Value::empty_list()));
}
