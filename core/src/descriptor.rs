//! Descriptor mini-language patterns.
//!
//! ```text
//! <name>        required positional
//! [name]        optional positional
//! <name...>     list-valued (also inside [])
//! -x            short form (clusters like -abc when parsing tokens)
//! --kebab-name  long form, canonical name is kebabName
//! ```

use std::sync::LazyLock;

use regex::Regex;

static PATTERNS: LazyLock<DescriptorPatterns> = LazyLock::new(DescriptorPatterns::new);

struct DescriptorPatterns {
    required_arg: Regex,
    optional_arg: Regex,
    embedded_arg: Regex,
    short_cluster: Regex,
    descriptor_short: Regex,
    long_form: Regex,
}

impl DescriptorPatterns {
    fn new() -> Self {
        Self {
            required_arg: Regex::new(r"^<([A-Za-z_][A-Za-z0-9_]*)(\.\.\.)?>$")
                .expect("static regex must compile"),
            optional_arg: Regex::new(r"^\[([A-Za-z_][A-Za-z0-9_]*)(\.\.\.)?\]$")
                .expect("static regex must compile"),
            embedded_arg: Regex::new(
                r"<([A-Za-z_][A-Za-z0-9_]*)(\.\.\.)?>|\[([A-Za-z_][A-Za-z0-9_]*)(\.\.\.)?\]",
            )
            .expect("static regex must compile"),
            short_cluster: Regex::new(r"^-([A-Za-z]+)$").expect("static regex must compile"),
            descriptor_short: Regex::new(r"^-([A-Za-z])(?:[\s,]|$)")
                .expect("static regex must compile"),
            long_form: Regex::new(r"--[A-Za-z]+(?:-[A-Za-z0-9]+)*").expect("static regex must compile"),
        }
    }
}

/// A positional or option-argument placeholder found in a descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub name: String,
    pub required: bool,
    pub list: bool,
}

/// Parses a standalone positional token such as `<name>` or `[files...]`.
///
/// Returns `None` when the token is neither form.
pub fn positional(token: &str) -> Option<Placeholder> {
    if let Some(caps) = PATTERNS.required_arg.captures(token) {
        return Some(Placeholder {
            name: caps[1].to_string(),
            required: true,
            list: caps.get(2).is_some(),
        });
    }
    PATTERNS
        .optional_arg
        .captures(token)
        .map(|caps| Placeholder {
            name: caps[1].to_string(),
            required: false,
            list: caps.get(2).is_some(),
        })
}

/// Finds the first placeholder anywhere in a descriptor, e.g. the `[type]`
/// of `-t --type [type]`.
pub fn embedded(descriptor: &str) -> Option<Placeholder> {
    let caps = PATTERNS.embedded_arg.captures(descriptor)?;
    if let Some(name) = caps.get(1) {
        Some(Placeholder {
            name: name.as_str().to_string(),
            required: true,
            list: caps.get(2).is_some(),
        })
    } else {
        Some(Placeholder {
            name: caps.get(3)?.as_str().to_string(),
            required: false,
            list: caps.get(4).is_some(),
        })
    }
}

/// Short form declared at the start of an option descriptor (`-f --force`).
pub fn descriptor_short(descriptor: &str) -> Option<char> {
    PATTERNS
        .descriptor_short
        .captures(descriptor.trim_start())
        .and_then(|caps| caps[1].chars().next())
}

/// First `--long-form` spelling in a descriptor.
pub fn descriptor_long(descriptor: &str) -> Option<&str> {
    PATTERNS.long_form.find(descriptor).map(|m| m.as_str())
}

/// Characters of a short-form cluster token (`-abc` yields `abc`).
pub fn short_cluster(token: &str) -> Option<&str> {
    PATTERNS
        .short_cluster
        .captures(token)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Long form of a token, without the leading dashes (`--dry-run` yields `dry-run`).
pub fn long_token(token: &str) -> Option<&str> {
    let found = PATTERNS.long_form.find(token)?;
    (found.start() == 0 && found.end() == token.len()).then(|| &token[2..])
}

/// Converts kebab segments to lower camel case (`redux-connect` → `reduxConnect`).
pub fn kebab_to_camel(kebab: &str) -> String {
    let mut out = String::with_capacity(kebab.len());
    for segment in kebab.split('-').filter(|s| !s.is_empty()) {
        if out.is_empty() {
            out.push_str(segment);
            continue;
        }
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Removes quote characters left in a token by the invoking shell.
pub fn strip_quotes(token: &str) -> String {
    token.replace('"', "")
}
