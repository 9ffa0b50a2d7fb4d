//! Component source rendering.
//!
//! Output is plain text assembled line by line; indentation uses tabs.

use crate::spec::{ComponentSpec, Language, Style};

/// Renders the component source file for `spec`.
///
/// # Examples
///
/// ```
/// use argot_scaffold::{ComponentSpec, Language, Style, render_component};
///
/// let spec = ComponentSpec {
///     name: "user-card".into(),
///     style: Style::Functional,
///     language: Language::JavaScript,
///     redux_connect: false,
///     css_extension: "css".into(),
///     force: false,
/// };
/// let source = render_component(&spec);
/// assert!(source.contains("export const UserCard = (props) => {"));
/// ```
pub fn render_component(spec: &ComponentSpec) -> String {
    let identifier = spec.identifier();
    let typed = spec.language == Language::TypeScript;
    let mut src = Source::default();

    match spec.style {
        Style::Functional => src.line(r#"import { useState } from "react";"#),
        Style::Class => src.line(r#"import { Component } from "react";"#),
    }
    if spec.redux_connect {
        src.line(r#"import { connect } from "react-redux";"#);
    }
    src.line(&format!(r#"import "./{}.{}";"#, spec.name, spec.css_extension));
    src.blank();

    if typed {
        src.line("interface IProps {}");
        src.blank();
        src.line("interface IState {}");
        src.blank();
    }

    let export = if spec.redux_connect { "" } else { "export " };
    match spec.style {
        Style::Functional => {
            let props = if typed { "props: IProps" } else { "props" };
            let state = if typed { "useState<IState>({})" } else { "useState({})" };
            src.line(&format!("{export}const {identifier} = ({props}) => {{"));
            src.line(&format!("\tconst [state, setState] = {state};"));
            src.blank();
            src.line("\treturn (<div></div>);");
            src.line("};");
        }
        Style::Class => {
            let generics = if typed { "<IProps, IState>" } else { "" };
            let props = if typed { "props: IProps" } else { "props" };
            src.line(&format!("{export}class {identifier} extends Component{generics} {{"));
            src.line(&format!("\tconstructor({props}) {{"));
            src.line("\t\tsuper(props);");
            src.line("\t\tthis.state = {};");
            src.line("\t}");
            src.blank();
            src.line("\trender() {");
            src.line("\t\treturn (<div></div>);");
            src.line("\t}");
            src.line("}");
        }
    }

    if spec.redux_connect {
        let any = if typed { ": any" } else { "" };
        src.blank();
        src.line(&format!("const mapStateToProps = (state{any}, ownProps{any}) => {{"));
        src.line("\treturn {};");
        src.line("};");
        src.blank();
        src.line(&format!("const mapDispatchToProps = (dispatch{any}) => {{"));
        src.line("\treturn {};");
        src.line("};");
        src.blank();
        src.line(&format!(
            "export default connect(mapStateToProps, mapDispatchToProps)({identifier});"
        ));
    }

    src.finish()
}

#[derive(Default)]
struct Source {
    text: String,
}

impl Source {
    fn line(&mut self, line: &str) {
        self.text.push_str(line);
        self.text.push('\n');
    }

    fn blank(&mut self) {
        self.text.push('\n');
    }

    fn finish(self) -> String {
        self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(style: Style, language: Language, redux_connect: bool) -> ComponentSpec {
        ComponentSpec {
            name: "user-card".to_string(),
            style,
            language,
            redux_connect,
            css_extension: "scss".to_string(),
            force: false,
        }
    }

    #[test]
    fn test_functional_typescript() {
        let source = render_component(&spec(Style::Functional, Language::TypeScript, false));

        assert!(source.starts_with("import { useState } from \"react\";\n"));
        assert!(source.contains("import \"./user-card.scss\";"));
        assert!(source.contains("interface IProps {}"));
        assert!(source.contains("export const UserCard = (props: IProps) => {"));
        assert!(source.contains("useState<IState>({})"));
        assert!(!source.contains("connect"));
    }

    #[test]
    fn test_class_javascript() {
        let source = render_component(&spec(Style::Class, Language::JavaScript, false));

        assert!(source.contains("import { Component } from \"react\";"));
        assert!(source.contains("export class UserCard extends Component {"));
        assert!(source.contains("\tconstructor(props) {"));
        assert!(!source.contains("interface"));
    }

    #[test]
    fn test_redux_connect_exports_default() {
        let source = render_component(&spec(Style::Class, Language::TypeScript, true));

        assert!(source.contains("import { connect } from \"react-redux\";"));
        assert!(source.contains("\nclass UserCard extends Component<IProps, IState> {"));
        assert!(!source.contains("export class"));
        assert!(source.contains("const mapStateToProps = (state: any, ownProps: any) => {"));
        assert!(source.trim_end().ends_with(
            "export default connect(mapStateToProps, mapDispatchToProps)(UserCard);"
        ));
    }
}
