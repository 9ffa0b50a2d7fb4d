use std::io::{self, Write};
use std::path::PathBuf;

use argot_core::{ActionError, Command, OptionValues, Registry, Value};
use argot_scaffold::{ComponentSpec, ScaffoldConfig, write_component};
use futures::FutureExt;
use futures::future::BoxFuture;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const PROGRAM: &str = "argot";
const COMPONENT: &str = "component";

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(args: &[String]) -> Result<(), String> {
    let cwd = std::env::current_dir().map_err(|e| format!("cannot read working directory: {e}"))?;
    let config = ScaffoldConfig::discover(&cwd).map_err(|e| e.to_string())?;
    debug!(?config, "Loaded scaffold config");

    let mut registry = Registry::new(PROGRAM);
    registry.register(component_command(&config).map_err(|e| e.to_string())?);

    let mut stdout = io::stdout();
    futures::executor::block_on(registry.run_async(COMPONENT, args, &mut stdout))
        .map_err(|e| e.to_string())?;
    stdout.flush().map_err(|e| e.to_string())?;
    Ok(())
}

/// `component <component_name>` with defaults taken from the project config.
fn component_command(config: &ScaffoldConfig) -> argot_core::Result<Command> {
    let mut command = Command::new();
    command
        .create_command(
            "component <component_name>",
            "Creates a React component in its own directory",
        )?
        .create_option("-f --functional", "Create a functional component", false)?
        .create_option("-c --class", "Create a class component", false)?
        .create_option(
            "-t --type [type]",
            "Component language: typescript or javascript",
            config.language.as_str(),
        )?
        .create_option(
            "-r --redux-connect",
            "Connect the component to a redux store",
            false,
        )?
        .create_option(
            "--cssext [cssExt]",
            "Stylesheet extension",
            config.css_extension.as_str(),
        )?
        .create_option("--force", "Replace an existing component", false)?
        .create_option(
            "-o --out-dir [dir]",
            "Directory the component folder is created in",
            config.output_dir.to_string_lossy().into_owned(),
        )?
        .create_async_action(scaffold);
    Ok(command)
}

fn scaffold(args: Vec<Value>, options: OptionValues) -> BoxFuture<'static, Result<(), ActionError>> {
    async move {
        let name = args.first().and_then(Value::as_str).unwrap_or_default();
        let spec = ComponentSpec::from_options(name, &options)?;
        let root = options
            .get("outDir")
            .and_then(Value::as_str)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        let files = write_component(&root, &spec)?;
        println!("created {}", files.source.display());
        println!("created {}", files.stylesheet.display());
        Ok::<(), ActionError>(())
    }
    .boxed()
}
