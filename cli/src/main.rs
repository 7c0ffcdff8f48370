use std::path::{Component, Path, PathBuf};
use std::sync::Once;

use anyhow::Context;
use cellsense_core::{Completer, CompletionItem, ManifestRegistry};
use clap::{Args, Parser, Subcommand};
use tracing::info;

mod repl;
mod session;

use session::Session;

static TRACE_INIT: Once = Once::new();
const DEFAULT_TRACE_FILTER: &str = "cellsense_core=debug,cellsense_stdlib=info,cellsense_cli=info";

#[derive(Debug, Parser)]
#[command(
    name = "cellsense",
    author,
    version,
    about = "Code completion for notebook cells",
    long_about = None
)]
struct CliArgs {
    /// Without a subcommand an interactive session starts
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Where namespaces, bindings and the environment come from
#[derive(Debug, Clone, Default, Args)]
struct SourceArgs {
    /// Session file (.json, .yaml or .toml) with bindings, environment and config
    #[arg(long, value_name = "FILE", value_parser = parse_sanitized_path)]
    session: Option<PathBuf>,

    /// Extra namespace manifest to load; may be repeated
    #[arg(long = "manifest", value_name = "FILE", value_parser = parse_sanitized_path)]
    manifests: Vec<PathBuf>,

    /// Skip the built-in standard namespaces
    #[arg(long)]
    no_stdlib: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print completions for the expression ending TEXT
    Complete {
        #[command(flatten)]
        source: SourceArgs,
        /// Emit JSON instead of one item per line
        #[arg(long)]
        json: bool,
        #[arg(value_name = "TEXT", allow_hyphen_values = true)]
        text: String,
    },
    /// Print documentation for the name ending TEXT
    Details {
        #[command(flatten)]
        source: SourceArgs,
        #[arg(long)]
        json: bool,
        #[arg(value_name = "TEXT", allow_hyphen_values = true)]
        text: String,
    },
    /// Interactive loop with tab completion
    Repl {
        #[command(flatten)]
        source: SourceArgs,
    },
}

fn sanitize_path(raw: &str) -> anyhow::Result<PathBuf> {
    let p = Path::new(raw);
    if p.components().any(|comp| matches!(comp, Component::ParentDir)) {
        return Err(anyhow::anyhow!(
            "Parent directory components ('..') are not allowed in file paths."
        ));
    }
    Ok(p.to_path_buf())
}

fn parse_sanitized_path(raw: &str) -> Result<PathBuf, String> {
    sanitize_path(raw).map_err(|e| e.to_string())
}

fn env_toggle_enabled(raw: &str) -> bool {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return false;
    }
    !(trimmed.eq_ignore_ascii_case("0") || trimmed.eq_ignore_ascii_case("false") || trimmed.eq_ignore_ascii_case("off"))
}

fn filter_expr_from(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("1")
        || trimmed.eq_ignore_ascii_case("true")
        || trimmed.eq_ignore_ascii_case("on")
    {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// `CELLSENSE_TRACE=1` logs with the default filter; any other value that is
/// not an off switch is taken as an `EnvFilter` expression.
fn maybe_init_tracing() {
    let raw = match std::env::var("CELLSENSE_TRACE") {
        Ok(value) => value,
        Err(_) => return,
    };

    if !env_toggle_enabled(&raw) {
        return;
    }

    TRACE_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        use tracing_subscriber::fmt;

        let filter_expr = filter_expr_from(&raw).or_else(|| std::env::var("RUST_LOG").ok());

        let builder = fmt().with_writer(std::io::stderr);

        let builder = match filter_expr.and_then(|expr| EnvFilter::try_new(expr).ok()) {
            Some(filter) => builder.with_env_filter(filter),
            None => builder.with_env_filter(DEFAULT_TRACE_FILTER),
        };

        let _ = builder.try_init();
    });
}

pub(crate) fn load_registry(source: &SourceArgs) -> anyhow::Result<ManifestRegistry> {
    let registry = ManifestRegistry::new();
    if !source.no_stdlib {
        cellsense_stdlib::register_stdlib_namespaces(&registry)?;
    }
    for path in &source.manifests {
        registry
            .load_path(path)
            .with_context(|| format!("Failed to load manifest '{}'", path.display()))?;
    }
    info!(namespaces = registry.len(), "registry ready");
    Ok(registry)
}

pub(crate) fn load_session(source: &SourceArgs) -> anyhow::Result<Session> {
    match &source.session {
        Some(path) => Session::load(path),
        None => Ok(Session::default()),
    }
}

pub(crate) fn render_items(items: &[CompletionItem]) -> String {
    let mut out = String::new();
    for item in items {
        out.push_str(&item.label);
        out.push_str("  ");
        out.push_str(item.kind.as_str());
        out.push_str("  ");
        out.push_str(&item.detail);
        out.push('\n');
    }
    out
}

pub(crate) fn render_details(items: &[CompletionItem]) -> String {
    let blocks: Vec<String> = items
        .iter()
        .map(|item| match &item.documentation {
            Some(doc) if !doc.is_empty() => format!("{} ({})\n{}\n\n{}", item.label, item.kind.as_str(), item.detail, doc),
            _ => format!("{} ({})\n{}", item.label, item.kind.as_str(), item.detail),
        })
        .collect();
    let mut out = blocks.join("\n\n");
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

fn print_items(items: &[CompletionItem], json: bool, render: fn(&[CompletionItem]) -> String) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(items)?);
    } else {
        print!("{}", render(items));
    }
    Ok(())
}

fn run(args: CliArgs) -> anyhow::Result<()> {
    match args.command {
        None => repl::run(&SourceArgs::default()),
        Some(Commands::Repl { source }) => repl::run(&source),
        Some(Commands::Complete { source, json, text }) => {
            let registry = load_registry(&source)?;
            let session = load_session(&source)?;
            let completer = Completer::with_config(&registry, &session.config);
            let items = completer.complete(&text, &session.bindings, &session.environment);
            print_items(&items, json, render_items)
        }
        Some(Commands::Details { source, json, text }) => {
            let registry = load_registry(&source)?;
            let session = load_session(&source)?;
            let completer = Completer::with_config(&registry, &session.config);
            let items = completer.details(&text, &session.bindings, &session.environment);
            print_items(&items, json, render_details)
        }
    }
}

fn main() {
    maybe_init_tracing();

    if let Err(e) = run(CliArgs::parse()) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
