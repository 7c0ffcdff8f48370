use anyhow::{Context as _, Result, anyhow, bail};
use cellsense_core::token::Chain;
use cellsense_core::{Completer as Engine, ImportFilter, ManifestRegistry, SymbolRef, Value};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use crate::session::Session;
use crate::{SourceArgs, load_registry, load_session, render_details, render_items};

fn print_repl_help() {
    eprintln!("Type an expression and press TAB to complete, or enter it to list completions.");
    eprintln!("Commands:");
    eprintln!("  :bind NAME JSON        bind a variable (`{{\"$namespace\": \"Enum\"}}` for namespaces)");
    eprintln!("  :hide NAME             mark a binding as compiler-generated");
    eprintln!("  :alias SHORT FULL      alias a namespace");
    eprintln!("  :import NS [only|except f/1,g/2]");
    eprintln!("  :require NS");
    eprintln!("  :ns NAME               set the namespace being defined");
    eprintln!("  :doc TEXT              show documentation for the name ending TEXT");
    eprintln!("  :env                   show bindings and environment");
    eprintln!("  :help, :quit | :exit | :q");
}

/// Everything a completion request needs, mutated by REPL commands
pub(crate) struct ReplState {
    pub(crate) registry: ManifestRegistry,
    pub(crate) session: Session,
}

impl ReplState {
    fn engine(&self) -> Engine<'_> {
        Engine::with_config(&self.registry, &self.session.config)
    }
}

/// What the loop should do after a line was handled
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Outcome {
    Continue,
    Quit,
}

fn parse_symbol_refs(raw: &str) -> Result<Vec<SymbolRef>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|entry| {
            let (name, arity) = entry
                .rsplit_once('/')
                .ok_or_else(|| anyhow!("expected name/arity, got '{}'", entry))?;
            let arity: u8 = arity
                .parse()
                .with_context(|| format!("invalid arity in '{}'", entry))?;
            Ok(SymbolRef::new(name, arity))
        })
        .collect()
}

pub(crate) fn parse_import(args: &str) -> Result<(String, ImportFilter)> {
    let mut parts = args.split_whitespace();
    let namespace = parts.next().ok_or_else(|| anyhow!("usage: :import NS [only|except f/1,g/2]"))?;
    let filter = match parts.next() {
        None => ImportFilter::All,
        Some(mode) => {
            let refs = parse_symbol_refs(&parts.collect::<Vec<_>>().join(""))?;
            match mode {
                "only" => ImportFilter::Only(refs),
                "except" => ImportFilter::Except(refs),
                other => bail!("unknown import filter '{}'", other),
            }
        }
    };
    Ok((namespace.to_string(), filter))
}

fn two_args<'a>(args: &'a str, usage: &str) -> Result<(&'a str, &'a str)> {
    let args = args.trim();
    let (first, rest) = args.split_once(char::is_whitespace).ok_or_else(|| anyhow!("usage: {}", usage))?;
    let rest = rest.trim();
    if rest.is_empty() {
        bail!("usage: {}", usage);
    }
    Ok((first, rest))
}

fn one_arg<'a>(args: &'a str, usage: &str) -> Result<&'a str> {
    let arg = args.trim();
    if arg.is_empty() || arg.contains(char::is_whitespace) {
        bail!("usage: {}", usage);
    }
    Ok(arg)
}

/// Apply one `:command` line to the state, returning what to print
pub(crate) fn apply_command(state: &mut ReplState, line: &str) -> Result<(Outcome, String)> {
    let (command, args) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let env = &mut state.session.environment;
    let output = match command {
        ":quit" | ":exit" | ":q" => return Ok((Outcome::Quit, String::new())),
        ":help" => {
            print_repl_help();
            String::new()
        }
        ":bind" => {
            let (name, json) = two_args(args, ":bind NAME JSON")?;
            let raw: serde_json::Value =
                serde_json::from_str(json).with_context(|| format!("invalid JSON for '{}'", name))?;
            state.session.bindings.insert(name, Value::from(raw));
            format!("bound {}", name)
        }
        ":hide" => {
            let name = one_arg(args, ":hide NAME")?;
            if !state.session.bindings.hide(name) {
                bail!("no binding named '{}'", name);
            }
            format!("hid {}", name)
        }
        ":alias" => {
            let (short, full) = two_args(args, ":alias SHORT FULL")?;
            env.aliases.insert(short.to_string(), full.to_string());
            format!("alias {} -> {}", short, full)
        }
        ":import" => {
            let (namespace, filter) = parse_import(args)?;
            *env = std::mem::take(env).with_import(namespace.clone(), filter);
            format!("imported {}", namespace)
        }
        ":require" => {
            let namespace = one_arg(args, ":require NS")?;
            *env = std::mem::take(env).with_require(namespace);
            format!("required {}", namespace)
        }
        ":ns" => {
            let namespace = one_arg(args, ":ns NAME")?;
            env.namespace = Some(namespace.to_string());
            format!("in {}", namespace)
        }
        ":doc" => render_details(&state.engine().details(
            args.trim(),
            &state.session.bindings,
            &state.session.environment,
        )),
        ":env" => {
            let mut names: Vec<&str> = state.session.bindings.visible().map(|(name, _)| name).collect();
            names.sort_unstable();
            format!(
                "namespaces: {}\nbindings: {}\n{}",
                state.registry.names().join(", "),
                names.join(", "),
                serde_json::to_string_pretty(&state.session.environment)?
            )
        }
        other => bail!("Unknown command '{}'. Type :help for help.", other),
    };
    Ok((Outcome::Continue, output))
}

/// Tab completion backed by the engine
struct ReplHelper {
    state: ReplState,
}

impl Completer for ReplHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let before = &line[..pos];
        let hint_len = Chain::parse(before).hint.len();
        let items = self
            .state
            .engine()
            .complete(before, &self.state.session.bindings, &self.state.session.environment);
        let pairs = items
            .into_iter()
            .map(|item| Pair {
                display: item.label,
                replacement: item.insert_text,
            })
            .collect();
        Ok((pos - hint_len, pairs))
    }
}

impl Hinter for ReplHelper {
    type Hint = String;
}

impl Highlighter for ReplHelper {}

impl Validator for ReplHelper {}

impl Helper for ReplHelper {}

pub(crate) fn run(source: &SourceArgs) -> Result<()> {
    let state = ReplState {
        registry: load_registry(source)?,
        session: load_session(source)?,
    };

    let mut rl: Editor<ReplHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(ReplHelper { state }));

    print_repl_help();

    loop {
        let line = match rl.readline("cell> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                eprintln!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!();
                return Ok(());
            }
            Err(e) => {
                eprintln!("Readline error: {}", e);
                continue;
            }
        };

        let trimmed = line.trim_end();
        if trimmed.trim().is_empty() {
            continue;
        }
        let _ = rl.add_history_entry(trimmed);

        let Some(helper) = rl.helper_mut() else {
            return Ok(());
        };
        let state = &mut helper.state;

        if is_command(trimmed) {
            match apply_command(state, trimmed) {
                Ok((Outcome::Quit, _)) => return Ok(()),
                Ok((Outcome::Continue, output)) => {
                    if !output.is_empty() {
                        println!("{}", output.trim_end());
                    }
                }
                Err(e) => eprintln!("Error: {e:#}"),
            }
            continue;
        }

        let items = state
            .engine()
            .complete(trimmed, &state.session.bindings, &state.session.environment);
        print!("{}", render_items(&items));
    }
}

// `:lists.` and `:ma` are namespace literals, not commands
pub(crate) fn is_command(line: &str) -> bool {
    const COMMANDS: [&str; 12] = [
        ":quit", ":exit", ":q", ":help", ":bind", ":hide", ":alias", ":import", ":require", ":ns", ":doc", ":env",
    ];
    let head = line.split_whitespace().next().unwrap_or(line);
    COMMANDS.contains(&head)
}
