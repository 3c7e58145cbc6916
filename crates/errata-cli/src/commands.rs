use std::io::{BufRead, Read, Write};

use errata_core::suggest;
use errata_session::{Outcome, Session};
use errata_storage::KeyValueStore;

use crate::cli::{ChecklistCommand, Cli, Command, ConfigCommand, HistoryCommand, InputCommand};
use crate::config::{self, ErrataConfig};
use crate::render;
use crate::state::AppState;
use crate::watch;

/// Entry point for the binary: resolve config and storage, then dispatch.
pub fn run(cli: Cli) -> eyre::Result<()> {
    let config_path = match cli.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };
    let config = config::load_config(&config_path)?;
    let state = AppState::new(config, config_path, cli.data_dir)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Config { action } => config_command(&state, action, &mut out),
        Command::Watch => {
            let mut session = Session::open(state.store.clone());
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            runtime.block_on(watch::run(
                &mut session,
                state.config.suggestion_delay(),
                stdin,
                &mut out,
            ))
        }
        command => {
            let mut session = Session::open(state.store.clone());
            let stdin = std::io::stdin();
            execute(&mut session, command, &mut stdin.lock(), &mut out)
        }
    }
}

/// Run one session command. `input` supplies stdin text and confirmations.
///
/// `watch` and `config` need more than a session and are handled by [`run`].
pub fn execute<S, R, W>(
    session: &mut Session<S>,
    command: Command,
    input: &mut R,
    out: &mut W,
) -> eyre::Result<()>
where
    S: KeyValueStore,
    R: BufRead,
    W: Write,
{
    match command {
        Command::Translate { text } => {
            let raw = text_or_stdin(text, input)?;
            let outcome = session.translate(&raw);
            render::translation(out, outcome.translation())?;
            if let Outcome::Translated(_) = outcome {
                tracing::info!(history = session.history().len(), "error translated");
            }
        }
        Command::Suggest { text } => {
            let raw = text_or_stdin(text, input)?;
            writeln!(out, "{}", suggest(&raw))?;
        }
        Command::Checklist { action } => checklist_command(session, action, out)?,
        Command::History { action } => history_command(session, action, input, out)?,
        Command::Input { action } => match action {
            InputCommand::Show => writeln!(out, "{}", session.input())?,
            InputCommand::Clear => session.clear_input(),
        },
        Command::Watch | Command::Config { .. } => {
            return Err(eyre::eyre!("this command cannot run against a bare session"));
        }
    }
    Ok(())
}

fn text_or_stdin(text: Vec<String>, input: &mut impl Read) -> eyre::Result<String> {
    if !text.is_empty() {
        return Ok(text.join(" "));
    }
    let mut buf = String::new();
    input.read_to_string(&mut buf)?;
    Ok(buf)
}

fn checklist_command<S: KeyValueStore, W: Write>(
    session: &mut Session<S>,
    action: ChecklistCommand,
    out: &mut W,
) -> eyre::Result<()> {
    let checklist = session.checklist_mut();
    match action {
        ChecklistCommand::List { filter } => {
            for (index, item) in checklist.filter(filter.as_deref().unwrap_or("")) {
                render::checklist_item(out, index, item)?;
            }
        }
        ChecklistCommand::Add { label } => {
            if !checklist.add(&label.join(" ")) {
                writeln!(out, "Nothing to add: the label is empty.")?;
            }
        }
        ChecklistCommand::Toggle { number } => {
            let applied = position(number).is_some_and(|i| checklist.toggle(i));
            if !applied {
                writeln!(out, "No checklist item {number}.")?;
            }
        }
        ChecklistCommand::Delete { number } => {
            let applied = position(number).is_some_and(|i| checklist.delete(i));
            if !applied {
                writeln!(out, "No checklist item {number}.")?;
            }
        }
        ChecklistCommand::Reset => checklist.reset_progress(),
    }

    render::progress(
        out,
        checklist.done_count(),
        checklist.len(),
        checklist.progress_percent(),
    )?;
    Ok(())
}

fn history_command<S: KeyValueStore, R: BufRead, W: Write>(
    session: &mut Session<S>,
    action: HistoryCommand,
    input: &mut R,
    out: &mut W,
) -> eyre::Result<()> {
    match action {
        HistoryCommand::List => {
            if session.history().is_empty() {
                render::empty_history(out)?;
            }
            for (i, record) in session.history().list().enumerate() {
                render::history_entry(out, i + 1, record)?;
            }
        }
        HistoryCommand::Show { number } => match position(number).and_then(|i| session.recall(i)) {
            Some(record) => {
                writeln!(out, "{}", record.input)?;
                render::translation(out, &record.translation())?;
            }
            None => writeln!(out, "No history entry {number}.")?,
        },
        HistoryCommand::Clear { yes } => {
            if yes || confirm(input, out, "Are you sure you want to clear your history?")? {
                session.history_mut().clear();
                writeln!(out, "History cleared.")?;
            }
        }
    }
    Ok(())
}

fn confirm(input: &mut impl BufRead, out: &mut impl Write, question: &str) -> eyre::Result<bool> {
    write!(out, "{question} [y/N] ")?;
    out.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes" | "Yes"))
}

/// 1-based number from the command line to a list position.
fn position(number: usize) -> Option<usize> {
    number.checked_sub(1)
}

fn config_command<W: Write>(state: &AppState, action: ConfigCommand, out: &mut W) -> eyre::Result<()> {
    match action {
        ConfigCommand::Show => {
            writeln!(out, "# {}", state.config_path.display())?;
            writeln!(out, "{}", serde_json::to_string_pretty(&state.config)?)?;
            writeln!(out, "# data: {}", state.store.root().display())?;
        }
        ConfigCommand::Init => {
            if state.config_path.exists() {
                writeln!(out, "Config already exists at {}", state.config_path.display())?;
            } else {
                let config = ErrataConfig {
                    created_at: Some(jiff::Timestamp::now()),
                    ..state.config.clone()
                };
                config::save_config(&state.config_path, &config)?;
                writeln!(out, "Wrote {}", state.config_path.display())?;
            }
        }
    }
    Ok(())
}
