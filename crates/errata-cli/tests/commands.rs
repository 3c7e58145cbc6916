use errata_cli::cli::{ChecklistCommand, Command, HistoryCommand, InputCommand};
use errata_cli::commands::execute;
use errata_core::rules::{FALLBACK_TIP, RULES};
use errata_session::Session;
use errata_storage::MemoryStore;

fn run(session: &mut Session<&MemoryStore>, command: Command, stdin: &str) -> String {
    let mut out = Vec::new();
    execute(session, command, &mut stdin.as_bytes(), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn words(s: &str) -> Vec<String> {
    s.split(' ').map(str::to_string).collect()
}

#[test]
fn translate_prints_meaning_and_fix() {
    let storage = MemoryStore::new();
    let mut session = Session::open(&storage);

    let text = run(
        &mut session,
        Command::Translate {
            text: words("Uncaught RangeError: Maximum call stack size exceeded"),
        },
        "",
    );
    assert!(text.contains(RULES[8].meaning));
    assert!(text.contains(RULES[8].fix));
    assert_eq!(session.history().len(), 1);
}

#[test]
fn translate_reads_stdin_without_arguments() {
    let storage = MemoryStore::new();
    let mut session = Session::open(&storage);

    let text = run(
        &mut session,
        Command::Translate { text: vec![] },
        "Access blocked by CORS policy\n",
    );
    assert!(text.contains(RULES[10].meaning));
    assert_eq!(session.history().get(0).unwrap().input, "Access blocked by CORS policy");
}

#[test]
fn translate_blank_prompts_for_input() {
    let storage = MemoryStore::new();
    let mut session = Session::open(&storage);
    let text = run(&mut session, Command::Translate { text: vec![] }, "  ");
    assert!(text.contains("Please paste an error first."));
    assert!(session.history().is_empty());
}

#[test]
fn suggest_prints_tip() {
    let storage = MemoryStore::new();
    let mut session = Session::open(&storage);
    let text = run(
        &mut session,
        Command::Suggest {
            text: words("GET 500"),
        },
        "",
    );
    assert_eq!(text.trim_end(), FALLBACK_TIP);
}

#[test]
fn checklist_flow_uses_one_based_numbers() {
    let storage = MemoryStore::new();
    let mut session = Session::open(&storage);

    let text = run(
        &mut session,
        Command::Checklist {
            action: ChecklistCommand::Toggle { number: 1 },
        },
        "",
    );
    assert!(session.checklist().items()[0].done);
    assert!(text.contains("Progress: 6% (1/16)"));

    let text = run(
        &mut session,
        Command::Checklist {
            action: ChecklistCommand::Toggle { number: 0 },
        },
        "",
    );
    assert!(text.contains("No checklist item 0."));

    let text = run(
        &mut session,
        Command::Checklist {
            action: ChecklistCommand::List {
                filter: Some("CONSOLE".into()),
            },
        },
        "",
    );
    assert!(text.starts_with("[x]  1. Check the console"));

    run(
        &mut session,
        Command::Checklist {
            action: ChecklistCommand::Delete { number: 16 },
        },
        "",
    );
    let text = run(
        &mut session,
        Command::Checklist {
            action: ChecklistCommand::Reset,
        },
        "",
    );
    assert!(text.contains("Progress: 0% (0/15)"));
}

#[test]
fn checklist_add_rejects_blank() {
    let storage = MemoryStore::new();
    let mut session = Session::open(&storage);
    let text = run(
        &mut session,
        Command::Checklist {
            action: ChecklistCommand::Add { label: vec![] },
        },
        "",
    );
    assert!(text.contains("Nothing to add"));
    assert_eq!(session.checklist().len(), 16);
}

#[test]
fn history_list_is_newest_first() {
    let storage = MemoryStore::new();
    let mut session = Session::open(&storage);

    let text = run(
        &mut session,
        Command::History {
            action: HistoryCommand::List,
        },
        "",
    );
    assert!(text.contains("No history yet"));

    session.translate("first error 404");
    session.translate("second error 500");
    let text = run(
        &mut session,
        Command::History {
            action: HistoryCommand::List,
        },
        "",
    );
    let second = text.find("second error").unwrap();
    let first = text.find("first error").unwrap();
    assert!(second < first);
}

#[test]
fn history_show_restores_input() {
    let storage = MemoryStore::new();
    let mut session = Session::open(&storage);
    session.translate("older net::ERR_FILE_NOT_FOUND");
    session.translate("newer illegal invocation");

    let text = run(
        &mut session,
        Command::History {
            action: HistoryCommand::Show { number: 2 },
        },
        "",
    );
    assert!(text.contains(RULES[6].meaning));
    assert_eq!(session.input(), "older net::ERR_FILE_NOT_FOUND");

    let text = run(
        &mut session,
        Command::Input {
            action: InputCommand::Show,
        },
        "",
    );
    assert_eq!(text.trim_end(), "older net::ERR_FILE_NOT_FOUND");
}

#[test]
fn history_clear_asks_first() {
    let storage = MemoryStore::new();
    let mut session = Session::open(&storage);
    session.translate("something broke");

    run(
        &mut session,
        Command::History {
            action: HistoryCommand::Clear { yes: false },
        },
        "n\n",
    );
    assert_eq!(session.history().len(), 1);

    let text = run(
        &mut session,
        Command::History {
            action: HistoryCommand::Clear { yes: false },
        },
        "y\n",
    );
    assert!(text.contains("History cleared."));
    assert!(session.history().is_empty());
}

#[test]
fn input_clear_empties_saved_input() {
    let storage = MemoryStore::new();
    let mut session = Session::open(&storage);
    session.set_input("draft");
    run(
        &mut session,
        Command::Input {
            action: InputCommand::Clear,
        },
        "",
    );
    assert_eq!(Session::open(&storage).input(), "");
}
