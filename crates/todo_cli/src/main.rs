//! CLI driver for `todo_core`.
//!
//! # Responsibility
//! - Verify `todo_core` linkage (ping/version).
//! - Apply mutation commands to a seeded store and print the result.
//!
//! Exit code 2 means a command could not be parsed or applied.

mod command;

use command::{Command, CommandError};
use log::error;
use std::cell::RefCell;
use std::process::ExitCode;
use std::rc::Rc;
use todo_core::{Section, StoreEvent, TodoStore};

fn main() -> ExitCode {
    println!("todo_core ping={}", todo_core::ping());
    println!("todo_core version={}", todo_core::core_version());

    let commands = match std::env::args()
        .skip(1)
        .map(|arg| Command::parse(&arg))
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(commands) => commands,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::from(2);
        }
    };

    if let Err(err) = configure_logging(&commands) {
        eprintln!("error: {err}");
        return ExitCode::from(2);
    }

    let mut store = TodoStore::new();
    let lines = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&lines);
    store.subscribe(move |event, _| sink.borrow_mut().push(describe(event)));

    for command in &commands {
        if let Err(err) = apply(&mut store, command) {
            error!("event=cli_command module=cli status=error");
            eprintln!("error: {err}");
            return ExitCode::from(2);
        }
    }

    for line in lines.borrow().iter() {
        println!("{line}");
    }
    print!("{}", render(store.sections()));
    ExitCode::SUCCESS
}

fn configure_logging(commands: &[Command]) -> Result<(), CommandError> {
    let mut dir = None;
    let mut level = None;
    for command in commands {
        match command {
            Command::LogDir(value) => dir = Some(value.as_str()),
            Command::LogLevel(value) => level = Some(*value),
            _ => {}
        }
    }
    match (dir, level) {
        (Some(dir), level) => {
            let level = level.unwrap_or_else(todo_core::default_log_level);
            todo_core::init_logging(level, dir).map_err(CommandError::Logging)
        }
        (None, Some(_)) => Err(CommandError::LogLevelWithoutDir),
        (None, None) => Ok(()),
    }
}

fn apply(store: &mut TodoStore, command: &Command) -> Result<(), CommandError> {
    let missing = || CommandError::NoSuchPosition {
        command: format!("{command:?}"),
    };
    match command {
        Command::AddSection { title } => {
            store.add_section(title.as_str());
        }
        Command::AddTodo { section, title } => {
            let id = store.sections().get(*section).ok_or_else(missing)?.id;
            store.add_todo(title.as_str(), id);
        }
        Command::Toggle { section, todo } => {
            let id = store
                .sections()
                .get(*section)
                .and_then(|s| s.todos.get(*todo))
                .ok_or_else(missing)?
                .id;
            store.toggle_todo(id);
        }
        Command::Delete { section, indices } => {
            let id = store.sections().get(*section).ok_or_else(missing)?.id;
            store.delete_todos(indices.iter().copied(), id);
        }
        Command::LogDir(_) | Command::LogLevel(_) => {}
    }
    Ok(())
}

fn describe(event: &StoreEvent) -> String {
    match event {
        StoreEvent::TodosDeleted { section, removed } => {
            format!("event {} section={section} count={}", event.name(), removed.len())
        }
        StoreEvent::TodoToggled {
            todo, completed, ..
        } => format!("event {} todo={todo} completed={completed}", event.name()),
        _ => format!("event {} section={}", event.name(), event.section()),
    }
}

fn render(sections: &[Section]) -> String {
    let mut out = String::new();
    for section in sections {
        out.push_str(&format!("# {}\n", section.title));
        for todo in &section.todos {
            let mark = if todo.completed { 'x' } else { ' ' };
            out.push_str(&format!("[{mark}] {}\n", todo.title));
        }
    }
    out
}
