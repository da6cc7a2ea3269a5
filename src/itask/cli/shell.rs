//! Interactive session.
//!
//! Unlike one-shot commands, a session keeps the draft text and the
//! show-completed filter between inputs, so it behaves like the input box,
//! checkbox and row buttons of a graphical todo list. A line that is not a
//! command is typed into the draft and submitted as if Enter was pressed.

use super::render::{render_listing, render_notifications};
use chrono::Utc;
use colored::Colorize;
use itask::api::ItaskApi;
use itask::error::{ItaskError, Result};
use itask::notify::NotificationCenter;
use itask::store::SlotBackend;
use std::io::{BufRead, Write};

const HELP: &str = "\
Commands:
  add [text]     add text, or the current draft
  draft [text]   show or replace the draft
  edit N         move todo N into the draft
  done N...      toggle todos between active and completed
  rm N...        delete todos
  filter         show or hide completed todos
  list           list todos
  help           show this help
  quit           leave the session
Any other line, including one of the words above followed by text,
is added as a todo if it is longer than 3 characters.";

enum Step {
    Continue { relist: bool },
    Quit,
}

pub fn run<B, R, W>(
    api: &mut ItaskApi<B, NotificationCenter>,
    mut input: R,
    out: &mut W,
    width: usize,
) -> Result<()>
where
    B: SlotBackend,
    R: BufRead,
    W: Write,
{
    flush_notifications(api, out)?;
    write!(out, "{}", render_listing(&api.list(), width))?;

    loop {
        write_prompt(api, out)?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        let step = match dispatch(api, line.trim_end_matches(['\r', '\n']), out) {
            Ok(step) => step,
            Err(e) if e.is_notified() => Step::Continue { relist: false },
            Err(e @ (ItaskError::TodoNotFound(_) | ItaskError::Api(_))) => {
                writeln!(out, "{}", format!("Error: {}", e).red())?;
                Step::Continue { relist: false }
            }
            Err(e) => return Err(e),
        };

        flush_notifications(api, out)?;
        match step {
            Step::Quit => break,
            Step::Continue { relist: true } => {
                write!(out, "{}", render_listing(&api.list(), width))?
            }
            Step::Continue { relist: false } => {}
        }
    }

    out.flush()?;
    Ok(())
}

fn dispatch<B: SlotBackend, W: Write>(
    api: &mut ItaskApi<B, NotificationCenter>,
    line: &str,
    out: &mut W,
) -> Result<Step> {
    let trimmed = line.trim();
    let (command, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (trimmed, ""),
    };
    let args: Vec<&str> = rest.split_whitespace().collect();

    match command {
        "" => Ok(Step::Continue { relist: false }),
        "quit" | "exit" | "q" if rest.is_empty() => Ok(Step::Quit),
        "help" | "?" if rest.is_empty() => {
            writeln!(out, "{}", HELP)?;
            Ok(Step::Continue { relist: false })
        }
        "list" | "ls" if rest.is_empty() => Ok(Step::Continue { relist: true }),
        "filter" if rest.is_empty() => {
            let showing = api.toggle_show_completed();
            let state = if showing { "Showing" } else { "Hiding" };
            writeln!(out, "{}", format!("{} completed todos", state).dimmed())?;
            Ok(Step::Continue { relist: true })
        }
        "add" => {
            if !rest.is_empty() {
                api.set_draft(rest);
            }
            api.add_draft()?;
            Ok(Step::Continue { relist: true })
        }
        "draft" => {
            if rest.is_empty() {
                writeln!(out, "{}", api.draft())?;
            } else {
                api.set_draft(rest);
            }
            Ok(Step::Continue { relist: false })
        }
        "edit" => {
            let selector = single_arg(&args, "edit")?;
            api.start_edit(selector)?;
            Ok(Step::Continue { relist: true })
        }
        "done" | "x" => {
            require_args(&args, "done")?;
            api.toggle(&args)?;
            Ok(Step::Continue { relist: true })
        }
        "rm" | "delete" => {
            require_args(&args, "rm")?;
            api.delete(&args)?;
            Ok(Step::Continue { relist: true })
        }
        _ => {
            api.set_draft(line);
            let submitted = api.submit_draft();
            Ok(Step::Continue {
                relist: !submitted.affected.is_empty(),
            })
        }
    }
}

fn require_args(args: &[&str], command: &str) -> Result<()> {
    if args.is_empty() {
        return Err(ItaskError::Api(format!("Usage: {} N...", command)));
    }
    Ok(())
}

fn single_arg<'a>(args: &[&'a str], command: &str) -> Result<&'a str> {
    match args {
        [one] => Ok(*one),
        _ => Err(ItaskError::Api(format!("Usage: {} N", command))),
    }
}

fn write_prompt<B: SlotBackend, W: Write>(
    api: &ItaskApi<B, NotificationCenter>,
    out: &mut W,
) -> Result<()> {
    if api.draft().is_empty() {
        write!(out, "{} ", ">".bold())?;
    } else {
        write!(out, "{} {} ", format!("[{}]", api.draft()).cyan(), ">".bold())?;
    }
    out.flush()?;
    Ok(())
}

fn flush_notifications<B: SlotBackend, W: Write>(
    api: &mut ItaskApi<B, NotificationCenter>,
    out: &mut W,
) -> Result<()> {
    let center = api.sink_mut();
    let fresh = center.take_unseen();
    center.dismiss_expired(Utc::now());
    write!(out, "{}", render_notifications(&fresh))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use itask::store::mem_backend::MemBackend;
    use itask::store::TodoPersistence;
    use itask::todos::{StoreOptions, TodoStore};

    fn api() -> ItaskApi<MemBackend, NotificationCenter> {
        colored::control::set_override(false);
        ItaskApi::new(TodoStore::open(
            TodoPersistence::new(MemBackend::new(), "todos"),
            NotificationCenter::new(),
            StoreOptions::default(),
        ))
    }

    fn session(api: &mut ItaskApi<MemBackend, NotificationCenter>, script: &str) -> String {
        let mut out = Vec::new();
        run(api, script.as_bytes(), &mut out, 80).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn texts(api: &ItaskApi<MemBackend, NotificationCenter>) -> Vec<String> {
        api.store().items().iter().map(|t| t.text.clone()).collect()
    }

    #[test]
    fn bare_line_is_submitted_like_enter() {
        let mut api = api();
        let out = session(&mut api, "Buy milk\n");
        assert_eq!(texts(&api), vec!["Buy milk".to_string()]);
        assert!(out.contains("Todo added successfully!"));
        assert!(out.contains("1. [ ] Buy milk"));
    }

    #[test]
    fn short_bare_line_stays_in_draft_silently() {
        let mut api = api();
        let out = session(&mut api, "Hi\n");
        assert!(texts(&api).is_empty());
        assert_eq!(api.draft(), "Hi");
        assert!(!out.contains("more than 3"));
        assert!(out.contains("[Hi] >"));
    }

    #[test]
    fn add_command_warns_on_short_text() {
        let mut api = api();
        let out = session(&mut api, "add Hi\n");
        assert!(texts(&api).is_empty());
        assert!(out.contains("Todo must be more than 3 characters!"));
    }

    #[test]
    fn edit_round_trip_through_draft() {
        let mut api = api();
        let out = session(&mut api, "Buy milk\nWalk the dog\nedit 1\nadd\n");
        assert!(out.contains("Editing todo..."));
        assert!(out.contains("[Buy milk] >"));
        assert_eq!(
            texts(&api),
            vec!["Walk the dog".to_string(), "Buy milk".to_string()]
        );
    }

    #[test]
    fn draft_can_be_replaced_before_adding() {
        let mut api = api();
        session(&mut api, "Buy milk\nedit 1\ndraft Buy oat milk\nadd\n");
        assert_eq!(texts(&api), vec!["Buy oat milk".to_string()]);
    }

    #[test]
    fn filter_hides_completed() {
        let mut api = api();
        let out = session(&mut api, "Buy milk\ndone 1\nfilter\n");
        assert!(out.contains("Hiding completed todos"));
        assert!(out.contains("No todos to show"));
        assert!(out.contains("0 of 1 todos"));
    }

    #[test]
    fn unknown_index_reports_and_continues() {
        let mut api = api();
        let out = session(&mut api, "rm 4\nBuy milk\n");
        assert!(out.contains("Error: No todo matches index 4"));
        assert_eq!(texts(&api), vec!["Buy milk".to_string()]);
    }

    #[test]
    fn command_words_with_text_are_todos() {
        let mut api = api();
        session(
            &mut api,
            "list groceries\nfilter coffee machine\nquit smoking today\nBuy milk\n",
        );
        assert_eq!(
            texts(&api),
            vec![
                "list groceries".to_string(),
                "filter coffee machine".to_string(),
                "quit smoking today".to_string(),
                "Buy milk".to_string(),
            ]
        );
        assert!(api.store().show_completed());
    }

    #[test]
    fn quit_stops_reading() {
        let mut api = api();
        session(&mut api, "quit\nBuy milk\n");
        assert!(texts(&api).is_empty());
    }

    #[test]
    fn delete_reports_success() {
        let mut api = api();
        let out = session(&mut api, "Buy milk\nrm 1\n");
        assert!(texts(&api).is_empty());
        assert!(out.contains("Todo deleted successfully!"));
    }
}
