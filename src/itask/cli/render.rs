use colored::Colorize;
use itask::api::Listing;
use itask::index::DisplayTodo;
use itask::model::TodoRecord;
use itask::notify::{MessageLevel, Notification};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
const INDEX_WIDTH: usize = 4;

/// Width of the terminal, or `LINE_WIDTH` when not attached to one.
pub fn terminal_width() -> usize {
    console::Term::stdout()
        .size_checked()
        .map(|(_, cols)| usize::from(cols))
        .unwrap_or(LINE_WIDTH)
}

pub fn render_notification(notification: &Notification) -> String {
    let text = notification.message.as_str();
    match notification.level {
        MessageLevel::Info => text.dimmed().to_string(),
        MessageLevel::Success => text.green().to_string(),
        MessageLevel::Warning => text.yellow().to_string(),
        MessageLevel::Error => text.red().to_string(),
    }
}

pub fn render_notifications(notifications: &[Notification]) -> String {
    notifications
        .iter()
        .map(|n| format!("{}\n", render_notification(n)))
        .collect()
}

fn checkbox(todo: &TodoRecord) -> &'static str {
    if todo.completed {
        "[x]"
    } else {
        "[ ]"
    }
}

fn render_row(dt: &DisplayTodo, width: usize) -> String {
    let idx_str = format!("{:>w$}. ", dt.index.0, w = INDEX_WIDTH - 1);
    let prefix = format!("{}{} ", idx_str, checkbox(&dt.todo));
    let available = width.saturating_sub(prefix.width());
    let text = truncate_to_width(&dt.todo.text, available);

    if dt.todo.completed {
        format!("{}{}", prefix.dimmed(), text.strikethrough().dimmed())
    } else {
        format!("{}{} {}", idx_str.yellow(), checkbox(&dt.todo), text)
    }
}

pub fn render_listing(listing: &Listing, width: usize) -> String {
    let mut out = String::new();

    if listing.total == 0 {
        out.push_str(&format!("{}\n", "No todos yet".bold()));
        out.push_str(&format!("{}\n", "Add some tasks to get started!".dimmed()));
        return out;
    }

    if listing.todos.is_empty() {
        out.push_str(&format!("{}\n", "No todos to show".bold()));
        out.push_str(&format!("{}\n", "All completed todos are hidden".dimmed()));
    }

    for dt in &listing.todos {
        out.push_str(&render_row(dt, width));
        out.push('\n');
    }

    let summary = format!("{} of {} todos", listing.visible(), listing.total);
    out.push_str(&format!("\n{}\n", summary.dimmed()));
    out
}

/// One line per todo, without indexes, e.g. after toggling.
pub fn render_todos(todos: &[TodoRecord], width: usize) -> String {
    todos
        .iter()
        .map(|todo| {
            let prefix = format!("{} ", checkbox(todo));
            let text = truncate_to_width(&todo.text, width.saturating_sub(prefix.width()));
            format!("{}{}\n", prefix, text)
        })
        .collect()
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
