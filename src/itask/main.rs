use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use itask::api::ItaskApi;
use itask::config::ItaskConfig;
use itask::editor::edit_text;
use itask::error::{ItaskError, Result};
use itask::notify::NotificationCenter;
use itask::store::fs_backend::FsBackend;
use itask::store::TodoPersistence;
use itask::todos::{StoreOptions, TodoStore};
use std::path::PathBuf;

mod args;
mod cli;
use args::{Cli, Commands};
use cli::{logging, render, shell};

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) if e.is_notified() => std::process::exit(1),
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            std::process::exit(1);
        }
    }
}

struct AppContext {
    api: ItaskApi<FsBackend, NotificationCenter>,
    home: PathBuf,
    config: ItaskConfig,
    width: usize,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut ctx = init_context(&cli)?;
    let result = match cli.command {
        Some(Commands::List {
            hide_completed,
            show_completed,
        }) => handle_list(&mut ctx, hide_completed, show_completed),
        Some(Commands::Add { text }) => handle_add(&mut ctx, text),
        Some(Commands::Edit { selector, text }) => handle_edit(&mut ctx, selector, text),
        Some(Commands::Done { selectors }) => handle_done(&mut ctx, selectors),
        Some(Commands::Delete { selectors }) => handle_delete(&mut ctx, selectors),
        Some(Commands::Shell) => handle_shell(&mut ctx),
        Some(Commands::Path) => handle_path(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_list(&mut ctx, false, false),
    };

    // Whatever happened, show what the store reported.
    print_notifications(&mut ctx);
    result
}

fn default_home() -> Result<PathBuf> {
    ProjectDirs::from("com", "itask", "itask")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ItaskError::Store("Could not determine data directory".to_string()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let home = match &cli.home {
        Some(home) => home.clone(),
        None => default_home()?,
    };
    let config = ItaskConfig::load(&home)?;
    tracing::debug!(home = %home.display(), key = %config.storage_key, "starting");

    let persistence = TodoPersistence::new(FsBackend::new(home.clone()), &config.storage_key);
    let store = TodoStore::open(
        persistence,
        NotificationCenter::with_ttl_ms(config.notification_ttl_ms),
        StoreOptions {
            show_completed: config.show_completed,
        },
    );

    Ok(AppContext {
        api: ItaskApi::new(store),
        home,
        config,
        width: render::terminal_width(),
    })
}

fn handle_list(ctx: &mut AppContext, hide_completed: bool, show_completed: bool) -> Result<()> {
    let showing = ctx.api.store().show_completed();
    if (hide_completed && showing) || (show_completed && !showing) {
        ctx.api.toggle_show_completed();
    }
    print!("{}", render::render_listing(&ctx.api.list(), ctx.width));
    Ok(())
}

fn handle_add(ctx: &mut AppContext, text: Vec<String>) -> Result<()> {
    ctx.api.add(&text.join(" "))?;
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, selector: String, text: Vec<String>) -> Result<()> {
    let text = if text.is_empty() {
        let current = ctx.api.find(&selector)?;
        if current.completed {
            // Refused with a warning by the API.
            ctx.api.start_edit(&selector)?;
            return Ok(());
        }
        let edited = edit_text(&current.text)?;
        if edited == current.text {
            println!("{}", "Todo unchanged.".dimmed());
            return Ok(());
        }
        edited
    } else {
        text.join(" ")
    };

    let result = ctx.api.edit(&selector, &text)?;
    print!("{}", render::render_todos(&result.affected, ctx.width));
    Ok(())
}

fn handle_done(ctx: &mut AppContext, selectors: Vec<String>) -> Result<()> {
    let result = ctx.api.toggle(&selectors)?;
    print!("{}", render::render_todos(&result.affected, ctx.width));
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, selectors: Vec<String>) -> Result<()> {
    ctx.api.delete(&selectors)?;
    Ok(())
}

fn handle_shell(ctx: &mut AppContext) -> Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    shell::run(&mut ctx.api, stdin.lock(), &mut stdout, ctx.width)
}

fn handle_path(ctx: &AppContext) -> Result<()> {
    println!("{}", ctx.api.slot_path().display());
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    match (key, value) {
        (None, _) => {
            for (key, value) in ctx.config.entries() {
                println!("{} = {}", key, value);
            }
        }
        (Some(key), None) => println!("{} = {}", key, ctx.config.get(&key)?),
        (Some(key), Some(value)) => {
            ctx.config.set(&key, &value)?;
            ctx.config.save(&ctx.home)?;
            println!("{} = {}", key, ctx.config.get(&key)?);
        }
    }
    Ok(())
}

fn print_notifications(ctx: &mut AppContext) {
    let fresh = ctx.api.sink_mut().take_unseen();
    print!("{}", render::render_notifications(&fresh));
}
