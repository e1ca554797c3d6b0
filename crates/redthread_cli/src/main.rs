//! `redthread` command-line front end.
//!
//! # Responsibility
//! - Load configuration, start logging and pass the password gate.
//! - Sample "today" once per command and dispatch to core services.
//!
//! # Invariants
//! - Every command except `version` requires the password.
//! - Record text never reaches the log; only ids and counts do.

mod render;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use log::{error, info};
use redthread_core::db::open_db;
use redthread_core::model::pinned_note::normalize_owner;
use redthread_core::{
    build_dashboard, config_path, flush_logging, init_logging, load_config, CalendarDate,
    ChecklistService, EventService, GateError, ImageUpload, JournalConfig, LocalBlobStore,
    LogSettings, LoveNoteService, MemoryService, NewMemory, PasswordGate, PinnedNoteService,
    RecordId, ServiceError, SqliteEventRepository, SqliteLoveNoteRepository,
    SqliteMemoryRepository, SqlitePinnedNoteRepository, SqliteTodoRepository,
};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Everything a command needs, opened once in `run`.
struct Journal<'a> {
    config: &'a JournalConfig,
    conn: &'a Connection,
    store: &'a LocalBlobStore,
    today: CalendarDate,
}

#[derive(Parser)]
#[command(name = "redthread")]
#[command(about = "A private journal for two: memories, notes, a checklist and the days that matter")]
struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Journal password
    #[arg(long, global = true, env = "REDTHREAD_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the password without doing anything else
    Unlock,
    /// Show today, the month calendar, day counters and pinned notes
    Today,
    /// Show the 100 days / 6 months / 1 year milestones
    Milestones,
    /// Photo and text memories
    #[command(subcommand)]
    Memory(MemoryCommand),
    /// Love notes
    #[command(subcommand)]
    Note(NoteCommand),
    /// Shared checklist
    #[command(subcommand)]
    Todo(TodoCommand),
    /// Pinned notes, one per partner
    #[command(subcommand)]
    Pinned(PinnedCommand),
    /// Calendar events
    #[command(subcommand)]
    Event(EventCommand),
    /// Print the version
    Version,
}

#[derive(Subcommand)]
enum MemoryCommand {
    /// Post a memory
    Add {
        #[command(flatten)]
        text: TitleBody,
        /// Photo to attach
        #[arg(long)]
        photo: Option<PathBuf>,
    },
    /// List memories, newest first
    List,
    /// Delete a memory and its photo
    Delete { id: RecordId },
}

#[derive(Subcommand)]
enum NoteCommand {
    /// Write a love note
    Add {
        #[command(flatten)]
        text: TitleBody,
    },
    /// List love notes, newest first
    List,
    /// Delete a love note
    Delete { id: RecordId },
}

#[derive(Args)]
struct TitleBody {
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    body: Option<String>,
}

#[derive(Subcommand)]
enum TodoCommand {
    /// Add an item (ideas, trips, dates...)
    Add { text: String },
    /// Show the checklist
    List,
    /// Tick or untick an item
    Toggle { id: RecordId },
    /// Remove an item
    Remove { id: RecordId },
}

#[derive(Subcommand)]
enum PinnedCommand {
    /// Show every partner's pinned note
    Show,
    /// Replace one partner's pinned note
    Set { owner: String, body: String },
}

#[derive(Subcommand)]
enum EventCommand {
    /// Add an event on a day (YYYY-MM-DD)
    Add {
        date: CalendarDate,
        title: String,
        #[arg(long)]
        note: Option<String>,
    },
    /// List events; with --month, only that month's events by date
    List {
        /// Any day inside the month to show
        #[arg(long)]
        month: Option<CalendarDate>,
    },
    /// Delete an event
    Delete { id: RecordId },
}

fn main() -> ExitCode {
    let outcome = run(Cli::parse());
    if let Err(err) = &outcome {
        error!("event=cli_exit module=cli status=error error={err}");
    }
    flush_logging();

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", error_message(&err));
            ExitCode::FAILURE
        }
    }
}

/// Journal errors print their short form; anything else keeps its chain.
fn error_message(err: &anyhow::Error) -> String {
    if let Some(service) = err.downcast_ref::<ServiceError>() {
        return service.user_message();
    }
    if let Some(gate) = err.downcast_ref::<GateError>() {
        return gate.to_string();
    }
    format!("Error: {err:#}")
}

fn run(cli: Cli) -> Result<()> {
    if matches!(cli.command, Commands::Version) {
        println!("redthread {}", redthread_core::core_version());
        return Ok(());
    }

    let config = load_journal_config(cli.config.as_deref())?;
    start_logging(&config)?;

    PasswordGate::new(config.password.as_str())
        .unlock(cli.password.as_deref().unwrap_or_default())?;

    let today = CalendarDate::today_local();
    let conn = open_db(config.database_path())
        .with_context(|| format!("opening {}", config.database_path().display()))?;
    let store = LocalBlobStore::new(config.blob_root(), config.photo_base_url());
    let journal = Journal {
        config: &config,
        conn: &conn,
        store: &store,
        today,
    };

    match cli.command {
        Commands::Version => Ok(()),
        Commands::Unlock => {
            println!("Unlocked.");
            Ok(())
        }
        Commands::Today => cmd_today(&journal),
        Commands::Milestones => {
            let view = build_dashboard(journal.config, journal.today);
            render::print_milestones(&view.milestones);
            Ok(())
        }
        Commands::Memory(command) => cmd_memory(&journal, command),
        Commands::Note(command) => cmd_note(&journal, command),
        Commands::Todo(command) => cmd_todo(&journal, command),
        Commands::Pinned(command) => cmd_pinned(&journal, command),
        Commands::Event(command) => cmd_event(&journal, command),
    }
}

fn load_journal_config(explicit: Option<&Path>) -> Result<JournalConfig> {
    let mut config = match explicit.map(Path::to_path_buf).or_else(config_path) {
        Some(path) => load_config(&path)?,
        None => JournalConfig::default(),
    };
    if config.data_dir.is_relative() {
        config.data_dir = std::env::current_dir()
            .context("resolving relative data_dir")?
            .join(&config.data_dir);
    }
    Ok(config)
}

fn start_logging(config: &JournalConfig) -> Result<()> {
    init_logging(&LogSettings::from_config(config)?)?;
    info!(
        "event=cli_start module=cli status=ok data_dir={}",
        config.data_dir.display()
    );
    Ok(())
}

fn cmd_today(journal: &Journal<'_>) -> Result<()> {
    let view = build_dashboard(journal.config, journal.today);
    let events = EventService::new(SqliteEventRepository::new(journal.conn))
        .events_in_month(journal.today)?;
    let pinned = PinnedNoteService::new(SqlitePinnedNoteRepository::new(journal.conn))
        .load(&journal.config.partners)?;

    render::print_dashboard(&view, &events, &pinned);
    Ok(())
}

fn cmd_memory(journal: &Journal<'_>, command: MemoryCommand) -> Result<()> {
    let service = MemoryService::new(SqliteMemoryRepository::new(journal.conn), journal.store);
    match command {
        MemoryCommand::Add { text, photo } => {
            let image = photo.as_deref().map(read_photo).transpose()?;
            let memory = service.add_memory(NewMemory {
                title: text.title,
                body: text.body,
                image,
            })?;
            println!("Saved. {}", memory.id);
        }
        MemoryCommand::List => render::print_memories(&service.list_memories()?),
        MemoryCommand::Delete { id } => {
            service.delete_memory(id)?;
            println!("Deleted.");
        }
    }
    Ok(())
}

fn cmd_note(journal: &Journal<'_>, command: NoteCommand) -> Result<()> {
    let service = LoveNoteService::new(SqliteLoveNoteRepository::new(journal.conn));
    match command {
        NoteCommand::Add { text } => {
            let note = service.add_note(text.title, text.body)?;
            println!("Saved. {}", note.id);
        }
        NoteCommand::List => render::print_love_notes(&service.list_notes()?),
        NoteCommand::Delete { id } => {
            service.delete_note(id)?;
            println!("Deleted.");
        }
    }
    Ok(())
}

fn cmd_todo(journal: &Journal<'_>, command: TodoCommand) -> Result<()> {
    let service = ChecklistService::new(SqliteTodoRepository::new(journal.conn));
    match command {
        TodoCommand::Add { text } => {
            let item = service.add_item(&text)?;
            println!("Added. {}", item.id);
        }
        TodoCommand::List => render::print_checklist(&service.list_items()?),
        TodoCommand::Toggle { id } => {
            let item = service.toggle_item(id)?;
            render::print_checklist(std::slice::from_ref(&item));
        }
        TodoCommand::Remove { id } => {
            service.remove_item(id)?;
            println!("Removed.");
        }
    }
    Ok(())
}

fn cmd_pinned(journal: &Journal<'_>, command: PinnedCommand) -> Result<()> {
    let service = PinnedNoteService::new(SqlitePinnedNoteRepository::new(journal.conn));
    let mut notes = service.load(&journal.config.partners)?;
    match command {
        PinnedCommand::Show => render::print_pinned(&notes),
        PinnedCommand::Set { owner, body } => {
            let slot = normalize_owner(&owner);
            let Some(note) = notes.iter_mut().find(|note| note.owner == slot) else {
                bail!(
                    "unknown partner `{owner}`; configured partners: {}",
                    journal.config.partners.join(", ")
                );
            };
            note.body = body;
            service.save(notes)?;
            println!("Saved.");
        }
    }
    Ok(())
}

fn cmd_event(journal: &Journal<'_>, command: EventCommand) -> Result<()> {
    let service = EventService::new(SqliteEventRepository::new(journal.conn));
    match command {
        EventCommand::Add { date, title, note } => {
            let event = service.add_event(&title, date, note)?;
            println!("Saved. {}", event.id);
        }
        EventCommand::List { month } => {
            let events = match month {
                Some(month_of) => service.events_in_month(month_of)?,
                None => service.list_events()?,
            };
            render::print_events(&events, journal.today);
        }
        EventCommand::Delete { id } => {
            service.delete_event(id)?;
            println!("Deleted.");
        }
    }
    Ok(())
}

fn read_photo(path: &Path) -> Result<ImageUpload> {
    let bytes =
        std::fs::read(path).with_context(|| format!("reading photo {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(ImageUpload { file_name, bytes })
}

#[cfg(test)]
mod tests {
    use super::error_message;
    use redthread_core::{GateError, RecordId, ServiceError};

    #[test]
    fn journal_errors_use_their_short_text() {
        let missing = anyhow::Error::from(ServiceError::NotFound(RecordId::nil()));
        assert_eq!(error_message(&missing), "That item no longer exists.");

        let blank = anyhow::Error::from(ServiceError::EmptyInput("todo text"));
        assert_eq!(error_message(&blank), "Please fill in the todo text.");

        let gate = anyhow::Error::from(GateError::WrongPassword);
        assert_eq!(error_message(&gate), "Wrong password.");
    }

    #[test]
    fn other_errors_keep_their_context_chain() {
        let err = anyhow::anyhow!("disk full").context("opening journal.sqlite3");
        assert_eq!(error_message(&err), "Error: opening journal.sqlite3: disk full");
    }

    #[test]
    fn context_does_not_hide_journal_errors() {
        let err = anyhow::Error::from(ServiceError::NotFound(RecordId::nil()))
            .context("removing checklist item");
        assert_eq!(error_message(&err), "That item no longer exists.");
    }
}
