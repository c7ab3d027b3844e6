//! Voice Tasks - Entry Point
//!
//! Interactive terminal front end. Each input line is treated as a speech
//! transcript, classified and applied to the persisted task list. Lines
//! starting with `:` are direct edits that skip classification.

use clap::Parser;
use crossterm::tty::IsTty;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use voice_tasks::core::config::MissingTaskPolicy;
use voice_tasks::core::error::Result;
use voice_tasks::intent::patterns::DIGITS_PATTERN;
use voice_tasks::session::Assistant;
use voice_tasks::speech::{ConsoleSpeaker, LineTranscripts, TranscriptSource};
use voice_tasks::storage::JsonFileStore;
use voice_tasks::ui::{render_list, render_transcript};
use voice_tasks::Settings;

/// Voice-driven to-do list manager
#[derive(Parser, Debug)]
#[command(name = "voice-tasks")]
#[command(about = "Manage a to-do list with natural spoken or typed phrases")]
struct Args {
    /// Settings file (TOML)
    #[arg(long, default_value = "voice_tasks.toml")]
    config: PathBuf,

    /// Task list file, overrides storage.path
    #[arg(long)]
    store: Option<PathBuf>,

    /// Do not print spoken confirmations
    #[arg(long)]
    mute: bool,

    /// Say so when a command names a task that does not exist
    #[arg(long)]
    announce_missing: bool,

    /// Disable colors and strike-through in the list
    #[arg(long)]
    plain: bool,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// Meta commands that edit the list directly
enum DirectEdit<'a> {
    Add(&'a str),
    Toggle(usize),
    Delete(usize),
    List,
    Quit,
    Invalid(&'a str),
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = match Settings::load(&args.config) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Warning: Failed to load {}: {}", args.config.display(), e);
            eprintln!("Using default settings");
            Settings::default()
        }
    };
    apply_overrides(&mut settings, &args);

    let filter = if args.verbose {
        EnvFilter::new("voice_tasks=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log_filter))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    tracing::info!("Voice Tasks starting...");

    let styled = !args.plain && io::stdout().is_tty();
    let store = JsonFileStore::new(&settings.storage.path);
    let speaker = ConsoleSpeaker::stdout(settings.speech.prompt.clone(), settings.speech.muted);
    let mut assistant = Assistant::start(store, speaker, &settings);
    let mut source = LineTranscripts::new(io::stdin().lock());

    println!("\n=== VOICE TASKS ===");
    println!("Say what you need, for example:");
    println!("  I need to buy milk / delete task 2 / mark task 1 done / clear everything");
    println!();
    println!("Direct edits:");
    println!("  :add <text>     - Add a task as typed");
    println!("  :toggle <n>     - Toggle task n");
    println!("  :delete <n>     - Delete task n");
    println!("  :list           - Show the list");
    println!("  :quit           - Exit");
    println!();
    print!("{}", render_list(assistant.tasks(), styled));

    loop {
        print!("> ");
        io::stdout().flush()?;

        let line = match source.capture() {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!("Speech capture failed: {}", e);
                String::new()
            }
        };

        if let Some(edit) = parse_direct_edit(&line) {
            match edit {
                DirectEdit::Add(text) => {
                    assistant.add_direct(text);
                }
                DirectEdit::Toggle(position) => {
                    assistant.toggle_direct(position);
                }
                DirectEdit::Delete(position) => {
                    assistant.delete_direct(position);
                }
                DirectEdit::List => {}
                DirectEdit::Quit => break,
                DirectEdit::Invalid(raw) => {
                    println!("Unknown edit '{}'. Try :add, :toggle, :delete, :list or :quit", raw);
                    continue;
                }
            }
            print!("{}", render_list(assistant.tasks(), styled));
            continue;
        }

        println!("{}", render_transcript(&line.trim().to_lowercase()));
        assistant.handle_utterance(&line);
        print!("{}", render_list(assistant.tasks(), styled));
    }

    println!("\nGoodbye! {} task(s) saved.", assistant.tasks().len());
    Ok(())
}

fn apply_overrides(settings: &mut Settings, args: &Args) {
    if let Some(path) = &args.store {
        settings.storage.path = path.clone();
    }
    if args.mute {
        settings.speech.muted = true;
    }
    if args.announce_missing {
        settings.behavior.missing_task = MissingTaskPolicy::Announce;
    }
}

fn parse_direct_edit(line: &str) -> Option<DirectEdit<'_>> {
    let rest = line.trim().strip_prefix(':')?;
    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };

    let position = || {
        DIGITS_PATTERN
            .find(arg)
            .and_then(|m| m.as_str().parse::<usize>().ok())
    };

    let edit = match name {
        "add" | "a" => DirectEdit::Add(arg),
        "toggle" | "t" => position().map_or(DirectEdit::Invalid(rest), DirectEdit::Toggle),
        "delete" | "d" => position().map_or(DirectEdit::Invalid(rest), DirectEdit::Delete),
        "list" | "l" => DirectEdit::List,
        "quit" | "q" => DirectEdit::Quit,
        _ => DirectEdit::Invalid(rest),
    };
    Some(edit)
}
