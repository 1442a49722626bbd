mod commands;
mod render;

use std::borrow::Cow::{self, Borrowed, Owned};
use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use tokio::sync::mpsc;

use nagar_application::{AttachOutcome, ChatService};
use nagar_core::auth::{AuthContext, StaticAuthContext};
use nagar_core::quick_action::QuickActionEffect;
use nagar_core::waste::WasteTips;
use nagar_execution::logging::init_tracing;
use nagar_infrastructure::ConfigService;
use nagar_interaction::SubmitOutcome;

use commands::{COMMANDS, Command};

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
struct CliHelper;

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            let candidates = COMMANDS
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.to_string(),
                    replacement: cmd.to_string(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            COMMANDS
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

/// Signed-in identity from `NAGAR_USER_ID` / `NAGAR_USER_EMAIL`; anonymous
/// when unset.
fn auth_from_env() -> Arc<dyn AuthContext> {
    match std::env::var("NAGAR_USER_ID") {
        Ok(user_id) if !user_id.trim().is_empty() => Arc::new(StaticAuthContext::signed_in(
            user_id,
            std::env::var("NAGAR_USER_EMAIL").ok(),
        )),
        _ => Arc::new(StaticAuthContext::new(None)),
    }
}

/// Runs one command. Returns `false` when the REPL should exit.
async fn run_command(service: &ChatService, tips: &mut WasteTips, command: Command) -> bool {
    let driver = service.driver();
    match command {
        Command::Say(text) => {
            if driver.submit_text(text).await == SubmitOutcome::Ignored {
                println!("{}", "Nothing to send.".bright_black());
            }
        }
        Command::Attach(path) => match service.attach_file(&path).await {
            Ok(AttachOutcome::Attached) => {
                let input = driver.snapshot().await.pending_input;
                println!(
                    "{}",
                    format!("Press enter on an empty line to send: \"{}\"", input).bright_black()
                );
            }
            Ok(_) => {}
            Err(e) if e.is_validation() => {}
            Err(e) => eprintln!("{}", format!("Could not attach {}: {}", path.display(), e).red()),
        },
        Command::Detach => driver.clear_attachment().await,
        Command::ToggleLanguage => {
            driver.switch_language().await;
        }
        Command::Clear => driver.clear().await,
        Command::Track(id) => match service.track(&id).await {
            Ok(Some(record)) => println!("{}", render::record(&record)),
            Ok(None) => println!(
                "{}",
                format!("No complaint found with ID {}", id.trim()).yellow()
            ),
            Err(e) => eprintln!("{}", format!("Lookup failed: {}", e).red()),
        },
        Command::Complaint { details, formal } => {
            // Validation failures arrive as notices.
            let _ = service.submit_complaint(&details, formal).await;
        }
        Command::Quick(id) => match service.quick_action(&id).await {
            Ok(QuickActionEffect::OpenComplaintDrawer) => {
                println!("{}", "usage: /complaint <kind> <location> | <description>".bright_black());
            }
            Ok(QuickActionEffect::SetInput(text)) => {
                println!("{}", format!("Press enter on an empty line to send: \"{}\"", text).bright_black());
            }
            Err(e) => eprintln!("{}", e.to_string().red()),
        },
        Command::Tips => {
            let language = driver.language().await;
            let tip = tips.advance();
            println!("{}", WasteTips::heading(language).bright_green().bold());
            println!("{}: {}", tip.title.bright_green(), tip.description);
        }
        Command::Help => println!("{}", commands::help_text().bright_black()),
        Command::Quit => return false,
    }
    true
}

#[tokio::main]
async fn main() -> Result<()> {
    let (diagnostics_tx, mut diagnostics_rx) = mpsc::unbounded_channel();
    init_tracing("warn", false, Some(diagnostics_tx));

    let config = ConfigService::new().get_config();
    let (service, mut events) = ChatService::from_config(&config, auth_from_env())?;

    let printer = tokio::spawn(async move {
        loop {
            tokio::select! {
                Some(event) = events.recv() => {
                    if let Some(line) = render::event(&event) {
                        println!("{}", line);
                    }
                }
                Some(diagnostic) = diagnostics_rx.recv() => {
                    eprintln!("{}", render::diagnostic(&diagnostic));
                }
                else => break,
            }
        }
    });

    let mut rl = Editor::new()?;
    rl.set_helper(Some(CliHelper));
    let mut tips = WasteTips::new();

    println!("{}", "=== Nagarsathi ===".bright_magenta().bold());
    for message in service.driver().snapshot().await.messages {
        println!("{}", message.text.bright_blue());
    }
    println!("{}", "Type /help for commands, or 'quit' to exit.".bright_black());
    println!();

    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let trimmed = line.trim();
                let command = if trimmed.is_empty() {
                    // An empty line sends whatever is pending (prefilled text, image).
                    Command::Say(service.driver().snapshot().await.pending_input)
                } else {
                    let _ = rl.add_history_entry(trimmed);
                    match commands::parse(trimmed) {
                        Ok(command) => command,
                        Err(usage) => {
                            println!("{}", usage.yellow());
                            continue;
                        }
                    }
                };

                if !run_command(&service, &mut tips, command).await {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    service.driver().shutdown();
    printer.abort();
    Ok(())
}
