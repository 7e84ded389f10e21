use std::path::PathBuf;
use std::sync::Arc;

use guard_config::Config;
use guard_types::{Allergy, AppEvent, MenuSource, NoticeLevel};
use kanal::{AsyncReceiver, AsyncSender};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

use crate::report::render_text;

pub const HELP: &str = "\
Commands:
  add <name>         add an allergy
  quick <name>       add one of the common allergies
  remove <id|name>   remove an allergy
  list               show your allergies
  menu <file>        load menu text from a .txt file
  text               type or paste the menu, finish with a line containing only '.'
  analyze            analyze the loaded menu
  help               show this help
  quit               exit";

/// What a line of console input amounts to
#[derive(Debug)]
pub enum Feed {
    Event(AppEvent),
    /// Line swallowed into a menu being typed
    Pending,
    Help,
    Invalid(String),
}

/// Turns console lines into app events
#[derive(Debug, Default)]
pub struct CommandReader {
    typing: Option<Vec<String>>,
}

impl CommandReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_typing(&self) -> bool {
        self.typing.is_some()
    }

    pub fn feed(&mut self, line: &str) -> Feed {
        if let Some(lines) = self.typing.as_mut() {
            if line.trim() == "." {
                let text = lines.join("\n");
                self.typing = None;
                return Feed::Event(AppEvent::SetMenuText {
                    text,
                    source: MenuSource::Typed,
                });
            }
            lines.push(line.to_string());
            return Feed::Pending;
        }

        let line = line.trim();
        let (command, arg) = match line.split_once(char::is_whitespace) {
            Some((command, arg)) => (command, arg.trim()),
            None => (line, ""),
        };

        match (command.to_ascii_lowercase().as_str(), arg) {
            ("", _) => Feed::Pending,
            ("add", "") | ("quick", "") | ("remove", "") | ("menu", "") => {
                Feed::Invalid(format!("'{command}' needs an argument"))
            }
            ("add", name) => Feed::Event(AppEvent::AddAllergy(name.to_string())),
            ("quick", label) => Feed::Event(AppEvent::QuickPick(label.to_string())),
            ("remove", key) => Feed::Event(AppEvent::RemoveAllergy(key.to_string())),
            ("list", _) => Feed::Event(AppEvent::ListAllergies),
            ("menu", path) => Feed::Event(AppEvent::LoadMenuFile(PathBuf::from(path))),
            ("text", _) => {
                self.typing = Some(Vec::new());
                Feed::Pending
            }
            ("analyze", _) => Feed::Event(AppEvent::AnalyzeMenu),
            ("help", _) => Feed::Help,
            ("quit", _) | ("exit", _) => Feed::Event(AppEvent::Shutdown),
            _ => Feed::Invalid(format!("Unknown command '{command}', type 'help'")),
        }
    }
}

/// Reads commands from stdin and forwards them to the app
pub async fn input_loop(
    ui_to_app_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut reader = CommandReader::new();

    println!("{HELP}");

    loop {
        let line = tokio::select! {
            _ = cancel.cancelled() => break,
            line = lines.next_line() => line?,
        };

        let Some(line) = line else {
            tracing::debug!("stdin closed");
            ui_to_app_tx.send(AppEvent::Shutdown).await?;
            break;
        };

        match reader.feed(&line) {
            Feed::Event(event) => {
                let shutdown = matches!(event, AppEvent::Shutdown);
                ui_to_app_tx.send(event).await?;
                if shutdown {
                    break;
                }
            }
            Feed::Pending => {}
            Feed::Help => println!("{HELP}"),
            Feed::Invalid(message) => eprintln!("{message}"),
        }
    }

    Ok(())
}

/// Prints what the app sends back until it shuts down
pub async fn output_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    config: Arc<RwLock<Config>>,
) -> anyhow::Result<()> {
    while let Ok(event) = app_to_ui_rx.recv().await {
        if matches!(event, AppEvent::Shutdown) {
            break;
        }
        let max_ingredients = config.read().await.report.max_ingredients;
        if let Some(text) = format_event(&event, max_ingredients) {
            println!("{text}");
        }
    }

    Ok(())
}

pub fn format_event(event: &AppEvent, max_ingredients: usize) -> Option<String> {
    match event {
        AppEvent::Notice(notice) => Some(match notice.level {
            NoticeLevel::Info => format!("{}: {}", notice.title, notice.description),
            NoticeLevel::Error => format!("! {}: {}", notice.title, notice.description),
        }),
        AppEvent::AllergiesChanged {
            allergies,
            quick_picks,
        } => Some(format_allergies(allergies, quick_picks)),
        AppEvent::MenuLoaded { lines, source } => {
            Some(format!("Loaded menu text ({lines} lines) from {source}"))
        }
        AppEvent::AnalysisStarted => Some("Analyzing menu items...".to_string()),
        AppEvent::ShowResults(dishes) => Some(render_text(dishes, max_ingredients)),
        _ => None,
    }
}

fn format_allergies(allergies: &[Allergy], quick_picks: &[String]) -> String {
    let mut out = if allergies.is_empty() {
        "No allergies yet".to_string()
    } else {
        let names: Vec<String> = allergies
            .iter()
            .map(|a| format!("{} [{}]", a.name, a.id))
            .collect();
        format!("Your allergies: {}", names.join(", "))
    };

    if !quick_picks.is_empty() {
        out.push_str(&format!("\nQuick add common allergies: {}", quick_picks.join(", ")));
    }

    out
}
