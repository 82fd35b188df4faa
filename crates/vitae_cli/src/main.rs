//! Line-oriented editor shell over `vitae_core`.
//!
//! # Responsibility
//! - Implement the display surfaces on the console.
//! - Translate typed commands into orchestrator entry points.

use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use vitae_core::db::open_db;
use vitae_core::{
    assist_reply, default_log_level, init_logging, Document, EditorListSurface, InputEvent,
    PreviewSurface, PrintDialog, RenderOrchestrator, Section, SnapshotError, SnapshotRenderer,
    SqliteDocumentRepository, StatusSurface, TemplateRegistry,
};

const DB_FILE_NAME: &str = "vitae.sqlite3";

/// Keeps the latest rendered markup for the `show` command.
#[derive(Clone, Default)]
struct MarkupSlot(Rc<RefCell<String>>);

struct ConsolePreview(MarkupSlot);

impl PreviewSurface for ConsolePreview {
    fn show(&mut self, markup: &str) {
        *self.0 .0.borrow_mut() = markup.to_string();
    }

    fn set_capture_width(&mut self, _width_mm: u32) {}

    fn clear_capture_width(&mut self) {}
}

struct ConsoleEditorList;

impl EditorListSurface for ConsoleEditorList {
    fn rebuild(&mut self, document: &Document) {
        for (index, entry) in document.work.iter().enumerate() {
            println!("  work[{index}] {} @ {}", entry.title, entry.company);
        }
        for (index, entry) in document.education.iter().enumerate() {
            println!("  education[{index}] {} / {}", entry.school, entry.degree);
        }
    }
}

struct ConsoleStatus;

impl StatusSurface for ConsoleStatus {
    fn flash_saved(&mut self, _visible_for: Duration) {
        println!("saved");
    }

    fn set_export_busy(&mut self, busy: bool) {
        if busy {
            println!("generating...");
        }
    }

    fn show_error(&mut self, message: &str) {
        eprintln!("error: {message}");
    }
}

/// The console shell carries no rasterizer; it snapshots the rendered
/// markup bytes directly. Desktop shells plug a real renderer in here.
struct MarkupSnapshotRenderer;

impl SnapshotRenderer for MarkupSnapshotRenderer {
    fn rasterize(&self, markup: &str, _page_width_mm: u32) -> Result<Vec<u8>, SnapshotError> {
        Ok(markup.as_bytes().to_vec())
    }
}

struct ConsolePrintDialog;

impl PrintDialog for ConsolePrintDialog {
    fn open(&self) {
        println!("handed to the platform print dialog");
    }
}

fn data_dir() -> PathBuf {
    std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| dirs::data_dir().map(|dir| dir.join("vitae")))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn main() {
    if let Err(message) = run() {
        eprintln!("vitae: {message}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let data_dir = data_dir();
    std::fs::create_dir_all(&data_dir)
        .map_err(|err| format!("cannot create data dir `{}`: {err}", data_dir.display()))?;

    let log_dir = data_dir.join("logs");
    if let Some(log_dir) = log_dir.to_str() {
        // File logging is best-effort for the shell; the editor works
        // without it.
        if let Err(message) = init_logging(default_log_level(), log_dir) {
            eprintln!("vitae: logging disabled: {message}");
        }
    }

    let conn = open_db(data_dir.join(DB_FILE_NAME)).map_err(|err| err.to_string())?;
    let markup = MarkupSlot::default();
    let mut orchestrator = RenderOrchestrator::bootstrap(
        SqliteDocumentRepository::new(&conn),
        TemplateRegistry::with_builtins(),
        ConsolePreview(markup.clone()),
        ConsoleEditorList,
        ConsoleStatus,
    )
    .map_err(|err| err.to_string())?;

    println!("vitae {} (type `help` for commands)", vitae_core::core_version());
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).map_err(|err| err.to_string())? == 0 {
            return Ok(());
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "exit" {
            return Ok(());
        }

        if let Err(message) = handle_command(&mut orchestrator, &markup, line) {
            eprintln!("vitae: {message}");
        }
    }
}

type Shell<'conn> = RenderOrchestrator<
    SqliteDocumentRepository<'conn>,
    ConsolePreview,
    ConsoleEditorList,
    ConsoleStatus,
>;

fn handle_command(
    orchestrator: &mut Shell<'_>,
    markup: &MarkupSlot,
    line: &str,
) -> Result<(), String> {
    let mut parts = line.splitn(2, ' ');
    let command = parts.next().unwrap_or_default();
    let rest = parts.next().unwrap_or_default();

    match command {
        "help" => print_help(),
        "show" => println!("{}", markup.0.borrow()),
        "set" => {
            let (key, value) = split_arg(rest, "set <field> <value>")?;
            dispatch(orchestrator, InputEvent::named(key, value))?;
        }
        "work" | "edu" => {
            let section = if command == "work" { "work" } else { "education" };
            if rest == "add" {
                let result = if command == "work" {
                    orchestrator.add_experience()
                } else {
                    orchestrator.add_education()
                };
                result.map_err(|err| err.to_string())?;
            } else {
                let (index, rest) = split_arg(rest, "work|edu <index> <field> <value>")?;
                let index: usize = index.parse().map_err(|_| "index must be a number")?;
                let (field, value) = split_arg(rest, "work|edu <index> <field> <value>")?;
                dispatch(orchestrator, InputEvent::sectioned(section, index, field, value))?;
            }
        }
        "rm" => {
            let (section, index) = split_arg(rest, "rm <work|education> <index>")?;
            let section = Section::parse(section).ok_or("section must be work or education")?;
            let index: usize = index.parse().map_err(|_| "index must be a number")?;
            orchestrator
                .remove_item(section, index)
                .map_err(|err| err.to_string())?;
        }
        "template" => {
            orchestrator
                .set_template(rest)
                .map_err(|err| err.to_string())?;
        }
        "color" => {
            orchestrator.set_color(rest).map_err(|err| err.to_string())?;
        }
        "export" => {
            let out_dir = if rest.is_empty() { "." } else { rest };
            // Failures are already reported through the status surface.
            if let Ok(path) =
                orchestrator.export(&MarkupSnapshotRenderer, std::path::Path::new(out_dir))
            {
                println!("exported {}", path.display());
            }
        }
        "print" => orchestrator.print(&ConsolePrintDialog),
        "assist" => println!("{}", assist_reply(rest)),
        other => return Err(format!("unknown command `{other}`; try `help`")),
    }
    Ok(())
}

fn dispatch(orchestrator: &mut Shell<'_>, event: InputEvent) -> Result<(), String> {
    orchestrator.handle_input(event).map_err(|err| err.to_string())?;
    Ok(())
}

fn split_arg<'line>(rest: &'line str, usage: &str) -> Result<(&'line str, &'line str), String> {
    let mut parts = rest.splitn(2, ' ');
    match (parts.next().filter(|part| !part.is_empty()), parts.next()) {
        (Some(first), Some(second)) => Ok((first, second)),
        _ => Err(format!("usage: {usage}")),
    }
}

fn print_help() {
    println!(
        "\
commands:
  set <field> <value>            edit a top-level field (fullName, email, ...)
  work add | edu add             append a placeholder entry
  work <i> <field> <value>       edit one work entry field
  edu <i> <field> <value>        edit one education entry field
  rm <work|education> <i>        remove the entry at index i
  template <id>                  switch template (modern, classic, minimal)
  color <css-color>              change the accent color
  show                           dump the current preview markup
  export [dir]                   export the snapshot artifact
  print                          open the platform print dialog
  assist <field>                 writing-assist stub
  quit"
    );
}
