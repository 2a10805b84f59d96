//! Command routing
//!
//! Maps a line of user input, or a single-key shortcut, to a [`Command`]
//! and runs it against a [`Session`].

use crate::error::{CommandError, PaletteError};
use crate::services::{AddOutcome, FixedExtractor};
use crate::session::Session;
use color_harmony::HarmonyScheme;
use std::str::FromStr;

pub const HELP: &str = "\
Commands:
  add                 add the current color to the palette      (a)
  remove N            remove palette color N
  pick N              select palette color N
  color HEX           enter a color
  random              pick a random color                       (r)
  harmony SCHEME      replace the palette with a harmony set    (1-6)
                      complementary, analogous, triadic,
                      split-complementary, tetradic, monochromatic
  save NAME           save the palette
  load N              load saved palette N
  delete N            delete saved palette N
  copy [HEX]          copy the current color, or HEX            (c)
  extract HEX,HEX,... use colors delivered by an image extractor
  show                show the current color and palette
  saved               list saved palettes
  help                show this help
  quit                leave the session                         (q)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add,
    Remove(usize),
    Pick(usize),
    Color(String),
    Random,
    Harmony(HarmonyScheme),
    Save(String),
    Load(usize),
    Delete(usize),
    Copy(Option<String>),
    Extract(Vec<String>),
    Show,
    Saved,
    Help,
    Quit,
}

impl Command {
    /// Single-key shortcut. Digits select the harmony schemes in
    /// [`HarmonyScheme::ALL`] order.
    pub fn from_shortcut(key: char) -> Option<Command> {
        match key {
            'r' => Some(Command::Random),
            'a' => Some(Command::Add),
            'c' => Some(Command::Copy(None)),
            'q' => Some(Command::Quit),
            '1'..='6' => {
                let index = key.to_digit(10)? as usize - 1;
                Some(Command::Harmony(HarmonyScheme::ALL[index]))
            }
            _ => None,
        }
    }

    /// Parse a line of input, trying shortcuts first for one-character lines
    pub fn parse_input(line: &str) -> Result<Command, CommandError> {
        let line = line.trim();
        let mut chars = line.chars();
        if let (Some(key), None) = (chars.next(), chars.next()) {
            if let Some(command) = Command::from_shortcut(key) {
                return Ok(command);
            }
        }
        line.parse()
    }
}

fn parse_index(arg: &str) -> Result<usize, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingArgument("index"));
    }
    arg.parse()
        .map_err(|_| CommandError::InvalidIndex(arg.to_string()))
}

fn require<'a>(arg: &'a str, name: &'static str) -> Result<&'a str, CommandError> {
    if arg.is_empty() {
        Err(CommandError::MissingArgument(name))
    } else {
        Ok(arg)
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (word, arg) = s
            .split_once(char::is_whitespace)
            .map_or((s, ""), |(word, arg)| (word, arg.trim()));

        match word.to_ascii_lowercase().as_str() {
            "add" => Ok(Command::Add),
            "remove" | "rm" => Ok(Command::Remove(parse_index(arg)?)),
            "pick" => Ok(Command::Pick(parse_index(arg)?)),
            "color" => Ok(Command::Color(require(arg, "color")?.to_string())),
            "random" => Ok(Command::Random),
            "harmony" => Ok(Command::Harmony(require(arg, "scheme")?.parse()?)),
            "save" => Ok(Command::Save(require(arg, "name")?.to_string())),
            "load" => Ok(Command::Load(parse_index(arg)?)),
            "delete" => Ok(Command::Delete(parse_index(arg)?)),
            "copy" => Ok(Command::Copy((!arg.is_empty()).then(|| arg.to_string()))),
            "extract" => Ok(Command::Extract(
                arg.split(|c: char| c == ',' || c.is_whitespace())
                    .filter(|hex| !hex.is_empty())
                    .map(str::to_string)
                    .collect(),
            )),
            "show" => Ok(Command::Show),
            "saved" => Ok(Command::Saved),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(s.to_string())),
        }
    }
}

/// Result of running a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Command succeeded; message for the user
    Done(String),
    /// Command was rejected; the session is unchanged
    Failed(String),
    Quit,
}

/// Run `command` against `session`
pub async fn dispatch(session: &mut Session, command: Command) -> Outcome {
    let result = match command {
        Command::Add => session.add_current().map(|outcome| match outcome {
            AddOutcome::Added => format!("Added {}", session.current_color()),
            AddOutcome::Duplicate => {
                format!("{} is already in the palette", session.current_color())
            }
        }),
        Command::Remove(index) => session.remove(index).map(|c| format!("Removed {c}")),
        Command::Pick(index) => session.pick(index).map(|c| format!("Selected {c}")),
        Command::Color(text) => session.enter_color(&text).map(|c| format!("Selected {c}")),
        Command::Random => Ok(format!("Selected {}", session.randomize())),
        Command::Harmony(scheme) => {
            session.apply_harmony(scheme);
            Ok(format!("{scheme}: {}", join(session.palette())))
        }
        Command::Save(name) => session
            .save(&name)
            .map(|saved| format!("Saved \"{}\" ({} colors)", saved.name, saved.len())),
        Command::Load(index) => session
            .load(index)
            .map(|c| format!("Loaded {}, selected {c}", join(session.palette()))),
        Command::Delete(index) => session
            .delete(index)
            .map(|saved| format!("Deleted \"{}\"", saved.name)),
        Command::Copy(None) => session.copy_current().await.map(|c| format!("Copied {c}")),
        Command::Copy(Some(hex)) => session.copy(&hex).await.map(|c| format!("Copied {c}")),
        Command::Extract(hexes) => {
            let extractor = FixedExtractor::new(hexes, session.extraction_count());
            session.extract(&extractor, &[]).await.map(|first| match first {
                Some(c) => format!("Extracted {}, selected {c}", join(session.palette())),
                None => "No colors extracted, palette unchanged".to_string(),
            })
        }
        Command::Show => Ok(show(session)),
        Command::Saved => Ok(list_saved(session)),
        Command::Help => Ok(HELP.to_string()),
        Command::Quit => return Outcome::Quit,
    };

    match result {
        Ok(message) => Outcome::Done(message),
        Err(e) => Outcome::Failed(failure_message(&e)),
    }
}

fn failure_message(error: &PaletteError) -> String {
    format!("Error: {error}")
}

fn join(colors: &[color_harmony::Color]) -> String {
    colors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn show(session: &Session) -> String {
    let mut out = session.color_info().to_string();
    out.push_str("\nPalette:");
    if session.palette().is_empty() {
        out.push_str(" (empty)");
    }
    for (i, color) in session.palette().iter().enumerate() {
        let marker = if *color == session.current_color() { "*" } else { " " };
        out.push_str(&format!("\n {marker}[{i}] {color}"));
    }
    out
}

fn list_saved(session: &Session) -> String {
    if session.saved().is_empty() {
        return "No saved palettes".to_string();
    }
    session
        .saved()
        .iter()
        .enumerate()
        .map(|(i, saved)| {
            format!(
                "[{i}] {} ({}) {}",
                saved.name,
                saved.created_at.format("%Y-%m-%d %H:%M"),
                join(&saved.colors)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
