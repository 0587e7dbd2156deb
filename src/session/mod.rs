//! The interactive editor.
//!
//! A [`Session`] holds every open deck with its own undo history, the
//! current display mode and the theme. [`Session::run`] reads commands line
//! by line from any `BufRead` and writes everything it shows to any `Write`,
//! so tests drive it with byte buffers.

pub mod command;
pub mod view;
pub mod wizard;

use std::collections::HashMap;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use crate::color::Color;
use crate::config::{Config, DisplayMode};
use crate::deck::{Deck, LoadWarning};
use crate::history::History;
use crate::slide::Slide;
use crate::theme::Theme;

pub use command::{normalize_path, parse_number, Command};
pub use wizard::{parse_inline_add, read_line, Prompter};

/// File name used when nothing could be loaded.
pub const UNTITLED: &str = "untitled.txt";

/// File name used by `new` without an argument.
pub const NEW_DECK: &str = "new_presentation.txt";

const NO_DECK: &str = "No presentation open. Use 'new' to create one.";
const NO_SLIDE: &str = "No slide selected. Use 'newslide' to add one.";

/// Whether the loop keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

#[derive(Debug, Clone, Copy)]
enum Step {
    Undo,
    Redo,
}

/// A deck together with its undo history.
#[derive(Debug)]
struct OpenDeck {
    deck: Deck,
    history: History,
}

pub struct Session {
    decks: Vec<OpenDeck>,
    current: usize,
    /// Normalized file name to position in `decks`.
    names: HashMap<String, usize>,
    mode: DisplayMode,
    config: Config,
    theme: Theme,
}

fn say<W: Write>(out: &mut W, line: &str) -> io::Result<()> {
    writeln!(out, "{}", line)
}

fn say_all<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

fn deck_key(path: &Path) -> String {
    normalize_path(&path.display().to_string())
}

/// Append `extension` unless the name already has some extension.
fn with_default_extension(name: &str, extension: &str) -> String {
    if name.contains('.') {
        name.to_string()
    } else {
        format!("{}{}", name, extension)
    }
}

impl Session {
    pub fn new(config: Config, theme: Theme) -> Self {
        Self {
            decks: Vec::new(),
            current: 0,
            names: HashMap::new(),
            mode: config.display.mode,
            config,
            theme,
        }
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn deck_count(&self) -> usize {
        self.decks.len()
    }

    /// The deck commands currently act on.
    pub fn current_deck(&self) -> Option<&Deck> {
        self.decks.get(self.current).map(|open| &open.deck)
    }

    pub fn current_history(&self) -> Option<&History> {
        self.decks.get(self.current).map(|open| &open.history)
    }

    /// Open deck by file name, matched after normalization.
    pub fn find_deck(&self, name: &str) -> Option<&Deck> {
        self.names
            .get(&normalize_path(name))
            .and_then(|&index| self.decks.get(index))
            .map(|open| &open.deck)
    }

    /// Register a deck and make it current. Returns its position.
    pub fn add_deck(&mut self, deck: Deck) -> usize {
        let index = self.decks.len();
        self.names.insert(deck_key(deck.filename()), index);
        self.decks.push(OpenDeck {
            deck,
            history: History::new(self.config.history.max_depth),
        });
        self.current = index;
        index
    }

    /// Load every file in `paths`, reporting each outcome. When nothing
    /// loads, an untitled deck with one blank slide is created.
    pub fn open_files<W: Write>(&mut self, paths: &[PathBuf], out: &mut W) -> io::Result<()> {
        say(out, &self.theme.info("Loading presentations..."))?;
        for path in paths {
            let shown = path.display().to_string();
            if self.names.contains_key(&deck_key(path)) {
                say(out, &self.theme.warn(&format!("Already open: {}", shown)))?;
                continue;
            }
            match Deck::load(path, self.config.blank_slide()) {
                Ok((deck, _)) if deck.is_empty() => {
                    say(out, &self.theme.warn(&format!("No slides found in: {}", shown)))?;
                }
                Ok((deck, warnings)) => {
                    let skipped = warnings
                        .iter()
                        .filter(|w| matches!(w, LoadWarning::Skipped { .. }))
                        .count();
                    say(
                        out,
                        &self.theme.ok(&format!(
                            "Loaded {} slide(s) from: {}",
                            deck.len(),
                            shown
                        )),
                    )?;
                    if skipped > 0 {
                        say(
                            out,
                            &self.theme.warn(&format!(
                                "Skipped {} malformed line(s) in {} (run with -vv for details)",
                                skipped, shown
                            )),
                        )?;
                    }
                    self.add_deck(deck);
                }
                Err(e) => say(out, &self.theme.err(&e.to_string()))?,
            }
        }

        if self.decks.is_empty() {
            let mut deck = Deck::with_blank(UNTITLED, self.config.blank_slide());
            deck.add_slide(self.config.blank_slide());
            self.add_deck(deck);
            say(out, &self.theme.info("Created empty presentation."))?;
        }
        self.current = 0;
        say(
            out,
            &self.theme.ok(&format!(
                "{} presentation(s) loaded. Type help for commands.",
                self.decks.len()
            )),
        )
    }

    /// Show the current slide, then read and execute commands until `exit`
    /// or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> io::Result<()> {
        self.show(out)?;
        loop {
            let prompt = view::prompt(&self.theme, self.current_deck());
            write!(out, "{}", prompt)?;
            out.flush()?;
            let Some(line) = read_line(input)? else {
                say(out, "")?;
                break;
            };
            tracing::debug!(command = %line.trim(), "editor input");
            if self.execute(&line, input, out)? == Flow::Exit {
                break;
            }
        }
        out.flush()
    }

    /// Execute one line of input. Wizards read their answers from `input`.
    pub fn execute<R: BufRead, W: Write>(
        &mut self,
        line: &str,
        input: &mut R,
        out: &mut W,
    ) -> io::Result<Flow> {
        match Command::parse(line) {
            Command::Empty => {}
            Command::Next => self.step_slide(true, out)?,
            Command::Prev => self.step_slide(false, out)?,
            Command::Show => self.show(out)?,
            Command::Goto { number } => self.goto(&number, out)?,
            Command::GotoFile { file, number } => self.goto_file(&file, &number, out)?,
            Command::NextFile => self.step_file(true, out)?,
            Command::PrevFile => self.step_file(false, out)?,
            Command::Add { args } => self.add(&args, input, out)?,
            Command::Delete { index } => self.delete(index.as_deref(), out)?,
            Command::Edit { index } => self.edit(index.as_deref(), input, out)?,
            Command::List => self.list(out)?,
            Command::Clear => self.clear(out)?,
            Command::NewSlide => self.new_slide(out)?,
            Command::DelSlide { number } => self.delete_slide(number.as_deref(), out)?,
            Command::Title { text } => self.title(&text, out)?,
            Command::Background { color } => self.background(color.as_deref(), out)?,
            Command::Visual => self.set_mode(DisplayMode::Visual, out)?,
            Command::Text => self.set_mode(DisplayMode::Text, out)?,
            Command::Export { file } => self.export(file.as_deref(), out)?,
            Command::ExportAll { prefix } => self.export_all(prefix.as_deref(), out)?,
            Command::ExportJson { file, all } => self.export_json(file.as_deref(), all, out)?,
            Command::New { file } => self.new_deck(file.as_deref(), out)?,
            Command::Save => self.save(out)?,
            Command::SaveAs { file } => self.save_as(file.as_deref(), out)?,
            Command::Undo => self.history_step(Step::Undo, out)?,
            Command::Redo => self.history_step(Step::Redo, out)?,
            Command::History => match self.current_history() {
                Some(history) => say_all(out, &view::history(&self.theme, history))?,
                None => say(out, &self.theme.err(NO_DECK))?,
            },
            Command::Shapes => say_all(out, &view::shape_catalog(&self.theme))?,
            Command::Colors => say_all(out, &view::color_catalog(&self.theme))?,
            Command::Help => say_all(out, &view::help(&self.theme))?,
            Command::Exit => {
                for open in self.decks.iter().filter(|open| open.deck.is_modified()) {
                    let message = format!("Unsaved changes in: {}", open.deck.filename().display());
                    say(out, &self.theme.warn(&message))?;
                }
                say(out, &self.theme.info("Exiting slideshow. Goodbye!"))?;
                return Ok(Flow::Exit);
            }
            Command::Usage(usage) => say(out, &self.theme.info(&format!("Usage: {}", usage)))?,
            Command::Unknown(_) => say(
                out,
                &self
                    .theme
                    .err("Unknown command. Type help for available commands."),
            )?,
        }
        Ok(Flow::Continue)
    }

    /// Print the current slide in the active display mode.
    pub fn show<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let Some(deck) = self.current_deck() else {
            return say(out, &self.theme.warn(NO_DECK));
        };
        let lines = match self.mode {
            DisplayMode::Text => view::slide_text(&self.theme, deck),
            DisplayMode::Visual => view::slide_visual(&self.theme, deck),
        };
        say_all(out, &lines)
    }

    fn current_slide(&self) -> Option<&Slide> {
        self.current_deck().and_then(Deck::current)
    }

    /// Print why there is no slide to work on. True when there is one.
    fn require_slide<W: Write>(&self, out: &mut W) -> io::Result<bool> {
        if self.current_deck().is_none() {
            say(out, &self.theme.err(NO_DECK))?;
            return Ok(false);
        }
        if self.current_slide().is_none() {
            say(out, &self.theme.err(NO_SLIDE))?;
            return Ok(false);
        }
        Ok(true)
    }

    /// Apply `edit` to the current slide. When it reports a change, the
    /// previous state is recorded under `description` and the deck is
    /// marked modified. `edit` must leave the slide untouched when it
    /// returns false.
    fn edit_current(&mut self, description: &str, edit: impl FnOnce(&mut Slide) -> bool) -> bool {
        let Some(open) = self.decks.get_mut(self.current) else {
            return false;
        };
        let number = open.deck.current_number();
        let Some(slide) = open.deck.current_mut() else {
            return false;
        };
        let before = slide.clone();
        if !edit(slide) {
            return false;
        }
        open.history.record(number, &before, description);
        open.deck.set_modified(true);
        true
    }

    fn step_slide<W: Write>(&mut self, forward: bool, out: &mut W) -> io::Result<()> {
        let Some(open) = self.decks.get_mut(self.current) else {
            return say(out, &self.theme.err(NO_DECK));
        };
        let moved = if forward {
            open.deck.next()
        } else {
            open.deck.prev()
        };
        if moved {
            self.show(out)
        } else if forward {
            say(out, &self.theme.info("Already at the last slide."))
        } else {
            say(out, &self.theme.info("Already at the first slide."))
        }
    }

    fn goto<W: Write>(&mut self, number: &str, out: &mut W) -> io::Result<()> {
        let Some(open) = self.decks.get_mut(self.current) else {
            return say(out, &self.theme.err(NO_DECK));
        };
        let Some(number) = parse_number(number) else {
            return say(out, &self.theme.err("Invalid slide number format."));
        };
        if open.deck.goto(number) {
            self.show(out)
        } else {
            let message = format!("Invalid slide number. Valid range: 1-{}", open.deck.len());
            say(out, &self.theme.err(&message))
        }
    }

    fn goto_file<W: Write>(&mut self, file: &str, number: &str, out: &mut W) -> io::Result<()> {
        let Some(&index) = self.names.get(file) else {
            say(out, &self.theme.err(&format!("Presentation not found: {}", file)))?;
            say(out, &self.theme.info("Available presentations:"))?;
            for open in &self.decks {
                say(out, &format!("  - {}", open.deck.filename().display()))?;
            }
            return Ok(());
        };
        self.current = index;
        self.goto(number, out)
    }

    fn step_file<W: Write>(&mut self, forward: bool, out: &mut W) -> io::Result<()> {
        if self.decks.is_empty() {
            return say(out, &self.theme.err(NO_DECK));
        }
        if forward && self.current + 1 >= self.decks.len() {
            return say(out, &self.theme.info("Already at the last presentation."));
        }
        if !forward && self.current == 0 {
            return say(out, &self.theme.info("Already at the first presentation."));
        }
        if forward {
            self.current += 1;
        } else {
            self.current -= 1;
        }
        let name = self.decks[self.current].deck.filename().display().to_string();
        say(out, &self.theme.ok(&format!("Switched to: {}", name)))?;
        self.show(out)
    }

    fn add<R: BufRead, W: Write>(
        &mut self,
        args: &[String],
        input: &mut R,
        out: &mut W,
    ) -> io::Result<()> {
        if !self.require_slide(out)? {
            return Ok(());
        }
        let shape = if args.is_empty() {
            let wizard = Prompter {
                input,
                output: &mut *out,
                theme: &self.theme,
            }
            .add_shape()?;
            match wizard {
                Some(shape) => shape,
                None => return Ok(()),
            }
        } else {
            match parse_inline_add(args) {
                Ok(shape) => shape,
                Err(reason) => return say(out, &self.theme.err(&reason)),
            }
        };
        let message = format!("Added {} at ({}, {})", shape.name(), shape.x(), shape.y());
        self.edit_current("Add shape", |slide| {
            slide.add(shape);
            true
        });
        say(out, &self.theme.ok(&message))
    }

    fn delete<W: Write>(&mut self, index: Option<&str>, out: &mut W) -> io::Result<()> {
        let Some(index) = index else {
            return say(out, &self.theme.info("Usage: delete <shape_number>"));
        };
        if !self.require_slide(out)? {
            return Ok(());
        }
        let removed = parse_number(index)
            .and_then(|n| n.checked_sub(1))
            .is_some_and(|i| self.edit_current("Delete shape", |slide| slide.remove(i)));
        if removed {
            say(out, &self.theme.ok("Shape deleted."))
        } else {
            say(out, &self.theme.err("Invalid shape index."))
        }
    }

    fn edit<R: BufRead, W: Write>(
        &mut self,
        index: Option<&str>,
        input: &mut R,
        out: &mut W,
    ) -> io::Result<()> {
        let Some(index) = index else {
            return say(out, &self.theme.info("Usage: edit <shape_number>"));
        };
        if !self.require_slide(out)? {
            return Ok(());
        }
        let number = parse_number(index).unwrap_or(0);
        let Some(shape) = number
            .checked_sub(1)
            .and_then(|i| self.current_slide().and_then(|slide| slide.get(i)))
            .cloned()
        else {
            return say(out, &self.theme.err("Invalid shape index."));
        };
        let edited = Prompter {
            input,
            output: &mut *out,
            theme: &self.theme,
        }
        .edit_shape(number, &shape)?;
        if let Some(edited) = edited {
            self.edit_current("Edit shape", |slide| match slide.get_mut(number - 1) {
                Some(slot) => {
                    *slot = edited;
                    true
                }
                None => false,
            });
        }
        Ok(())
    }

    fn list<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if !self.require_slide(out)? {
            return Ok(());
        }
        match self.current_slide() {
            Some(slide) => say_all(out, &slide.listing_lines(self.theme.enabled)),
            None => Ok(()),
        }
    }

    fn clear<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        if !self.require_slide(out)? {
            return Ok(());
        }
        let cleared = self.edit_current("Clear all shapes", |slide| {
            if slide.is_empty() {
                return false;
            }
            slide.clear();
            true
        });
        if cleared {
            say(out, &self.theme.ok("All shapes cleared from current slide."))
        } else {
            say(out, &self.theme.info("Slide is already empty."))
        }
    }

    fn new_slide<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let Some(open) = self.decks.get_mut(self.current) else {
            return say(out, &self.theme.err(NO_DECK));
        };
        let number = open.deck.add_new_slide();
        open.deck.goto(number);
        say(out, &self.theme.ok(&format!("Created new slide {}.", number)))?;
        self.show(out)
    }

    fn delete_slide<W: Write>(&mut self, number: Option<&str>, out: &mut W) -> io::Result<()> {
        let Some(number) = number else {
            return say(out, &self.theme.info("Usage: delslide <slide_number>"));
        };
        let Some(open) = self.decks.get_mut(self.current) else {
            return say(out, &self.theme.err(NO_DECK));
        };
        let Some(number) = parse_number(number).filter(|&n| open.deck.remove_slide(n)) else {
            return say(out, &self.theme.err("Invalid slide number."));
        };
        // Snapshots are keyed by slide number, which just shifted.
        open.history.clear();
        say(out, &self.theme.ok(&format!("Deleted slide {}.", number)))?;
        say(out, &self.theme.info("Undo history cleared."))?;
        self.show(out)
    }

    fn title<W: Write>(&mut self, text: &str, out: &mut W) -> io::Result<()> {
        if !self.require_slide(out)? {
            return Ok(());
        }
        let changed = self.edit_current("Set title", |slide| {
            if slide.title() == text {
                return false;
            }
            slide.set_title(text);
            true
        });
        if !changed {
            say(out, &self.theme.info("Title unchanged."))
        } else if text.is_empty() {
            say(out, &self.theme.ok("Title cleared."))
        } else {
            say(out, &self.theme.ok(&format!("Title set to: {}", text)))
        }
    }

    fn background<W: Write>(&mut self, color: Option<&str>, out: &mut W) -> io::Result<()> {
        let Some(requested) = color else {
            return say(out, &self.theme.info("Usage: background <color>"));
        };
        let Some(color) = Color::parse(requested) else {
            return say(out, &self.theme.err(&format!("Unknown color '{}'.", requested)));
        };
        if !self.require_slide(out)? {
            return Ok(());
        }
        self.edit_current("Change background", |slide| {
            if slide.background() == color {
                return false;
            }
            slide.set_background(color);
            true
        });
        say(out, &self.theme.ok(&format!("Background set to {}", color.name())))
    }

    fn set_mode<W: Write>(&mut self, mode: DisplayMode, out: &mut W) -> io::Result<()> {
        self.mode = mode;
        let message = match mode {
            DisplayMode::Visual => "Switched to visual mode.",
            DisplayMode::Text => "Switched to text mode.",
        };
        say(out, &self.theme.ok(message))?;
        self.show(out)
    }

    fn export<W: Write>(&self, file: Option<&str>, out: &mut W) -> io::Result<()> {
        let Some(file) = file else {
            say(out, &self.theme.info("Usage: export <filename>"))?;
            return say(out, &self.theme.info("  .svg writes SVG, anything else BMP"));
        };
        let Some(deck) = self.current_deck() else {
            return say(out, &self.theme.err(NO_DECK));
        };
        let lower = file.to_lowercase();
        let (path, result) = if lower.ends_with(".svg") {
            (file.to_string(), deck.export_current_svg(file))
        } else {
            let path = if lower.ends_with(".bmp") {
                file.to_string()
            } else {
                format!("{}.bmp", file)
            };
            let result = deck.export_current_bmp(&path);
            (path, result)
        };
        match result {
            Ok(()) => say(out, &self.theme.ok(&format!("Exported to: {}", path))),
            Err(e) => say(out, &self.theme.err(&format!("Failed to export: {}", e))),
        }
    }

    fn export_all<W: Write>(&self, prefix: Option<&str>, out: &mut W) -> io::Result<()> {
        let Some(deck) = self.current_deck() else {
            return say(out, &self.theme.err(NO_DECK));
        };
        let prefix = prefix.unwrap_or(&self.config.export.prefix);
        say(
            out,
            &self.theme.info(&format!(
                "Exporting {} slide(s) as BMP and SVG...",
                deck.len()
            )),
        )?;
        for outcome in deck.export_all(prefix) {
            let shown = outcome.path.display();
            match outcome.result {
                Ok(()) => say(out, &self.theme.ok(&format!("Exported: {}", shown)))?,
                Err(e) => say(
                    out,
                    &self.theme.err(&format!("Failed to export: {} ({})", shown, e)),
                )?,
            }
        }
        Ok(())
    }

    fn export_json<W: Write>(&self, file: Option<&str>, all: bool, out: &mut W) -> io::Result<()> {
        let Some(file) = file else {
            say(out, &self.theme.info("Usage: exportjson <filename> [all]"))?;
            return say(
                out,
                &self
                    .theme
                    .info("  Add 'all' or '-a' to export the entire slideshow"),
            );
        };
        let Some(deck) = self.current_deck() else {
            return say(out, &self.theme.err(NO_DECK));
        };
        let path = if file.to_lowercase().ends_with(".json") {
            file.to_string()
        } else {
            format!("{}.json", file)
        };
        let (result, what) = if all {
            (deck.export_json(&path), "entire slideshow")
        } else {
            (deck.export_current_json(&path), "current slide")
        };
        match result {
            Ok(()) => say(out, &self.theme.ok(&format!("Exported {} to: {}", what, path))),
            Err(e) => say(out, &self.theme.err(&format!("Failed to export JSON: {}", e))),
        }
    }

    fn new_deck<W: Write>(&mut self, file: Option<&str>, out: &mut W) -> io::Result<()> {
        let name = with_default_extension(file.unwrap_or(NEW_DECK), ".txt");
        if self.names.contains_key(&normalize_path(&name)) {
            return say(out, &self.theme.err(&format!("Presentation already open: {}", name)));
        }
        let mut deck = Deck::with_blank(&name, self.config.blank_slide());
        deck.add_new_slide();
        self.add_deck(deck);
        say(out, &self.theme.ok(&format!("Created new presentation: {}", name)))?;
        say(
            out,
            &self
                .theme
                .info("Use 'add' to add shapes, then 'save' to save the file."),
        )?;
        self.show(out)
    }

    fn save<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let Some(open) = self.decks.get_mut(self.current) else {
            return say(out, &self.theme.err(NO_DECK));
        };
        match open.deck.save(None) {
            Ok(()) => {
                let message = format!("Saved to: {}", open.deck.filename().display());
                say(out, &self.theme.ok(&message))
            }
            Err(e) => say(out, &self.theme.err(&format!("Failed to save file: {}", e))),
        }
    }

    fn save_as<W: Write>(&mut self, file: Option<&str>, out: &mut W) -> io::Result<()> {
        let Some(file) = file else {
            return say(out, &self.theme.info("Usage: saveas <filename>"));
        };
        let name = with_default_extension(file, ".txt");
        let key = normalize_path(&name);
        if self.names.get(&key).is_some_and(|&index| index != self.current) {
            return say(out, &self.theme.err(&format!("Presentation already open: {}", name)));
        }
        let Some(open) = self.decks.get_mut(self.current) else {
            return say(out, &self.theme.err(NO_DECK));
        };
        let old_key = deck_key(open.deck.filename());
        match open.deck.save(Some(Path::new(&name))) {
            Ok(()) => {
                self.names.remove(&old_key);
                self.names.insert(key, self.current);
                say(out, &self.theme.ok(&format!("Saved to: {}", name)))
            }
            Err(e) => say(out, &self.theme.err(&format!("Failed to save file: {}", e))),
        }
    }

    /// Undo or redo one step. The deck first moves to the slide the step
    /// belongs to, so the change lands where it was made.
    fn history_step<W: Write>(&mut self, step: Step, out: &mut W) -> io::Result<()> {
        let Some(open) = self.decks.get_mut(self.current) else {
            return say(out, &self.theme.err(NO_DECK));
        };
        let target = match step {
            Step::Undo => open.history.next_undo_slide(),
            Step::Redo => open.history.next_redo_slide(),
        };
        let Some(number) = target else {
            let message = match step {
                Step::Undo => "Nothing to undo.",
                Step::Redo => "Nothing to redo.",
            };
            return say(out, &self.theme.info(message));
        };
        if !open.deck.goto(number) {
            open.history.clear();
            let message = format!("Slide {} no longer exists. Undo history cleared.", number);
            return say(out, &self.theme.err(&message));
        }
        let snapshot = match (step, open.deck.current()) {
            (Step::Undo, Some(current)) => open.history.undo(current),
            (Step::Redo, Some(current)) => open.history.redo(current),
            (_, None) => None,
        };
        let Some(snapshot) = snapshot else {
            return Ok(());
        };
        if let Some(slide) = open.deck.current_mut() {
            *slide = snapshot.slide;
        }
        open.deck.set_modified(true);
        let verb = match step {
            Step::Undo => "Undone",
            Step::Redo => "Redone",
        };
        say(
            out,
            &self
                .theme
                .ok(&format!("{}: {}", verb, snapshot.description)),
        )?;
        self.show(out)
    }
}
