//! Step-by-step prompts for adding and editing shapes, plus the one-line
//! `add` form.
//!
//! Wizards read from the same input as the command loop. End of input at
//! any prompt cancels quietly.

use std::io::{self, BufRead, Write};

use crate::color::Color;
use crate::shape::factory::{self, ShapeParams};
use crate::shape::{Shape, ShapeKind, DEFAULT_FONT_SIZE};
use crate::theme::Theme;

use super::command::parse_number;

/// Size used when the user skips the size prompt.
pub const DEFAULT_SIZE: (i32, i32) = (40, 30);

const INLINE_USAGE: &str = "Usage: add <shape> <x> <y> [width [height]] [color]";

/// Read one line without its terminator. `None` at end of input.
pub fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Question-and-answer access to the editor's input and output.
pub struct Prompter<'a, R, W> {
    pub input: &'a mut R,
    pub output: &'a mut W,
    pub theme: &'a Theme,
}

impl<R: BufRead, W: Write> Prompter<'_, R, W> {
    fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", self.theme.primary_text(question))?;
        self.output.flush()?;
        read_line(self.input)
    }

    fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }

    /// Ask for a shape kind, position, size and color. `None` when the user
    /// cancels or enters something unusable; the reason is already printed.
    pub fn add_shape(&mut self) -> io::Result<Option<Shape>> {
        let kinds = factory::available();
        let header = self.theme.accent_text("═══ Add New Shape ═══");
        self.say("")?;
        self.say(&header)?;
        for (index, name) in kinds.iter().enumerate() {
            let icon = ShapeKind::from_name(name).map(|k| k.icon()).unwrap_or("?");
            let line = format!(
                "{}. {} {}",
                self.theme.highlight_text(&format!("{:>2}", index + 1)),
                self.theme.paint(factory::default_color(name), icon),
                name
            );
            self.say(&line)?;
        }
        let cancel = format!("{:>2}. Cancel", kinds.len() + 1);
        self.say(&cancel)?;

        let Some(answer) = self.ask("Enter shape number: ")? else {
            return Ok(None);
        };
        let choice = match parse_number(&answer) {
            Some(n) if n == 0 || n == kinds.len() + 1 => {
                let message = self.theme.info("Cancelled.");
                self.say(&message)?;
                return Ok(None);
            }
            Some(n) if n <= kinds.len() => kinds[n - 1],
            _ => {
                let message = self.theme.err("Invalid selection.");
                self.say(&message)?;
                return Ok(None);
            }
        };

        let Some((x, y)) = self.ask_pair("Enter position (x y): ", PairKind::Position)? else {
            return Ok(None);
        };

        let mut text = String::new();
        let (width, height) = if choice == "Text" {
            let Some(content) = self.ask("Enter text: ")? else {
                return Ok(None);
            };
            if content.trim().is_empty() {
                let message = self.theme.err("Text cannot be empty.");
                self.say(&message)?;
                return Ok(None);
            }
            text = content.trim().to_string();
            let Some(answer) = self.ask("Enter font size or press Enter for default: ")? else {
                return Ok(None);
            };
            if answer.trim().is_empty() {
                (0, DEFAULT_FONT_SIZE)
            } else {
                match answer.trim().parse::<i32>() {
                    Ok(size) if size > 0 => (0, size),
                    _ => {
                        let message = self.theme.err("Invalid font size.");
                        self.say(&message)?;
                        return Ok(None);
                    }
                }
            }
        } else {
            let Some(answer) = self.ask("Enter size (width height) or press Enter for default: ")?
            else {
                return Ok(None);
            };
            if answer.trim().is_empty() {
                DEFAULT_SIZE
            } else {
                match parse_size(&answer) {
                    Some(size) => size,
                    None => {
                        let message = self.theme.err("Invalid size.");
                        self.say(&message)?;
                        return Ok(None);
                    }
                }
            }
        };

        let Some(color) = self.pick_color(factory::default_color(choice))? else {
            return Ok(None);
        };
        Ok(build(choice, x, y, width, height, color, &text))
    }

    /// Numbered color picker. Enter keeps `default`; names and `#rrggbb`
    /// are accepted too.
    fn pick_color(&mut self, default: Color) -> io::Result<Option<Color>> {
        let names = Color::available();
        let header = self.theme.accent_text("═══ Choose Color ═══");
        self.say(&header)?;
        for (index, name) in names.iter().enumerate() {
            let line = format!(
                "{}. {} {}",
                self.theme.highlight_text(&format!("{:>2}", index + 1)),
                self.theme.paint(Color::from_name(name), "████"),
                name
            );
            self.say(&line)?;
        }
        let default_line = format!("{:>2}. Default ({})", names.len() + 1, default.name());
        self.say(&default_line)?;

        let Some(answer) = self.ask("Enter color number or name: ")? else {
            return Ok(None);
        };
        let answer = answer.trim();
        if answer.is_empty() {
            return Ok(Some(default));
        }
        if let Some(n) = parse_number(answer) {
            return match n {
                n if (1..=names.len()).contains(&n) => Ok(Some(Color::from_name(&names[n - 1]))),
                n if n == names.len() + 1 => Ok(Some(default)),
                _ => {
                    let message = self.theme.warn("Invalid color number, using default.");
                    self.say(&message)?;
                    Ok(Some(default))
                }
            };
        }
        match Color::parse(answer) {
            Some(color) => Ok(Some(color)),
            None => {
                let message = self
                    .theme
                    .warn(&format!("Unknown color '{}', using default.", answer));
                self.say(&message)?;
                Ok(Some(default))
            }
        }
    }

    /// Offer position, size or color changes for `shape`. Returns the edited
    /// copy, or `None` when nothing changed.
    pub fn edit_shape(&mut self, number: usize, shape: &Shape) -> io::Result<Option<Shape>> {
        let header = self
            .theme
            .accent_text(&format!("═══ Edit Shape {} ═══", number));
        self.say("")?;
        self.say(&header)?;
        let current = format!("  {}", shape.describe());
        self.say(&current)?;
        for option in [
            "1. Change position",
            "2. Change size",
            "3. Change color",
            "4. Cancel",
        ] {
            self.say(option)?;
        }

        let Some(answer) = self.ask("Enter choice: ")? else {
            return Ok(None);
        };
        let mut edited = shape.clone();
        match parse_number(&answer) {
            Some(1) => {
                let Some((x, y)) = self.ask_pair("New position (x y): ", PairKind::Position)?
                else {
                    return Ok(None);
                };
                edited.set_position(x, y);
                let message = self.theme.ok("Position updated.");
                self.say(&message)?;
            }
            Some(2) => {
                let Some((w, h)) = self.ask_pair("New size (width height): ", PairKind::Size)?
                else {
                    return Ok(None);
                };
                edited.set_size(w, h);
                let message = self.theme.ok("Size updated.");
                self.say(&message)?;
            }
            Some(3) => {
                let Some(answer) = self.ask("New color name: ")? else {
                    return Ok(None);
                };
                let Some(color) = Color::parse(&answer) else {
                    let message = self
                        .theme
                        .err(&format!("Unknown color '{}'.", answer.trim()));
                    self.say(&message)?;
                    return Ok(None);
                };
                edited.set_fill(color);
                let message = self
                    .theme
                    .ok(&format!("Color updated to {}", color.name()));
                self.say(&message)?;
            }
            Some(4) => {
                let message = self.theme.info("Cancelled.");
                self.say(&message)?;
                return Ok(None);
            }
            _ => {
                let message = self.theme.err("Invalid selection.");
                self.say(&message)?;
                return Ok(None);
            }
        }
        Ok(Some(edited))
    }

    fn ask_pair(&mut self, question: &str, kind: PairKind) -> io::Result<Option<(i32, i32)>> {
        let Some(answer) = self.ask(question)? else {
            return Ok(None);
        };
        let parsed = match kind {
            PairKind::Position => parse_position(&answer),
            PairKind::Size => parse_size(&answer).ok_or("Invalid size."),
        };
        match parsed {
            Ok(pair) => Ok(Some(pair)),
            Err(reason) => {
                let message = self.theme.err(reason);
                self.say(&message)?;
                Ok(None)
            }
        }
    }
}

#[derive(Clone, Copy)]
enum PairKind {
    Position,
    Size,
}

fn parse_position(answer: &str) -> Result<(i32, i32), &'static str> {
    let tokens: Vec<&str> = answer.split_whitespace().collect();
    if tokens.len() < 2 {
        return Err("Please enter x and y coordinates.");
    }
    match (tokens[0].parse(), tokens[1].parse()) {
        (Ok(x), Ok(y)) => Ok((x, y)),
        _ => Err("Invalid coordinates."),
    }
}

/// `w h`, or a single `n` meaning `n n`. Both must be positive.
fn parse_size(answer: &str) -> Option<(i32, i32)> {
    let tokens: Vec<i32> = answer
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<_, _>>()
        .ok()?;
    let (w, h) = match tokens.as_slice() {
        [n] => (*n, *n),
        [w, h, ..] => (*w, *h),
        [] => return None,
    };
    (w > 0 && h > 0).then_some((w, h))
}

/// Construct a catalog shape. Lines run from `(x, y)` to
/// `(x + width, y + height)`; text uses `height` as font size.
fn build(
    name: &str,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    color: Color,
    text: &str,
) -> Option<Shape> {
    let params = ShapeParams {
        x,
        y,
        width,
        height,
        fill: color,
        text: text.to_string(),
        font_size: height,
        x2: x.saturating_add(width),
        y2: y.saturating_add(height),
        ..ShapeParams::default()
    };
    factory::create(name, &params)
}

/// Build a shape from `add <shape> <x> <y> [width [height]] [color]`.
///
/// Text takes `add text <x> <y> [size] <words...>` and always uses its
/// default color. The error string is ready to show to the user.
pub fn parse_inline_add(args: &[String]) -> Result<Shape, String> {
    let [kind, x, y, rest @ ..] = args else {
        return Err(INLINE_USAGE.to_string());
    };
    let name = factory::canonical_name(kind)
        .ok_or_else(|| format!("Unknown shape '{}'. Type shapes for the list.", kind))?;
    let (Ok(x), Ok(y)) = (x.parse::<i32>(), y.parse::<i32>()) else {
        return Err("Invalid coordinates.".to_string());
    };

    let numbers: Vec<i32> = rest.iter().map_while(|t| t.parse().ok()).collect();
    let words = &rest[numbers.len()..];

    if name == "Text" {
        let size = match numbers.as_slice() {
            [] => DEFAULT_FONT_SIZE,
            [size] if *size > 0 => *size,
            _ => return Err("Usage: add text <x> <y> [size] <text>".to_string()),
        };
        if words.is_empty() {
            return Err("Text cannot be empty.".to_string());
        }
        let content = words.join(" ");
        return build(name, x, y, 0, size, factory::default_color(name), &content)
            .ok_or_else(|| INLINE_USAGE.to_string());
    }

    let (width, height) = match numbers.as_slice() {
        [] => DEFAULT_SIZE,
        [n] => (*n, *n),
        [w, h] => (*w, *h),
        _ => return Err(INLINE_USAGE.to_string()),
    };
    if width <= 0 || height <= 0 {
        return Err("Size must be positive.".to_string());
    }
    let color = if words.is_empty() {
        factory::default_color(name)
    } else {
        let requested = words.join(" ");
        Color::parse(&requested).ok_or_else(|| format!("Unknown color '{}'.", requested))?
    };
    build(name, x, y, width, height, color, "").ok_or_else(|| INLINE_USAGE.to_string())
}
