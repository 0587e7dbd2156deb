//! Parsing one line of editor input into a [`Command`].
//!
//! Command words and aliases are case-insensitive. Arguments are kept as
//! raw strings so each handler can report its own format errors.

/// One parsed editor command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Next,
    Prev,
    Show,
    Goto { number: String },
    /// Jump into another open deck. `file` is already normalized.
    GotoFile { file: String, number: String },
    NextFile,
    PrevFile,
    /// Empty `args` starts the wizard.
    Add { args: Vec<String> },
    Delete { index: Option<String> },
    Edit { index: Option<String> },
    List,
    Clear,
    NewSlide,
    DelSlide { number: Option<String> },
    /// Empty text removes the title.
    Title { text: String },
    Background { color: Option<String> },
    Visual,
    Text,
    Export { file: Option<String> },
    ExportAll { prefix: Option<String> },
    ExportJson { file: Option<String>, all: bool },
    New { file: Option<String> },
    Save,
    SaveAs { file: Option<String> },
    Undo,
    Redo,
    History,
    Shapes,
    Colors,
    Help,
    Exit,
    /// Blank input.
    Empty,
    /// A known command with the wrong number of arguments.
    Usage(&'static str),
    Unknown(String),
}

impl Command {
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        let tokens: Vec<&str> = input.split_whitespace().collect();
        let Some(first) = tokens.first() else {
            return Command::Empty;
        };
        let arg = |i: usize| tokens.get(i).map(|s| s.to_string());
        let rest = || {
            input
                .split_once(char::is_whitespace)
                .map(|(_, rest)| rest.trim().to_string())
                .unwrap_or_default()
        };

        match first.to_lowercase().as_str() {
            "next" | "n" => Command::Next,
            "prev" | "p" => Command::Prev,
            "show" | "s" => Command::Show,
            "goto" | "g" => match tokens.len() {
                2 => Command::Goto {
                    number: tokens[1].to_string(),
                },
                3 => Command::GotoFile {
                    file: normalize_path(tokens[1]),
                    number: tokens[2].to_string(),
                },
                _ => Command::Usage("goto <n> | goto <file> <n>"),
            },
            "nextfile" | "nf" => Command::NextFile,
            "prevfile" | "pf" => Command::PrevFile,
            "add" | "a" => Command::Add {
                args: tokens[1..].iter().map(|s| s.to_string()).collect(),
            },
            "delete" | "del" => Command::Delete { index: arg(1) },
            "edit" | "e" => Command::Edit { index: arg(1) },
            "list" | "ls" => Command::List,
            "clear" => Command::Clear,
            "newslide" | "ns" => Command::NewSlide,
            "delslide" | "ds" => Command::DelSlide { number: arg(1) },
            "title" => Command::Title { text: rest() },
            "background" | "bg" => {
                let color = rest();
                Command::Background {
                    color: (!color.is_empty()).then_some(color),
                }
            }
            "visual" | "v" => Command::Visual,
            "text" | "t" => Command::Text,
            "export" => Command::Export { file: arg(1) },
            "exportall" => Command::ExportAll { prefix: arg(1) },
            "exportjson" => Command::ExportJson {
                file: arg(1),
                all: matches!(tokens.get(2).map(|s| s.to_lowercase()).as_deref(), Some("all" | "-a")),
            },
            "new" => Command::New { file: arg(1) },
            "save" => Command::Save,
            "saveas" => Command::SaveAs { file: arg(1) },
            "undo" | "u" | "z" => Command::Undo,
            "redo" | "r" | "y" => Command::Redo,
            "history" => Command::History,
            "shapes" => Command::Shapes,
            "colors" => Command::Colors,
            "help" | "h" => Command::Help,
            "exit" | "quit" | "q" => Command::Exit,
            _ => Command::Unknown(first.to_string()),
        }
    }
}

/// Key used to find an open deck by file name: lowercase, forward slashes,
/// no leading `./`.
pub fn normalize_path(path: &str) -> String {
    let normalized = path.to_lowercase().replace('\\', "/");
    match normalized.strip_prefix("./") {
        Some(stripped) => stripped.to_string(),
        None => normalized,
    }
}

/// Parse a 1-based number typed by the user.
pub fn parse_number(text: &str) -> Option<usize> {
    text.trim().parse().ok()
}
