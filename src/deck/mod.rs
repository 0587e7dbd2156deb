//! Decks: ordered slides with a cursor, a backing file and a dirty flag.
//!
//! A deck is what the editor opens, navigates, saves and exports. Slide
//! numbers in this API are 1-based, as users see them.

mod format;

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::canvas::ExportError;
use crate::slide::{Slide, SlideRecord};

pub use format::{parse_line, LoadWarning};

/// Errors raised while loading, saving or exporting a deck.
#[derive(Debug, thiserror::Error)]
pub enum DeckError {
    #[error("Failed to open deck {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to save deck {path}: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Deck has no slides")]
    NoSlides,

    #[error("Slide {number} does not exist (deck has {total})")]
    NoSuchSlide { number: usize, total: usize },

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Outcome of writing one file during a bulk export.
#[derive(Debug)]
pub struct ExportOutcome {
    pub path: PathBuf,
    pub result: Result<(), ExportError>,
}

#[derive(Serialize)]
struct DeckRecord<'a> {
    filename: String,
    slides: &'a [SlideRecord],
}

#[derive(Serialize)]
struct DeckDocument<'a> {
    slideshow: DeckRecord<'a>,
}

#[derive(Debug, Clone)]
pub struct Deck {
    slides: Vec<Slide>,
    current: usize,
    filename: PathBuf,
    modified: bool,
    blank: Slide,
}

impl Deck {
    /// Empty deck backed by `filename`. New slides use the default slide size.
    pub fn new(filename: impl Into<PathBuf>) -> Self {
        Self::with_blank(filename, Slide::new())
    }

    /// Empty deck whose new slides are copies of `blank`.
    pub fn with_blank(filename: impl Into<PathBuf>, blank: Slide) -> Self {
        Self {
            slides: Vec::new(),
            current: 0,
            filename: filename.into(),
            modified: false,
            blank,
        }
    }

    /// Load a deck file. Malformed lines are skipped and reported as warnings.
    pub fn load<P: AsRef<Path>>(
        path: P,
        blank: Slide,
    ) -> Result<(Self, Vec<LoadWarning>), DeckError> {
        let path = path.as_ref();
        let file = fs::File::open(path).map_err(|source| DeckError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let (slides, warnings) = format::parse_reader(std::io::BufReader::new(file), &blank)?;
        for warning in &warnings {
            tracing::debug!(deck = %path.display(), "skipped: {}", warning);
        }
        tracing::info!(deck = %path.display(), slides = slides.len(), "loaded deck");
        let mut deck = Self::with_blank(path, blank);
        deck.slides = slides;
        Ok((deck, warnings))
    }

    /// Parse deck text that did not come from a file.
    pub fn parse_str(
        filename: impl Into<PathBuf>,
        content: &str,
        blank: Slide,
    ) -> Result<(Self, Vec<LoadWarning>), DeckError> {
        let (slides, warnings) = format::parse_reader(content.as_bytes(), &blank)?;
        let mut deck = Self::with_blank(filename, blank);
        deck.slides = slides;
        Ok((deck, warnings))
    }

    /// Append a slide without marking the deck modified.
    pub fn add_slide(&mut self, slide: Slide) {
        self.slides.push(slide);
    }

    /// Append a blank slide and return its number.
    pub fn add_new_slide(&mut self) -> usize {
        self.slides.push(self.blank.clone());
        self.modified = true;
        self.slides.len()
    }

    /// Remove slide `number`. The cursor stays on the last slide when the
    /// removed one was at or past the end.
    pub fn remove_slide(&mut self, number: usize) -> bool {
        if number == 0 || number > self.slides.len() {
            return false;
        }
        self.slides.remove(number - 1);
        self.modified = true;
        if self.current >= self.slides.len() {
            self.current = self.slides.len().saturating_sub(1);
        }
        true
    }

    pub fn next(&mut self) -> bool {
        if self.current + 1 < self.slides.len() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    pub fn prev(&mut self) -> bool {
        if self.current > 0 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Move the cursor to slide `number`. Out-of-range numbers leave it alone.
    pub fn goto(&mut self, number: usize) -> bool {
        if number == 0 || number > self.slides.len() {
            return false;
        }
        self.current = number - 1;
        true
    }

    pub fn current(&self) -> Option<&Slide> {
        self.slides.get(self.current)
    }

    pub fn current_mut(&mut self) -> Option<&mut Slide> {
        self.slides.get_mut(self.current)
    }

    /// 1-based number of the current slide, 0 for an empty deck.
    pub fn current_number(&self) -> usize {
        if self.slides.is_empty() {
            0
        } else {
            self.current + 1
        }
    }

    /// Slide by 1-based number.
    pub fn slide(&self, number: usize) -> Option<&Slide> {
        number.checked_sub(1).and_then(|index| self.slides.get(index))
    }

    /// Like [`Deck::slide`], but an error names the valid range.
    pub fn require_slide(&self, number: usize) -> Result<&Slide, DeckError> {
        if self.slides.is_empty() {
            return Err(DeckError::NoSlides);
        }
        self.slide(number).ok_or(DeckError::NoSuchSlide {
            number,
            total: self.slides.len(),
        })
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn filename(&self) -> &Path {
        &self.filename
    }

    pub fn set_filename(&mut self, filename: impl Into<PathBuf>) {
        self.filename = filename.into();
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn set_modified(&mut self, modified: bool) {
        self.modified = modified;
    }

    fn current_or_err(&self) -> Result<&Slide, DeckError> {
        self.current().ok_or(DeckError::NoSlides)
    }

    pub fn export_current_bmp<P: AsRef<Path>>(&self, path: P) -> Result<(), DeckError> {
        Ok(self.current_or_err()?.export_bmp(path)?)
    }

    pub fn export_current_svg<P: AsRef<Path>>(&self, path: P) -> Result<(), DeckError> {
        Ok(self.current_or_err()?.export_svg(path)?)
    }

    pub fn export_current_json<P: AsRef<Path>>(&self, path: P) -> Result<(), DeckError> {
        Ok(self.current_or_err()?.export_json(path)?)
    }

    /// Write `prefix_N.bmp` and `prefix_N.svg` for every slide.
    ///
    /// A failed file does not stop the rest; every outcome is returned in
    /// slide order, BMP before SVG.
    pub fn export_all(&self, prefix: &str) -> Vec<ExportOutcome> {
        let mut outcomes = Vec::with_capacity(self.slides.len() * 2);
        for (index, slide) in self.slides.iter().enumerate() {
            let bmp = PathBuf::from(format!("{}_{}.bmp", prefix, index + 1));
            let result = slide.export_bmp(&bmp);
            outcomes.push(ExportOutcome { path: bmp, result });
            let svg = PathBuf::from(format!("{}_{}.svg", prefix, index + 1));
            let result = slide.export_svg(&svg);
            outcomes.push(ExportOutcome { path: svg, result });
        }
        outcomes
    }

    /// Pretty JSON of the whole deck, wrapped in a `"slideshow"` object.
    pub fn to_json(&self) -> Result<String, ExportError> {
        let records: Vec<SlideRecord> = self.slides.iter().map(Slide::to_record).collect();
        let document = DeckDocument {
            slideshow: DeckRecord {
                filename: self.filename.display().to_string(),
                slides: &records,
            },
        };
        serde_json::to_string_pretty(&document).map_err(|source| ExportError::Serialize {
            what: "deck",
            source,
        })
    }

    pub fn export_json<P: AsRef<Path>>(&self, path: P) -> Result<(), DeckError> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?).map_err(|e| ExportError::io(path, e))?;
        Ok(())
    }

    /// Deck in its text file form.
    pub fn to_file_format(&self) -> String {
        format::write_slides(&self.slides)
    }

    /// Write the deck to `path`, or to its own filename when `None`.
    ///
    /// Saving to a new path makes it the deck's filename. Both cases clear
    /// the modified flag.
    pub fn save(&mut self, path: Option<&Path>) -> Result<(), DeckError> {
        let target = path.unwrap_or(&self.filename).to_path_buf();
        fs::write(&target, self.to_file_format()).map_err(|source| DeckError::Save {
            path: target.clone(),
            source,
        })?;
        tracing::info!(deck = %target.display(), slides = self.slides.len(), "saved deck");
        self.filename = target;
        self.modified = false;
        Ok(())
    }
}
