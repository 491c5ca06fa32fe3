use crate::NovaResult;
use crate::progress::{self, COMPLETE, OCR_SHARE};

pub const NO_FILE: &str = "Ingen fil valgt.";
pub const READY: &str = "Billede klar. Klik “Process”.";
pub const SELECT_FIRST: &str = "Vælg et billede først.";
pub const PREPARING: &str = "Forbereder billede…";
pub const OCR_RUNNING: &str = "OCR kører (dan+eng)…";
pub const CLASSIFYING: &str = "Spørger ChatGPT om NOVA…";
pub const DONE: &str = "Færdig ✔";
pub const FAILURE_HEADLINE: &str = "Der opstod en fejl. Se konsollen for detaljer.";

/// Everything the page shows about the current run.
///
/// Owned by the client component and overwritten by each run; nothing here
/// outlives the latest render.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBoard {
    status: String,
    progress: u8,
    headline: String,
    ocr_text: String,
    busy: bool,
    has_file: bool,
}

impl Default for StatusBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusBoard {
    pub fn new() -> Self {
        Self {
            status: NO_FILE.to_string(),
            progress: 0,
            headline: String::new(),
            ocr_text: String::new(),
            busy: false,
            has_file: false,
        }
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn headline(&self) -> &str {
        &self.headline
    }

    pub fn ocr_text(&self) -> &str {
        &self.ocr_text
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn has_file(&self) -> bool {
        self.has_file
    }

    fn clear_output(&mut self) {
        self.headline.clear();
        self.ocr_text.clear();
    }

    pub fn file_selected(&mut self, present: bool) {
        self.has_file = present;
        self.clear_output();
        self.progress = 0;
        self.status = (if present { READY } else { NO_FILE }).to_string();
    }

    /// Starts a run. Returns `false`, leaving only a hint in the status line,
    /// when there is nothing to process.
    pub fn begin(&mut self) -> bool {
        if !self.has_file {
            self.status = SELECT_FIRST.to_string();
            return false;
        }
        self.busy = true;
        self.clear_output();
        self.progress = 0;
        self.status = PREPARING.to_string();
        true
    }

    pub fn ocr_started(&mut self) {
        self.status = OCR_RUNNING.to_string();
    }

    pub fn ocr_progress(&mut self, label: &str, fraction: f64) {
        self.status = format!("OCR: {} {}%", label, progress::percent(fraction));
        self.progress = progress::overall_during_ocr(fraction);
    }

    pub fn ocr_finished(&mut self, text: &str) {
        self.ocr_text = text.to_string();
        self.progress = OCR_SHARE;
    }

    pub fn classifying(&mut self) {
        self.status = CLASSIFYING.to_string();
        self.progress = self.progress.max(OCR_SHARE);
    }

    pub fn finish(&mut self, result: &NovaResult) {
        self.headline = result.headline();
        self.status = DONE.to_string();
        self.progress = COMPLETE;
    }

    pub fn fail(&mut self, detail: &str) {
        self.status = format!("Fejl: {}", detail);
        self.headline = FAILURE_HEADLINE.to_string();
    }

    /// Always called last, whatever the outcome.
    pub fn end(&mut self) {
        self.busy = false;
    }
}
