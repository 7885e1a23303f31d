use std::sync::{Mutex, PoisonError};

use super::printer::{Printer, CLEAR_SCREEN};

/// Keeps everything printed in memory.
#[derive(Debug, Default)]
pub struct Logger {
    output: Mutex<String>,
}

impl Logger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self) -> String {
        self.output.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn append(&self, output: &str) {
        self.output.lock().unwrap_or_else(PoisonError::into_inner).push_str(output);
    }
}

impl Printer for Logger {
    fn clear(&self) {
        self.print(CLEAR_SCREEN);
    }

    fn print(&self, output: &str) {
        self.append(output);
    }

    fn eprint(&self, output: &str) {
        self.append(output);
    }

    fn println(&self, output: &str) {
        self.print(&format!("{output}\n"));
    }

    fn eprintln(&self, output: &str) {
        self.eprint(&format!("{output}\n"));
    }
}
