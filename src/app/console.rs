// console.rs
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

const PROGRESS_TEMPLATE: &str = "{msg}: {bar:40.cyan/blue} {pos}/{len} [{elapsed_precise}]";

/// Operator-facing input and output.
pub trait Console {
    /// Shows `message` without a newline and reads one line of input.
    /// End of input yields an empty string.
    fn prompt(&mut self, message: &str) -> io::Result<String>;

    fn say(&mut self, line: &str);

    fn progress(&self, len: usize, message: &str) -> ProgressBar;
}

pub struct StdioConsole {
    show_progress: bool,
}

impl StdioConsole {
    pub fn new(show_progress: bool) -> Self {
        Self { show_progress }
    }
}

impl Console for StdioConsole {
    fn prompt(&mut self, message: &str) -> io::Result<String> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(message.as_bytes())?;
        stdout.flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line)
    }

    fn say(&mut self, line: &str) {
        println!("{}", line);
    }

    fn progress(&self, len: usize, message: &str) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }
        let style = ProgressStyle::with_template(PROGRESS_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-");
        let bar = ProgressBar::new(len as u64);
        bar.set_style(style);
        bar.set_message(message.to_string());
        bar
    }
}

/// Replays queued answers and records everything shown. Running out of
/// answers behaves like end of input.
#[derive(Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    pub fn printed(&self, line: &str) -> bool {
        self.transcript.iter().any(|l| l == line)
    }
}

impl Console for ScriptedConsole {
    fn prompt(&mut self, message: &str) -> io::Result<String> {
        self.transcript.push(message.to_string());
        Ok(self.answers.pop_front().unwrap_or_default())
    }

    fn say(&mut self, line: &str) {
        self.transcript.push(line.to_string());
    }

    fn progress(&self, _len: usize, _message: &str) -> ProgressBar {
        ProgressBar::hidden()
    }
}
