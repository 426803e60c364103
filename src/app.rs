// app.rs
pub mod console;
pub mod file_selection;
pub mod frames;
pub mod image_processing;
pub mod settings;

use crate::error::ConvertResult;
use console::Console;
use settings::ConverterSettings;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Where the menu loop currently is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuState {
    AwaitingDirectory,
    AwaitingOption(PathBuf),
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConversionMode {
    GifsToFrames,
    ImagesToGifs,
}

impl ConversionMode {
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::GifsToFrames),
            "2" => Some(Self::ImagesToGifs),
            _ => None,
        }
    }
}

/// Succeeded/failed tally of one batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn record<T>(&mut self, result: &ConvertResult<T>) {
        match result {
            Ok(_) => self.succeeded += 1,
            Err(_) => self.failed += 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BatchReport {
    /// Nothing to convert; no tally was kept.
    NothingFound,
    Completed(BatchSummary),
}

pub struct App<C: Console> {
    pub console: C,
    pub settings: ConverterSettings,
    state: MenuState,
    reports: Vec<BatchReport>,
}

impl<C: Console> App<C> {
    pub fn new(console: C, settings: ConverterSettings) -> Self {
        Self {
            console,
            settings,
            state: MenuState::AwaitingDirectory,
            reports: Vec::new(),
        }
    }

    pub fn state(&self) -> &MenuState {
        &self.state
    }

    /// Reports of every batch run so far, in order.
    pub fn reports(&self) -> &[BatchReport] {
        &self.reports
    }

    /// Runs the menu until the operator enters an empty folder path.
    pub fn run(&mut self) {
        info!("Menu loop started");
        while self.state != MenuState::Finished {
            self.step();
        }
        info!("Menu loop finished after {} batches", self.reports.len());
    }

    /// Advances the menu by one transition.
    pub fn step(&mut self) {
        let state = std::mem::replace(&mut self.state, MenuState::Finished);
        self.state = match state {
            MenuState::AwaitingDirectory => self.await_directory(),
            MenuState::AwaitingOption(folder) => {
                self.process_directory(&folder);
                MenuState::AwaitingDirectory
            }
            MenuState::Finished => MenuState::Finished,
        };
    }

    fn read(&mut self, message: &str) -> String {
        match self.console.prompt(message) {
            Ok(line) => line.trim().to_string(),
            Err(e) => {
                warn!("Failed to read input: {}", e);
                String::new()
            }
        }
    }

    fn await_directory(&mut self) -> MenuState {
        self.console.say("");
        let folder = self.read("Enter folder path (or press Enter to quit): ");
        if folder.is_empty() {
            return MenuState::Finished;
        }
        let path = PathBuf::from(&folder);
        if !path.is_dir() {
            debug!("Rejected directory {:?}", folder);
            self.console.say("Invalid directory. Please try again.");
            return MenuState::AwaitingDirectory;
        }
        MenuState::AwaitingOption(path)
    }

    /// Shows the menu for `folder` and runs the chosen conversion. An invalid
    /// choice drops the folder; the operator has to enter it again.
    pub fn process_directory(&mut self, folder: &Path) {
        self.console.say("");
        self.console.say(&format!("Processing directory: {}", folder.display()));
        self.console.say("Choose an option:");
        self.console.say("1. Convert GIFs in the folder to image frames.");
        self.console.say("2. Convert folders of images in the folder to GIFs.");

        let output_dir = file_selection::output_directory(folder, &self.settings.output_dir_name);
        if let Err(e) = fs::create_dir_all(&output_dir) {
            warn!("Failed to create {}: {}", output_dir.display(), e);
            self.console.say(&format!(
                "Cannot create output directory {}: {}",
                output_dir.display(),
                e
            ));
            return;
        }
        debug!("Output directory: {}", output_dir.display());

        let choice = self.read("Enter 1 or 2: ");
        let report = match ConversionMode::from_choice(&choice) {
            Some(ConversionMode::GifsToFrames) => image_processing::convert_gifs_to_frames(
                &mut self.console,
                &self.settings,
                folder,
                &output_dir,
            ),
            Some(ConversionMode::ImagesToGifs) => image_processing::convert_images_to_gif(
                &mut self.console,
                &self.settings,
                folder,
                &output_dir,
            ),
            None => {
                self.console.say("Invalid option. Returning to main menu.");
                return;
            }
        };
        info!("Batch for {} finished: {:?}", folder.display(), report);
        self.reports.push(report);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::console::ScriptedConsole;
    use tempfile::TempDir;

    fn app(answers: &[&str]) -> App<ScriptedConsole> {
        App::new(
            ScriptedConsole::new(answers.iter().copied()),
            ConverterSettings::default(),
        )
    }

    #[test]
    fn menu_choices() {
        assert_eq!(ConversionMode::from_choice("1"), Some(ConversionMode::GifsToFrames));
        assert_eq!(ConversionMode::from_choice(" 2 "), Some(ConversionMode::ImagesToGifs));
        assert_eq!(ConversionMode::from_choice("3"), None);
        assert_eq!(ConversionMode::from_choice(""), None);
    }

    #[test]
    fn empty_path_quits() {
        let mut app = app(&["   "]);
        app.run();
        assert_eq!(app.state(), &MenuState::Finished);
        assert!(app.reports().is_empty());
    }

    #[test]
    fn end_of_input_quits() {
        let mut app = app(&[]);
        app.run();
        assert_eq!(app.state(), &MenuState::Finished);
    }

    #[test]
    fn invalid_directory_reprompts() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("missing");
        let mut app = app(&[missing.to_str().unwrap()]);

        app.step();
        assert_eq!(app.state(), &MenuState::AwaitingDirectory);
        assert!(app.console.printed("Invalid directory. Please try again."));
    }

    #[test]
    fn invalid_option_discards_directory() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("input");
        fs::create_dir(&input).unwrap();
        let mut app = app(&[input.to_str().unwrap(), "9"]);

        app.step();
        assert_eq!(app.state(), &MenuState::AwaitingOption(input.clone()));
        app.step();
        assert_eq!(app.state(), &MenuState::AwaitingDirectory);
        assert!(app.console.printed("Invalid option. Returning to main menu."));
        // The output folder exists even though nothing ran.
        assert!(tmp.path().join("output").is_dir());
        assert!(app.reports().is_empty());
    }

    #[test]
    fn summary_counts_results() {
        let mut summary = BatchSummary::default();
        summary.record::<()>(&Ok(()));
        summary.record::<()>(&Err(crate::error::ConvertError::NoImages {
            folder: "dog".into(),
        }));
        summary.record::<()>(&Ok(()));
        assert_eq!(summary, BatchSummary { succeeded: 2, failed: 1 });
    }
}
