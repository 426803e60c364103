//! Converts animated GIFs into numbered PNG frames and folders of still
//! images back into looping GIFs, driven by an interactive console menu.

pub mod app;
pub mod error;
pub mod utils;

pub use app::console::{Console, ScriptedConsole, StdioConsole};
pub use app::settings::ConverterSettings;
pub use app::{App, BatchReport, BatchSummary, ConversionMode, MenuState};
pub use error::{ConvertError, ConvertResult};
