// main.rs
use clap::Parser;
use gif_frame_coder::utils::init_logging;
use gif_frame_coder::{App, ConverterSettings, StdioConsole};

/// Extract GIF frames to PNGs, or assemble image folders into GIFs.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print debug diagnostics (timings, memory) to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Do not draw progress bars
    #[arg(long)]
    no_progress: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    tracing::debug!("CLI arguments: {:?}", cli);

    let settings = ConverterSettings {
        show_progress: !cli.no_progress,
        ..Default::default()
    };
    let console = StdioConsole::new(settings.show_progress);
    App::new(console, settings).run();
    Ok(())
}
