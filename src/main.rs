// Thermoplay: terminal playback of temperature-control telemetry

use anyhow::Context;
use clap::Parser;
use std::io;
use std::path::PathBuf;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use thermoplay::dataset::Timeline;
use thermoplay::playback;
use thermoplay::sim;
use thermoplay::ui::App;

#[derive(Parser)]
#[command(author, version, about = "Animated playback of temperature-control telemetry")]
struct Args {
    /// Telemetry CSV to play back
    #[arg(default_value = "temperature_data.csv")]
    data: PathBuf,

    /// Generate the telemetry file and exit instead of playing
    #[arg(long, default_value_t = false)]
    generate: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.generate {
        let written = sim::generate_csv(&args.data)
            .with_context(|| format!("failed to write {}", args.data.display()))?;
        println!("Wrote {} records to {}", written, args.data.display());
        return Ok(());
    }

    let timeline = Timeline::from_csv_path(&args.data).with_context(|| {
        format!(
            "failed to load telemetry from {} (run with --generate to create it)",
            args.data.display()
        )
    })?;

    log::info!(
        "playing {} records over {} frames",
        timeline.len(),
        playback::frame_count()
    );

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(timeline);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}
