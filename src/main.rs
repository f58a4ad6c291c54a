use std::io::{self, Write};
use std::time::Duration;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use ansiline::consts::{BOLD, FG_GREEN, Mode, mode_by_name};
use ansiline::{Spinner, SpinnerOptions, Style, Terminal, esc};

#[derive(Parser)]
#[command(name = "ansiline", version, about = "ANSI escapes and a terminal spinner.")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log filter, in `tracing` env-filter syntax
    #[arg(long, global = true, env = "ANSILINE_LOG", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Command {
    /// Print the escape sequence for the given modes, with ESC made visible
    Esc {
        /// Mode codes or names (e.g. `1`, `bold`, `fg-red`)
        #[arg(value_parser = parse_mode)]
        modes: Vec<Mode>,
    },
    /// Print text in the given style
    Paint {
        /// Mode codes or names, repeatable or comma-separated
        #[arg(short, long = "mode", value_parser = parse_mode, value_delimiter = ',')]
        modes: Vec<Mode>,

        /// Text to paint
        text: String,
    },
    /// Run a spinner that counts through a few steps
    Spin {
        /// Animation frames, comma-separated
        #[arg(long, env = "ANSILINE_FRAMES", value_delimiter = ',')]
        frames: Vec<String>,

        /// Redraw interval in milliseconds
        #[arg(long, env = "ANSILINE_INTERVAL_MS", default_value_t = 650)]
        interval_ms: u64,

        /// Label shown next to the spinner
        #[arg(short, long, default_value = "working")]
        label: String,

        /// Number of label updates before stopping
        #[arg(short, long, default_value_t = 5)]
        steps: u32,

        /// Erase the spinner line when done
        #[arg(long, default_value_t = false)]
        clear: bool,

        /// Draw on stderr instead of stdout (logs then go to stdout)
        #[arg(long, default_value_t = false)]
        stderr: bool,
    },
    /// Clear part of the screen or current line
    Clear {
        #[arg(value_enum)]
        region: Region,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Region {
    Screen,
    ScreenAfter,
    ScreenBefore,
    Line,
    LineAfter,
    LineBefore,
}

fn parse_mode(s: &str) -> anyhow::Result<Mode> {
    if let Ok(code) = s.trim().parse::<Mode>() {
        return Ok(code);
    }
    mode_by_name(s).with_context(|| format!("unknown mode `{s}`"))
}

fn init_logging(filter: &str, to_stdout: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(filter).context("invalid --log-level")?;
    let writer = if to_stdout {
        BoxMakeWriter::new(io::stdout)
    } else {
        BoxMakeWriter::new(io::stderr)
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .without_time()
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let spinner_on_stderr = matches!(cli.command, Command::Spin { stderr: true, .. });
    init_logging(&cli.log_level, spinner_on_stderr)?;

    match cli.command {
        Command::Esc { modes } => {
            println!("{}", esc(&modes).replace('\x1b', "\\x1b"));
        }
        Command::Paint { modes, text } => {
            Style::new(&modes).println(text);
        }
        Command::Spin {
            frames,
            interval_ms,
            label,
            steps,
            clear,
            stderr,
        } => {
            if interval_ms == 0 {
                bail!("--interval-ms must be greater than zero");
            }
            let interval = Duration::from_millis(interval_ms);
            let options = SpinnerOptions::default()
                .with_frames(frames)
                .with_interval(interval)
                .with_text(label.clone())
                .clear_on_stop(clear);
            let run = StepRun {
                label,
                steps,
                interval,
                clear,
            };
            if stderr {
                run.drive(Terminal::stderr(), options).await;
            } else {
                run.drive(Terminal::stdout(), options).await;
            }
        }
        Command::Clear { region } => {
            let mut term = Terminal::stdout();
            match region {
                Region::Screen => term.clear_screen(),
                Region::ScreenAfter => term.clear_after_cursor(),
                Region::ScreenBefore => term.clear_before_cursor(),
                Region::Line => term.clear_line(),
                Region::LineAfter => term.clear_line_after_cursor(),
                Region::LineBefore => term.clear_line_before_cursor(),
            }
        }
    }

    Ok(())
}

struct StepRun {
    label: String,
    steps: u32,
    interval: Duration,
    clear: bool,
}

impl StepRun {
    async fn drive<W: Write + Send + 'static>(self, term: Terminal<W>, options: SpinnerOptions) {
        let spinner = Spinner::start(term, options);
        let updater = spinner.updater();

        // Ctrl+C stops early but still lets the spinner shut down cleanly
        for step in 1..=self.steps {
            tokio::select! {
                _ = tokio::time::sleep(self.interval) => {}
                _ = tokio::signal::ctrl_c() => break,
            }
            let _ = updater
                .send(format!("{} ({step}/{})", self.label, self.steps))
                .await;
        }

        let mut term = spinner.stop().await;
        if !self.clear {
            term.println("");
        }
        term.println(Style::new(&[BOLD, FG_GREEN]).paint("done"));
    }
}
