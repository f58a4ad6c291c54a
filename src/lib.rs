//! ANSI escape helpers and a single-line terminal spinner.
//!
//! ```no_run
//! use ansiline::{Spinner, SpinnerOptions, Style, Terminal, consts};
//!
//! # async fn demo() {
//! let spinner = Spinner::start(Terminal::stderr(), SpinnerOptions::default().with_text("fetching"));
//! spinner.update("parsing").await;
//! let mut term = spinner.stop().await;
//! term.println(Style::new(&[consts::BOLD, consts::FG_GREEN]).paint("done"));
//! # }
//! ```

pub mod consts;
pub mod escape;
pub mod spinner;
pub mod style;
pub mod terminal;

pub use consts::Mode;
pub use escape::esc;
pub use spinner::{Spinner, SpinnerOptions};
pub use style::{Painted, Style};
pub use terminal::Terminal;
