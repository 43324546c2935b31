//! Line-oriented front end.
//!
//! Reads lines of key names, forwards each key to the input router and
//! prints the display after every line. Memory and error notices are printed
//! above the display. The `plot` key runs the slope/intercept prompts on the
//! same input stream.

use crate::calculator::{Calculator, copy_to_clipboard};
use crate::config::Config;
use crate::input::{Dispatch, Key, Notice, dispatch, tokenize};
use crate::plot::{ask_equation, plot_to_file};
use anyhow::Result;
use std::io::{BufRead, Write};
use std::ops::ControlFlow;
use tracing::{debug, warn};

pub const HELP: &str = "\
Keys (separate with spaces or run together, e.g. `12+3=` or `16 sqrt`):
  digits 0-9 and .        + - * /          = or enter
  ce / esc                back / ←         neg / ±          pi / π
  sin cos tan sqrt square log ln exp recip cbrt   (aliases: √ x² 1/x ∛)
  mc mr m+ m-             plot
Commands (whole line): copy, help, quit";

/// One calculator session: the engine plus the settings of its front end.
pub struct Session {
    calc: Calculator,
    config: Config,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            calc: Calculator::new(),
            config,
        }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calc
    }

    /// Run until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        writeln!(output, "{}", self.calc.display())?;
        loop {
            write!(output, "> ")?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                return Ok(());
            }
            if self.handle_line(&line, input, output)?.is_break() {
                return Ok(());
            }
        }
    }

    /// Handle one line of input and print the resulting display.
    ///
    /// `input` is only read from when the line presses `plot`.
    pub fn handle_line<R: BufRead, W: Write>(
        &mut self,
        line: &str,
        input: &mut R,
        output: &mut W,
    ) -> Result<ControlFlow<()>> {
        let line = line.trim();
        match line.to_lowercase().as_str() {
            "quit" | "exit" => return Ok(ControlFlow::Break(())),
            "help" | "?" => {
                writeln!(output, "{HELP}")?;
                return Ok(ControlFlow::Continue(()));
            }
            "copy" => {
                self.copy_display(output)?;
                return Ok(ControlFlow::Continue(()));
            }
            _ => {}
        }

        let keys = match tokenize(line) {
            Ok(keys) => keys,
            Err(err) => {
                debug!(%err, "rejected line");
                print_notice(output, &Notice::Error { message: err.to_string() })?;
                return Ok(ControlFlow::Continue(()));
            }
        };

        for key in keys {
            match dispatch(&mut self.calc, key) {
                Dispatch::Updated { notice } => {
                    if let Some(notice) = notice {
                        print_notice(output, &notice)?;
                    }
                    if key == Key::Equals && self.config.clipboard.copy_results {
                        self.copy_display(output)?;
                    }
                }
                Dispatch::PlotRequested => self.plot(input, output)?,
            }
        }

        writeln!(output, "{}", self.calc.display())?;
        Ok(ControlFlow::Continue(()))
    }

    fn plot<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<()> {
        let Some(equation) = ask_equation(input, output)? else {
            debug!("plot cancelled");
            return Ok(());
        };

        let path = &self.config.plot.output;
        match plot_to_file(equation, self.config.plot.format, path) {
            Ok(()) => writeln!(output, "Plot written to {}", path.display())?,
            Err(err) => {
                warn!(error = %err, "plotting failed");
                let message = format!("An error occurred while plotting: {err:#}");
                print_notice(output, &Notice::Error { message })?;
            }
        }
        Ok(())
    }

    fn copy_display<W: Write>(&self, output: &mut W) -> Result<()> {
        if let Err(err) = copy_to_clipboard(self.calc.display()) {
            warn!(error = %err, "clipboard unavailable");
            let message = format!("{err:#}");
            print_notice(output, &Notice::Error { message })?;
        }
        Ok(())
    }
}

fn print_notice<W: Write>(output: &mut W, notice: &Notice) -> std::io::Result<()> {
    match notice {
        Notice::Info { title, message } => writeln!(output, "[{title}] {message}"),
        Notice::Error { message } => writeln!(output, "[Error] {message}"),
    }
}
