//! Interactive prompt loop as a small state machine.
//!
//! States: AwaitAlpha -> AwaitBeta -> AwaitMu -> ConfirmMore -> ConfirmAnother.
//! - A non-integer answer re-prompts the same state.
//! - An invalid (alpha, beta) pair restarts at AwaitAlpha.
//! - ConfirmMore is skipped when there is no surface to describe.
//! - EOF ends the session cleanly from any state.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use twobridge::link::{validate_link, RationalLinkSpec};
use twobridge::surface::SurfaceReport;

use crate::format::{render_more_info, render_report};

enum State {
    AwaitAlpha,
    AwaitBeta { alpha: i64 },
    AwaitMu { alpha: i64, beta: i64 },
    ConfirmMore(Box<SurfaceReport>),
    ConfirmAnother,
    Done,
}

struct Prompter<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Print `question` and read one line; `None` at EOF.
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.out, "{question}")?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Integer answer; re-asks on parse failure.
    fn ask_int(&mut self, question: &str) -> Result<Option<i64>> {
        loop {
            let Some(answer) = self.ask(question)? else {
                return Ok(None);
            };
            match answer.parse() {
                Ok(v) => return Ok(Some(v)),
                Err(_) => writeln!(self.out, "Not a valid integer. Try again.")?,
            }
        }
    }

    /// `y`/`n` answer judged by its first character; re-asks otherwise.
    fn ask_yes_no(&mut self, question: &str) -> Result<Option<bool>> {
        loop {
            let Some(answer) = self.ask(question)? else {
                return Ok(None);
            };
            match answer.chars().next() {
                Some('y') => return Ok(Some(true)),
                Some('n') => return Ok(Some(false)),
                _ => writeln!(self.out, "Sorry, input not understood.")?,
            }
        }
    }

    fn step(&mut self, state: State) -> Result<State> {
        let next = match state {
            State::AwaitAlpha => match self.ask_int("Enter alpha. ")? {
                Some(alpha) => State::AwaitBeta { alpha },
                None => State::Done,
            },
            State::AwaitBeta { alpha } => match self.ask_int("Enter beta. ")? {
                Some(beta) => match validate_link(alpha, beta) {
                    Ok(()) => State::AwaitMu { alpha, beta },
                    Err(err) => {
                        tracing::debug!(%err, "rejected link");
                        writeln!(
                            self.out,
                            "You must enter 0<alpha<beta, beta even, and gcd(alpha,beta)=1"
                        )?;
                        State::AwaitAlpha
                    }
                },
                None => State::Done,
            },
            State::AwaitMu { alpha, beta } => match self.ask_int("Enter mu. ")? {
                Some(mu) if mu < 0 => {
                    writeln!(self.out, "mu must be a non-negative integer. Try again.")?;
                    State::AwaitMu { alpha, beta }
                }
                Some(mu) => {
                    let spec = RationalLinkSpec::new(alpha, beta, mu)?;
                    let report = SurfaceReport::compute(spec)
                        .with_context(|| format!("computing surfaces for {spec}"))?;
                    writeln!(self.out, "{}", render_report(&report))?;
                    if report.surfaces.is_empty() {
                        State::ConfirmAnother
                    } else {
                        State::ConfirmMore(Box::new(report))
                    }
                }
                None => State::Done,
            },
            State::ConfirmMore(report) => match self.ask_yes_no("Do you want more info? (y/n)")? {
                Some(true) => {
                    writeln!(self.out, "{}", render_more_info(&report))?;
                    State::ConfirmAnother
                }
                Some(false) => State::ConfirmAnother,
                None => State::Done,
            },
            State::ConfirmAnother => {
                match self.ask_yes_no("Do you want to compute another? (y/n)")? {
                    Some(true) => State::AwaitAlpha,
                    _ => State::Done,
                }
            }
            State::Done => State::Done,
        };
        Ok(next)
    }
}

/// Run the session until the user declines another computation or input ends.
pub fn run<R: BufRead, W: Write>(input: R, out: W) -> Result<()> {
    let mut prompter = Prompter { input, out };
    let mut state = State::AwaitAlpha;
    while !matches!(state, State::Done) {
        state = prompter.step(state)?;
    }
    writeln!(prompter.out)?;
    Ok(())
}
