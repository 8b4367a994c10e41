//! Terminal front end: drives a [`QuizRunner`] from stdin.

use std::fmt::Write as _;

use memtest_core::model::{PHASE_SECS, Phase, SEQUENCE_LEN, Symbol};
use services::{QuizCommand, QuizResult, QuizRunner, QuizService, QuizSnapshot};
use tokio::io::{AsyncBufReadExt, BufReader};

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    /// Zero-based palette position.
    Pick(usize),
    /// Zero-based slot in the recalled order.
    Unpick(usize),
    Submit,
    Again,
    Quit,
}

fn parse_input(line: &str) -> Option<Input> {
    let line = line.trim();
    match line {
        "q" | "quit" => return Some(Input::Quit),
        "s" | "submit" => return Some(Input::Submit),
        "r" | "again" => return Some(Input::Again),
        _ => {}
    }
    if let Some(rest) = line.strip_prefix('-') {
        let slot: usize = rest.trim().parse().ok()?;
        return slot.checked_sub(1).map(Input::Unpick);
    }
    let position: usize = line.parse().ok()?;
    position.checked_sub(1).map(Input::Pick)
}

/// What a line of input asks the session to do.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Step {
    Send(Vec<QuizCommand>),
    /// Nothing on screen matches the input; the session carries on.
    Skip,
    Quit,
}

/// Resolve `input` against what is on screen.
fn step_for(snapshot: &QuizSnapshot, input: Input) -> Step {
    match input {
        Input::Pick(position) => match snapshot.palette.get(position) {
            Some(entry) => Step::Send(vec![QuizCommand::Pick(entry.symbol.clone())]),
            None => Step::Skip,
        },
        Input::Unpick(slot) => Step::Send(vec![QuizCommand::Unpick(slot)]),
        Input::Submit => Step::Send(vec![QuizCommand::Submit]),
        Input::Again => Step::Send(vec![QuizCommand::Restart, QuizCommand::Start]),
        Input::Quit => Step::Quit,
    }
}

fn join(symbols: &[Symbol]) -> String {
    symbols
        .iter()
        .map(Symbol::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_result(result: &QuizResult) -> String {
    let profile = result.profile;
    let mut out = String::new();
    let _ = writeln!(out, "Your Memory Score: {}%", result.score);
    let _ = writeln!(out, "Recalled:  {}", join(&result.recalled));
    let _ = writeln!(out, "Sequence:  {}", join(&result.target));
    let _ = writeln!(out);
    let _ = writeln!(out, "{} {}", profile.icon, profile.name);
    let _ = writeln!(out, "{}", profile.description);
    let _ = writeln!(out, "  ⏱️ Perfect Study Duration: {}", profile.duration);
    let _ = writeln!(out, "  ☕ Break Time: {}", profile.break_time);
    let _ = writeln!(out, "  📚 Best Method: {}", profile.method);
    let _ = writeln!(out, "  🎯 Study Style: {}", profile.style);
    let _ = writeln!(out, "  🌟 Ideal Time: {}", profile.ideal_time);
    let _ = writeln!(out, "Your Personalized Study Tips");
    for tip in profile.tips {
        let _ = writeln!(out, "  - {tip}");
    }
    let _ = write!(out, "Try Again 🔄: type r, or q to quit");
    out
}

fn render_snapshot(snapshot: &QuizSnapshot) -> String {
    let mut out = String::new();
    match snapshot.phase {
        Phase::Welcome => {
            let _ = writeln!(out, "StudyMate: Memory & Focus Test");
            let _ = writeln!(out, "  1. Memorize {SEQUENCE_LEN} emojis in {PHASE_SECS} seconds");
            let _ = writeln!(out, "  2. Recall them in order in the next {PHASE_SECS} seconds");
            let _ = write!(out, "  3. Discover your unique study pattern!");
        }
        Phase::Memorize => {
            let _ = writeln!(out, "Memorize These! ({}s)", snapshot.remaining_secs);
            let _ = writeln!(out, "  {}", join(&snapshot.target));
            let _ = write!(out, "Remember the order! You'll need to recall them next 🧠");
        }
        Phase::Recall => {
            let _ = writeln!(out, "Tap in Order! ({}s)", snapshot.remaining_secs);
            for (index, entry) in snapshot.palette.iter().enumerate() {
                let mark = if entry.picked { "✓" } else { " " };
                let _ = writeln!(out, "  {:>2}) {mark} {}", index + 1, entry.symbol);
            }
            let _ = writeln!(
                out,
                "Your Order ({}/{SEQUENCE_LEN}): {}",
                snapshot.picks.len(),
                join(&snapshot.picks)
            );
            if snapshot.can_submit {
                let _ = write!(out, "Submit & See Results! ✨: type s");
            } else {
                let _ = write!(out, "Type a number to pick, -n to remove slot n, q to quit");
            }
        }
        Phase::Results => match &snapshot.result {
            Some(result) => out.push_str(&render_result(result)),
            None => out.push_str("Your Memory Score"),
        },
    }
    out
}

/// One finished run as a single JSON line, so replays stay line-delimited.
fn result_line(result: &QuizResult) -> serde_json::Result<String> {
    serde_json::to_string(result)
}

/// Prints screens, skipping snapshots that only moved the countdown.
struct Console {
    json: bool,
    shown: Option<(Phase, Vec<Symbol>)>,
}

impl Console {
    fn new(json: bool) -> Self {
        Self { json, shown: None }
    }

    fn say(&self, text: &str) {
        // With --json, stdout carries only result lines.
        if self.json {
            eprintln!("{text}");
        } else {
            println!("{text}");
        }
    }

    fn show(&mut self, snapshot: &QuizSnapshot) -> anyhow::Result<()> {
        let key = (snapshot.phase, snapshot.picks.clone());
        if self.shown.as_ref() == Some(&key) {
            let secs = snapshot.remaining_secs;
            if snapshot.phase.is_timed() && secs > 0 && secs % 10 == 0 {
                self.say(&format!("{secs}s left"));
            }
            return Ok(());
        }
        self.shown = Some(key);
        self.say(&render_snapshot(snapshot));
        if let Some(result) = snapshot.result.as_ref().filter(|_| self.json) {
            println!("{}", result_line(result)?);
        }
        Ok(())
    }
}

/// Run one interactive session until the player quits or stdin closes.
///
/// # Errors
///
/// Fails on stdin errors, or if the runner stops unexpectedly.
pub async fn run(service: QuizService, json: bool) -> anyhow::Result<()> {
    let (handle, task) = QuizRunner::spawn(service);
    let mut snapshots = handle.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut console = Console::new(json);

    console.show(&snapshots.borrow_and_update().clone())?;
    handle.start().await?;

    loop {
        tokio::select! {
            changed = snapshots.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = snapshots.borrow_and_update().clone();
                console.show(&snapshot)?;
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let Some(input) = parse_input(&line) else {
                    console.say("?");
                    continue;
                };
                match step_for(&handle.snapshot(), input) {
                    Step::Send(commands) => {
                        for command in commands {
                            handle.send(command).await?;
                        }
                    }
                    Step::Skip => console.say("?"),
                    Step::Quit => break,
                }
            }
        }
    }

    drop(handle);
    let service = task.await?;
    tracing::debug!(phase = %service.phase(), "terminal session finished");
    Ok(())
}
