//! Non-interactive front end: run a list of clicks and report the result.

use anyhow::{Context, Result};
use noughts_core::{GameState, GameStore, Ignored, Transition};
use std::io::Write;
use tracing::{debug, instrument};

/// What a replay produced.
#[derive(Debug, Clone, PartialEq, Eq, derive_new::new)]
pub struct ReplayReport {
    /// Final state.
    pub state: GameState,
    /// Clicks that were ignored, with their index and reason.
    pub ignored: Vec<(usize, Ignored)>,
}

impl ReplayReport {
    /// Human-readable rendering: grid, status, announcement, ignored clicks.
    pub fn render(&self) -> String {
        let mut out = self.state.grid().display();
        out.push_str("\n\n");
        out.push_str(&self.state.status());
        out.push('\n');
        if let Some(announcement) = self.state.announcement() {
            out.push_str(&announcement);
            out.push('\n');
        }
        for (index, reason) in &self.ignored {
            out.push_str(&format!("Ignored click {}: {}\n", index, reason));
        }
        out
    }
}

/// Feeds `clicks` through a fresh game in order.
#[instrument]
pub fn replay(clicks: &[usize]) -> ReplayReport {
    let mut store = GameStore::new();
    store.subscribe(|event, _| debug!(?event, "Replay event"));

    let mut ignored = Vec::new();
    for &index in clicks {
        if let Transition::Ignored(reason) = store.handle_click(index) {
            ignored.push((index, reason));
        }
    }

    ReplayReport::new(store.state().clone(), ignored)
}

/// Runs a replay and writes the report (text or JSON state) to `out`.
pub fn run(clicks: &[usize], json: bool, out: &mut impl Write) -> Result<()> {
    let report = replay(clicks);
    if json {
        serde_json::to_writer_pretty(&mut *out, &report.state)
            .context("Failed to serialize game state")?;
        writeln!(out)?;
    } else {
        write!(out, "{}", report.render())?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_core::{Mark, Position};

    #[test]
    fn test_winning_replay_text() {
        let mut out = Vec::new();
        run(&[0, 3, 1, 4, 2], false, &mut out).expect("replay");
        let text = String::from_utf8(out).expect("utf8");
        assert_eq!(
            text,
            "X|X|X\n-+-+-\nO|O|6\n-+-+-\n7|8|9\n\nNext player: X\nAnd the winner is X!\n"
        );
    }

    #[test]
    fn test_ignored_clicks_are_reported() {
        let report = replay(&[4, 4, 11]);
        assert_eq!(report.state.history().len(), 1);
        assert_eq!(
            report.ignored,
            vec![
                (4, Ignored::Occupied(Position::Center)),
                (11, Ignored::OutOfRange(11)),
            ]
        );
        assert!(report.render().contains("Ignored click 4: Center is already occupied"));
    }

    #[test]
    fn test_clicks_after_win_are_ignored() {
        let report = replay(&[0, 3, 1, 4, 2, 8]);
        assert_eq!(report.ignored, vec![(8, Ignored::GameOver(Mark::X))]);
        assert!(report.state.grid().is_empty(Position::BottomRight));
    }

    #[test]
    fn test_json_output_parses_back() {
        let mut out = Vec::new();
        run(&[4, 0], true, &mut out).expect("replay");
        let state: GameState = serde_json::from_slice(&out).expect("json state");
        assert_eq!(state.turn(), Mark::X);
        assert_eq!(state.history().len(), 2);
    }
}
