use alloc::string::String;
use alloc::vec::Vec;
use core::mem;
use serde::{Deserialize, Serialize};

use crate::*;

/// Running statistics shown next to the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundStats {
    pub moves_used: Moves,
    pub moves_remaining: Moves,
    pub score: Points,
    pub eggs_remaining: CellCount,
    pub eggs_cleared: CellCount,
    /// Directions played so far, oldest first.
    pub trail: Vec<Direction>,
}

impl RoundStats {
    /// Trail as arrows, e.g. `←↑→`.
    pub fn trail_arrows(&self) -> String {
        self.trail.iter().map(|direction| direction.arrow()).collect()
    }
}

/// One applied move.
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    pub mv: Move,
    pub roll: Roll,
    pub stats: RoundStats,
    pub outcome: RoundOutcome,
}

/// Everything that happened while playing one batch of moves.
#[derive(Clone, Debug, PartialEq)]
pub struct TurnReport {
    pub steps: Vec<Step>,
    pub outcome: RoundOutcome,
}

impl TurnReport {
    pub fn points(&self) -> Points {
        self.steps.iter().map(|step| step.roll.points).sum()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Response {
    Turn(TurnReport),
    Undone(RoundStats),
    /// Undo was requested with an empty history; nothing changed.
    NothingToUndo,
    Ended(SessionOutcome),
}

/// Borrowed state handed to the display collaborator.
#[derive(Clone, Debug, PartialEq)]
pub struct RoundView<'a> {
    pub board: &'a Board,
    pub stats: RoundStats,
    pub outcome: RoundOutcome,
}

/// Final result of a round, as handed to the leaderboard collaborator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub level: String,
    pub player: String,
    pub score: Points,
    pub moves_used: Moves,
    pub outcome: RoundOutcome,
}

impl RoundSummary {
    pub fn entry(&self) -> LeaderboardEntry {
        LeaderboardEntry::new(self.player.clone(), self.score)
    }
}

/// One play-through of a level, from load to a terminal outcome.
#[derive(Clone, Debug, PartialEq)]
pub struct Round {
    config: RoundConfig,
    initial_eggs: CellCount,
    board: Board,
    history: History,
    trail: Vec<Direction>,
    outcome: RoundOutcome,
    session: Option<SessionOutcome>,
}

impl Round {
    pub fn new(board: Board) -> Self {
        Self::with_config(board, RoundConfig::default())
    }

    pub fn with_config(board: Board, config: RoundConfig) -> Self {
        log::debug!(
            "round started on {:?}: {} eggs, {} moves",
            board.name(),
            board.egg_count(),
            board.max_moves()
        );
        Self {
            initial_eggs: board.egg_count(),
            history: History::new(config.undo_depth),
            config,
            board,
            trail: Vec::new(),
            outcome: RoundOutcome::InProgress,
            session: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn outcome(&self) -> RoundOutcome {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_terminal()
    }

    pub fn stats(&self) -> RoundStats {
        let eggs_remaining = self.board.egg_count();
        RoundStats {
            moves_used: self.board.moves_used(),
            moves_remaining: self.board.moves_remaining(),
            score: self.board.score(),
            eggs_remaining,
            eggs_cleared: self.initial_eggs.saturating_sub(eggs_remaining),
            trail: self.trail.clone(),
        }
    }

    pub fn view(&self) -> RoundView<'_> {
        RoundView {
            board: &self.board,
            stats: self.stats(),
            outcome: self.outcome,
        }
    }

    /// Classifies one raw input line and applies it.
    pub fn submit(&mut self, line: &str) -> Result<Response> {
        self.apply(Input::parse(line))
    }

    pub fn apply(&mut self, input: Input) -> Result<Response> {
        match input {
            Input::Moves(tokens) => self.play_tokens(tokens.as_slice()).map(Response::Turn),
            Input::Undo => match self.undo() {
                Ok(stats) => Ok(Response::Undone(stats)),
                Err(GameError::NothingToUndo) => Ok(Response::NothingToUndo),
                Err(err) => Err(err),
            },
            Input::Control(signal) => Ok(Response::Ended(self.control(signal))),
        }
    }

    /// Validates raw tokens against the remaining budget, then plays them.
    pub fn play_tokens<S: AsRef<str>>(&mut self, tokens: &[S]) -> Result<TurnReport> {
        self.check_in_progress()?;
        let moves = validate(tokens, self.board.moves_remaining())?;
        self.play(&moves)
    }

    /// Rolls each move in order, stopping at the first terminal outcome.
    pub fn play(&mut self, moves: &[Move]) -> Result<TurnReport> {
        self.check_in_progress()?;

        let mut steps = Vec::with_capacity(moves.len());
        for &mv in moves {
            if self.board.moves_remaining() == 0 {
                break;
            }

            let roll = roll_with(&self.board, mv.direction, &self.config.scoring)?;
            let previous = mem::replace(&mut self.board, roll.board.clone());
            self.history.push(previous);
            self.trail.push(mv.direction);

            let outcome = self.evaluate();
            if outcome.is_terminal() {
                self.finish(outcome);
            }
            steps.push(Step {
                mv,
                roll,
                stats: self.stats(),
                outcome,
            });
            if outcome.is_terminal() {
                break;
            }
        }

        // a board loaded without budget never gets to roll
        if !self.is_finished() && self.board.moves_remaining() == 0 {
            let outcome = self.evaluate();
            self.finish(outcome);
        }

        Ok(TurnReport {
            steps,
            outcome: self.outcome,
        })
    }

    /// Puts back the board from before the latest roll, refunding its move.
    pub fn undo(&mut self) -> Result<RoundStats> {
        self.check_in_progress()?;
        self.board = self.history.pop_last()?;
        self.trail.pop();
        log::debug!(
            "undo on {:?}: {} moves left, score {}",
            self.board.name(),
            self.board.moves_remaining(),
            self.board.score()
        );
        Ok(self.stats())
    }

    /// Handles restart, return-to-menu and terminate requests.
    ///
    /// A round that already ended keeps its outcome; the request only picks
    /// what the caller does next.
    pub fn control(&mut self, signal: ControlSignal) -> SessionOutcome {
        let (outcome, session) = match signal {
            ControlSignal::Restart => (RoundOutcome::Restarted, SessionOutcome::PlayAgain),
            ControlSignal::ReturnToMenu => (RoundOutcome::Abandoned, SessionOutcome::ReturnToMenu),
            ControlSignal::Terminate => (RoundOutcome::Abandoned, SessionOutcome::Terminate),
        };
        if !self.is_finished() {
            self.finish(outcome);
        }
        self.session = Some(session);
        session
    }

    /// What the caller should do once the round is over.
    pub fn conclude(&self, play_again: bool) -> Result<SessionOutcome> {
        if let Some(session) = self.session {
            return Ok(session);
        }
        match self.outcome {
            RoundOutcome::InProgress => Err(GameError::RoundInProgress),
            RoundOutcome::Won | RoundOutcome::LostNoMoves if play_again => {
                Ok(SessionOutcome::PlayAgain)
            }
            RoundOutcome::Won | RoundOutcome::LostNoMoves => Ok(SessionOutcome::ReturnToMenu),
            RoundOutcome::Restarted => Ok(SessionOutcome::PlayAgain),
            RoundOutcome::Abandoned => Ok(SessionOutcome::ReturnToMenu),
        }
    }

    /// Score record for a round that was won or lost, `None` otherwise.
    pub fn summary(&self, player: impl Into<String>) -> Option<RoundSummary> {
        if !self.outcome.is_ranked() {
            return None;
        }
        Some(RoundSummary {
            level: self.board.name().into(),
            player: player.into(),
            score: self.board.score(),
            moves_used: self.stats().moves_used,
            outcome: self.outcome,
        })
    }

    /// Level name and entry to hand to the leaderboard.
    pub fn leaderboard_entry(
        &self,
        player: impl Into<String>,
    ) -> Option<(String, LeaderboardEntry)> {
        let summary = self.summary(player)?;
        let entry = summary.entry();
        Some((summary.level, entry))
    }

    fn evaluate(&self) -> RoundOutcome {
        if !self.board.has_eggs() {
            RoundOutcome::Won
        } else if self.board.moves_remaining() == 0 {
            RoundOutcome::LostNoMoves
        } else {
            RoundOutcome::InProgress
        }
    }

    fn finish(&mut self, outcome: RoundOutcome) {
        self.outcome = outcome;
        log::info!(
            "round on {:?} ended: {:?} with score {} after {} moves",
            self.board.name(),
            outcome,
            self.board.score(),
            self.trail.len()
        );
    }

    fn check_in_progress(&self) -> Result<()> {
        if self.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn round(rows: &[&str], max_moves: Moves) -> Round {
        Round::new(Board::from_rows("test", rows, max_moves).unwrap())
    }

    fn moves(directions: &[Direction]) -> Vec<Move> {
        directions.iter().copied().map(Move::new).collect()
    }

    #[test]
    fn clearing_all_eggs_wins() {
        let mut round = round(&["o.@"], 1);

        let report = round.play(&moves(&[Direction::Right])).unwrap();

        assert_eq!(report.outcome, RoundOutcome::Won);
        assert_eq!(report.steps.len(), 1);
        assert_eq!(report.steps[0].stats.eggs_cleared, 1);
        assert_eq!(round.board().egg_count(), 0);
    }

    #[test]
    fn running_out_of_moves_loses() {
        let mut round = round(&["o#."], 1);

        let report = round.play(&moves(&[Direction::Right])).unwrap();

        assert_eq!(report.outcome, RoundOutcome::LostNoMoves);
        assert_eq!(report.points(), 0);
        assert_eq!(round.board().moves_remaining(), 0);
    }

    #[test]
    fn win_short_circuits_queued_moves() {
        let mut round = round(&["@o."], 5);

        let report = round
            .play(&moves(&[Direction::Left, Direction::Right, Direction::Right]))
            .unwrap();

        assert_eq!(report.steps.len(), 1);
        assert_eq!(round.outcome(), RoundOutcome::Won);
        assert_eq!(round.stats().moves_used, 1);
        assert_eq!(
            round.play(&moves(&[Direction::Left])),
            Err(GameError::AlreadyEnded)
        );
    }

    #[test]
    fn no_op_roll_still_costs_a_move() {
        let mut round = round(&["#o#", "#.#", "#@#"], 3);

        let report = round.play(&moves(&[Direction::Left])).unwrap();

        assert_eq!(report.outcome, RoundOutcome::InProgress);
        assert!(report.steps[0].roll.is_no_op());
        assert_eq!(round.stats().moves_remaining, 2);
        assert_eq!(round.stats().trail_arrows(), "←");
    }

    #[test]
    fn undo_restores_previous_board_and_refunds_move() {
        let mut round = round(&["#####", "#o.@#", "#o..#", "#####"], 4);
        let before = round.board().clone();

        round.play(&moves(&[Direction::Right])).unwrap();
        assert_eq!(round.board().score(), 10);

        let stats = round.undo().unwrap();

        assert_eq!(round.board(), &before);
        assert_eq!(stats.moves_used, 0);
        assert_eq!(stats.moves_remaining, 4);
        assert_eq!(stats.score, 0);
        assert!(stats.trail.is_empty());
    }

    #[test]
    fn single_level_undo_refuses_second_undo() {
        let mut round = round(&["o..", "..@"], 5);

        round
            .play(&moves(&[Direction::Right, Direction::Left]))
            .unwrap();
        round.undo().unwrap();

        assert_eq!(round.undo(), Err(GameError::NothingToUndo));
        assert_eq!(round.submit("undo"), Ok(Response::NothingToUndo));
        assert_eq!(round.stats().moves_used, 1);
    }

    #[test]
    fn unlimited_undo_walks_back_to_start() {
        let board = Board::from_rows("deep", &["o..", "..."], 5).unwrap();
        let config = RoundConfig {
            undo_depth: UndoDepth::Unlimited,
            ..Default::default()
        };
        let mut round = Round::with_config(board.clone(), config);

        round
            .play(&moves(&[Direction::Right, Direction::Down, Direction::Left]))
            .unwrap();
        for _ in 0..3 {
            round.undo().unwrap();
        }

        assert_eq!(round.board(), &board);
        assert_eq!(round.undo(), Err(GameError::NothingToUndo));
    }

    #[test]
    fn restart_abandons_round() {
        let mut round = round(&["o.@"], 3);

        assert_eq!(
            round.submit("restart"),
            Ok(Response::Ended(SessionOutcome::PlayAgain))
        );
        assert_eq!(round.outcome(), RoundOutcome::Restarted);
        assert_eq!(round.conclude(false), Ok(SessionOutcome::PlayAgain));
        assert_eq!(round.submit("r"), Err(GameError::AlreadyEnded));
        assert!(round.summary("player").is_none());
    }

    #[test]
    fn terminate_and_menu_requests() {
        let mut quit = round(&["o.@"], 3);
        assert_eq!(quit.control(ControlSignal::Terminate), SessionOutcome::Terminate);
        assert_eq!(quit.outcome(), RoundOutcome::Abandoned);
        assert_eq!(quit.conclude(true), Ok(SessionOutcome::Terminate));

        let mut menu = round(&["o.@"], 3);
        assert_eq!(menu.submit("menu"), Ok(Response::Ended(SessionOutcome::ReturnToMenu)));
    }

    #[test]
    fn conclude_after_finished_round() {
        let mut round = round(&["o.@"], 2);
        assert_eq!(round.conclude(true), Err(GameError::RoundInProgress));

        round.submit("r").unwrap();

        assert_eq!(round.conclude(true), Ok(SessionOutcome::PlayAgain));
        assert_eq!(round.conclude(false), Ok(SessionOutcome::ReturnToMenu));
    }

    #[test]
    fn submit_reports_invalid_tokens_without_changes() {
        let mut round = round(&["o.@"], 2);

        assert_eq!(
            round.submit("left sideways"),
            Err(GameError::InvalidMoveToken {
                index: 1,
                token: "sideways".into()
            })
        );
        assert_eq!(round.stats().moves_remaining, 2);
        assert!(round.history().is_empty());
    }

    #[test]
    fn submit_truncates_to_budget() {
        let mut round = round(&["o...", "...@"], 2);

        let Response::Turn(report) = round.submit("r l r l").unwrap() else {
            panic!("expected a turn");
        };

        assert_eq!(report.steps.len(), 2);
        assert_eq!(report.outcome, RoundOutcome::LostNoMoves);
        assert_eq!(round.stats().trail, vec![Direction::Right, Direction::Left]);
    }

    #[test]
    fn board_without_budget_is_lost_on_first_turn() {
        let mut round = round(&["o.@"], 0);

        let report = round.submit("right").unwrap();

        assert_eq!(
            report,
            Response::Turn(TurnReport {
                steps: vec![],
                outcome: RoundOutcome::LostNoMoves
            })
        );
    }

    #[test]
    fn summary_for_ranked_round() {
        let mut round = round(&["o.@"], 1);
        round.submit("right").unwrap();

        let summary = round.summary("Renz").unwrap();

        assert_eq!(summary.level, "test");
        assert_eq!(summary.score, 10);
        assert_eq!(summary.outcome, RoundOutcome::Won);
        assert_eq!(summary.entry(), LeaderboardEntry::new("Renz", 10));
        assert_eq!(
            round.leaderboard_entry("Renz"),
            Some(("test".into(), LeaderboardEntry::new("Renz", 10)))
        );
    }

    #[test]
    fn resumed_board_counts_moves_from_budget() {
        let fresh = Board::from_rows("saved", &["o..", "..@"], 5).unwrap();
        let saved = Board::from_parts("saved", fresh.cells().clone(), 5, 3, 20).unwrap();
        let mut round = Round::new(saved);

        assert_eq!(round.stats().moves_used, 2);
        round.submit("d").unwrap();
        assert_eq!(round.stats().moves_used, 3);
        assert_eq!(round.stats().trail, vec![Direction::Down]);
    }

    #[test]
    fn view_exposes_board_and_stats() {
        let round = round(&["oo@"], 3);
        let view = round.view();

        assert_eq!(view.board.egg_count(), 2);
        assert_eq!(view.stats.eggs_remaining, 2);
        assert_eq!(view.outcome, RoundOutcome::InProgress);
    }
}
