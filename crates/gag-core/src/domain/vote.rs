//! Viewer-local tri-state voting.
//!
//! A vote never compounds: the displayed score is always the immutable base
//! score plus at most one unit of adjustment for the current view.

use serde::{Deserialize, Serialize};

/// The direction a viewer clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteDirection {
    Up,
    Down,
}

/// Current vote of one viewer on one post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteState {
    #[default]
    None,
    Up,
    Down,
}

impl From<VoteDirection> for VoteState {
    fn from(direction: VoteDirection) -> Self {
        match direction {
            VoteDirection::Up => VoteState::Up,
            VoteDirection::Down => VoteState::Down,
        }
    }
}

impl VoteState {
    /// Score adjustment this state applies on top of the base score.
    pub fn delta(self) -> i64 {
        match self {
            VoteState::None => 0,
            VoteState::Up => 1,
            VoteState::Down => -1,
        }
    }
}

/// Result of a vote click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VoteOutcome {
    pub score: i64,
    pub state: VoteState,
}

/// Apply a click in `requested` direction to a post whose fixture score is
/// `base` and whose current vote is `previous`.
///
/// Clicking the active direction again clears the vote; any other click sets
/// the vote to the requested direction, recomputed from `base`.
pub fn apply_vote(base: i64, previous: VoteState, requested: VoteDirection) -> VoteOutcome {
    let requested = VoteState::from(requested);
    let state = if previous == requested {
        VoteState::None
    } else {
        requested
    };

    VoteOutcome {
        score: base + state.delta(),
        state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_vote_moves_score_by_one() {
        assert_eq!(
            apply_vote(100, VoteState::None, VoteDirection::Up),
            VoteOutcome { score: 101, state: VoteState::Up }
        );
        assert_eq!(
            apply_vote(100, VoteState::None, VoteDirection::Down),
            VoteOutcome { score: 99, state: VoteState::Down }
        );
    }

    #[test]
    fn test_repeat_click_clears_vote() {
        let up = apply_vote(1478, VoteState::None, VoteDirection::Up);
        let cleared = apply_vote(1478, up.state, VoteDirection::Up);
        assert_eq!(cleared, VoteOutcome { score: 1478, state: VoteState::None });

        let down = apply_vote(-3, VoteState::None, VoteDirection::Down);
        let cleared = apply_vote(-3, down.state, VoteDirection::Down);
        assert_eq!(cleared, VoteOutcome { score: -3, state: VoteState::None });
    }

    #[test]
    fn test_switching_direction_overwrites_from_base() {
        let up = apply_vote(920, VoteState::None, VoteDirection::Up);
        let down = apply_vote(920, up.state, VoteDirection::Down);
        assert_eq!(down, VoteOutcome { score: 919, state: VoteState::Down });

        let up_again = apply_vote(920, down.state, VoteDirection::Up);
        assert_eq!(up_again, VoteOutcome { score: 921, state: VoteState::Up });
    }

    #[test]
    fn test_long_click_sequence_never_drifts() {
        let base = 785;
        let mut state = VoteState::None;
        let clicks = [
            VoteDirection::Up,
            VoteDirection::Down,
            VoteDirection::Down,
            VoteDirection::Up,
            VoteDirection::Up,
            VoteDirection::Down,
        ];
        for click in clicks {
            let outcome = apply_vote(base, state, click);
            assert!((outcome.score - base).abs() <= 1);
            state = outcome.state;
        }
        assert_eq!(state, VoteState::Down);
    }
}
