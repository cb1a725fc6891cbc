//! Match flow state machine
//!
//! Single authority for which phase the penalty attempt is in. Systems
//! report what happened as actions; the transition table decides what the
//! next phase is, and anything not listed is ignored.

use log::debug;

/// Phases of a single penalty attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    /// Player is choosing the kick spot on the ground
    PlacingBall,
    /// Ball is placed; aiming, contact selection and power charge are live
    ReadyToKick,
    /// Ball is in flight toward the goal
    BallKicked,
    /// Goal detected; celebration hold before the next attempt
    GoalScored,
    /// Ball missed, was saved, or stopped; watch it settle before resetting
    PastGoalLine,
}

/// What just happened, as reported by the systems
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchAction {
    BallPlaced,
    KickLaunched,
    GoalDetected,
    LineCrossed,
    TimerElapsed,
    Reset,
}

/// Transition table. Returns None for action/state pairs that do nothing.
pub fn get_next_state(state: MatchState, action: MatchAction) -> Option<MatchState> {
    use MatchAction::*;
    use MatchState::*;

    match (state, action) {
        (PlacingBall, BallPlaced) => Some(ReadyToKick),
        (ReadyToKick, KickLaunched) => Some(BallKicked),
        (BallKicked, GoalDetected) => Some(GoalScored),
        (BallKicked, LineCrossed) => Some(PastGoalLine),
        (GoalScored, TimerElapsed) => Some(PlacingBall),
        (PastGoalLine, TimerElapsed) => Some(PlacingBall),
        (_, Reset) => Some(PlacingBall),
        _ => None,
    }
}

/// Current phase plus how long we have been in it
#[derive(Debug, Clone, Copy)]
pub struct MatchFsm {
    pub state: MatchState,
    pub state_time: f32,
}

impl MatchFsm {
    pub fn new() -> Self {
        Self {
            state: MatchState::PlacingBall,
            state_time: 0.0,
        }
    }

    /// Apply an action; on a valid transition the state timer restarts.
    /// Returns true if the state changed.
    pub fn apply(&mut self, action: MatchAction) -> bool {
        match get_next_state(self.state, action) {
            Some(next) => {
                debug!("match fsm: {:?} --{:?}--> {:?}", self.state, action, next);
                self.state = next;
                self.state_time = 0.0;
                true
            }
            None => false,
        }
    }

    pub fn tick(&mut self, dt: f32) {
        self.state_time += dt;
    }
}

impl Default for MatchFsm {
    fn default() -> Self {
        Self::new()
    }
}
