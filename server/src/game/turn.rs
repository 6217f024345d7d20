//! Turn planning: runs the decision rules over the friendly roster.
//!
//! Two stages share one [`Counter`]:
//! 1. attack stage: archers, each once per point of its attack allotment,
//!    repeated `attackActionsAvailable` times or until the attack budget runs out;
//! 2. move stage: barbarians, then knights, then warriors, repeated
//!    `moveActionsAvailable` times.
//!
//! Every repeat count is clamped to `0..=MAX_ROUNDS`, so a hostile payload
//! cannot make one request produce an unbounded action list.

use crate::game::types::{Action, Counter, GameState, UnitKind};

/// Kinds that act during the attack stage.
pub const ATTACK_STAGE: [UnitKind; 1] = [UnitKind::Archer];

/// Kinds that act during the move stage, in order.
pub const MOVE_STAGE: [UnitKind; 3] = [UnitKind::Barbarian, UnitKind::Knight, UnitKind::Warrior];

/// Ceiling for stage rounds and for one archer's allotment per round.
pub const MAX_ROUNDS: i32 = 100;

/// Outcome of one planned turn.
#[derive(Debug, Clone)]
pub struct TurnPlan {
    pub actions: Vec<Action>,
    pub counter: Counter,
}

pub fn plan_turn(mut state: GameState) -> TurnPlan {
    let mut counter = Counter::for_turn(&state);
    let mut actions = Vec::new();

    log::debug!(
        "planning turn {} of game {:?}: {} friendly / {} enemy units",
        state.turn_number,
        state.uuid,
        state.friendly_units.len(),
        state.enemy_units.len()
    );

    for _ in 0..bounded(state.attack_actions_available, "attack rounds") {
        for kind in ATTACK_STAGE {
            for idx in roster(&state, kind) {
                let allotment = bounded(state.friendly_units[idx].attacks, "archer allotment");
                for _ in 0..allotment {
                    actions.extend(decide(&mut state, idx, &mut counter));
                }
            }
        }

        if counter.attacks_exhausted() {
            break;
        }
    }

    for _ in 0..bounded(state.move_actions_available, "move rounds") {
        for kind in MOVE_STAGE {
            for idx in roster(&state, kind) {
                actions.extend(decide(&mut state, idx, &mut counter));
            }
        }
    }

    log::info!(
        "turn {}: {} actions (attacks {}/{}, moves {}/{})",
        state.turn_number,
        actions.len(),
        counter.attacks,
        counter.max_attacks,
        counter.moves,
        counter.max_moves
    );

    TurnPlan { actions, counter }
}

/// Clamps a host-supplied repeat count to `0..=MAX_ROUNDS`.
fn bounded(count: i32, what: &str) -> i32 {
    if count > MAX_ROUNDS {
        log::warn!("{what} of {count} capped at {MAX_ROUNDS}");
    }
    count.clamp(0, MAX_ROUNDS)
}

/// Indices of friendly units of `kind`, in roster order.
fn roster(state: &GameState, kind: UnitKind) -> Vec<usize> {
    state
        .friendly_units
        .iter()
        .enumerate()
        .filter(|(_, u)| u.kind == kind)
        .map(|(idx, _)| idx)
        .collect()
}

/// Runs the rule for one unit and writes the unit back into the snapshot, so
/// a committed step is visible to every later decision.
fn decide(state: &mut GameState, idx: usize, counter: &mut Counter) -> Option<Action> {
    let mut unit = state.friendly_units[idx].clone();
    let rule = unit.kind.rule()?;
    let action = rule(&mut unit, state, counter);
    if let Some(a) = &action {
        log::debug!("{} -> {:?} ({}, {})", a.unit, a.action, a.x, a.y);
    }
    state.friendly_units[idx] = unit;
    action
}
