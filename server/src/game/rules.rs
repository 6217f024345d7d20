//! Per-kind decision rules.
//!
//! A rule looks at one friendly unit and the whole snapshot and picks at most
//! one action for it, spending from the shared [`Counter`]. `None` means the
//! unit does nothing this time round.

use crate::game::{
    geometry::{closest_enemy, manhattan_distance, step_toward},
    types::{Action, Coord, Counter, GameState, Unit, UnitKind},
};

/// Archers only loose arrows at enemies this close.
pub const ARCHER_RANGE: u64 = 4;

/// In-range targets an archer tries per decision before giving up and moving.
pub const ARCHER_VOLLEY: usize = 2;

/// Signature shared by every kind-specific rule.
pub type Rule = fn(&mut Unit, &GameState, &mut Counter) -> Option<Action>;

impl UnitKind {
    /// Dispatch table from kind to its rule.
    pub fn rule(self) -> Option<Rule> {
        let rule: Rule = match self {
            UnitKind::Archer => archer_action,
            UnitKind::Wizard => wizard_action,
            UnitKind::Barbarian | UnitKind::Knight | UnitKind::Warrior => melee_action,
            UnitKind::Other => return None,
        };
        Some(rule)
    }
}

/// `true` unless a unit of either side stands on `target`. Board edges are not checked.
pub fn can_move_to(state: &GameState, target: Coord) -> bool {
    !state.occupied_coords().contains(&target)
}

/// First enemy (in roster order) on one of the four cells touching `unit`.
pub fn adjacent_enemy(unit: &Unit, state: &GameState) -> Option<Coord> {
    let here = unit.position();
    state
        .enemy_units
        .iter()
        .map(Unit::position)
        .find(|&enemy| manhattan_distance(here, enemy) == 1)
}

/// Strikes the first listed enemy wherever it is.
pub fn wizard_action(unit: &mut Unit, state: &GameState, counter: &mut Counter) -> Option<Action> {
    let target = state.enemy_units.first()?.position();
    if !counter.can_attack() {
        return None;
    }
    counter.spend_attack();
    Some(Action::attack(unit, target))
}

/// Shoots the first enemy within [`ARCHER_RANGE`], trying at most
/// [`ARCHER_VOLLEY`] targets; otherwise steps toward the nearest one if that
/// cell is free. The archer's own position is left as is.
pub fn archer_action(unit: &mut Unit, state: &GameState, counter: &mut Counter) -> Option<Action> {
    let origin = unit.position();

    let in_range = state
        .enemy_units
        .iter()
        .map(Unit::position)
        .filter(|&enemy| manhattan_distance(origin, enemy) <= ARCHER_RANGE)
        .take(ARCHER_VOLLEY);
    for target in in_range {
        if counter.can_attack() {
            counter.spend_attack();
            return Some(Action::attack(unit, target));
        }
    }

    let nearest = closest_enemy(origin, &state.enemy_coords())?;
    let dest = step_toward(origin, nearest)?;
    if !can_move_to(state, dest) {
        return None;
    }
    counter.spend_move();
    Some(Action::move_to(unit, dest))
}

/// Barbarians, knights and warriors close in one cell at a time and hit
/// whatever they end up touching once the way forward is blocked.
///
/// A successful step is committed to `unit` but not tallied in the counter.
pub fn melee_action(unit: &mut Unit, state: &GameState, counter: &mut Counter) -> Option<Action> {
    let origin = unit.position();
    let nearest = closest_enemy(origin, &state.enemy_coords())?;

    if let Some(dest) = step_toward(origin, nearest) {
        if can_move_to(state, dest) {
            unit.commit_move(dest);
            return Some(Action::move_to(unit, dest));
        }
    }

    let target = adjacent_enemy(unit, state)?;
    if !counter.can_attack() {
        return None;
    }
    log::debug!(
        "{} next to enemy at ({}, {}), attacking",
        unit.id,
        target.x,
        target.y
    );
    counter.spend_attack();
    Some(Action::attack(unit, target))
}

/// Unbudgeted step toward the nearest enemy. Occupancy is ignored and the
/// unit is not moved.
pub fn advance(unit: &Unit, state: &GameState) -> Option<Action> {
    let origin = unit.position();
    let nearest = closest_enemy(origin, &state.enemy_coords())?;
    step_toward(origin, nearest).map(|dest| Action::move_to(unit, dest))
}

/// Unbudgeted attack on the nearest enemy if it is within the unit's own range.
pub fn strike_in_range(unit: &Unit, state: &GameState) -> Option<Action> {
    let origin = unit.position();
    let nearest = closest_enemy(origin, &state.enemy_coords())?;
    let reach = u64::try_from(unit.range).ok()?;
    (manhattan_distance(origin, nearest) <= reach).then(|| Action::attack(unit, nearest))
}
