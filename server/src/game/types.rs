use serde::{Deserialize, Serialize};

/// A cell on the battle grid.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Coord { x, y }
    }
}

/// Board dimensions. Informational only; placement is never checked against it.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardSize {
    pub h: i32,
    pub w: i32,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Friendly,
    Enemy,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Unit archetypes the game host knows about.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    Archer,
    Wizard,
    Barbarian,
    Knight,
    Warrior,
    /// Anything the engine has no rule for.
    #[default]
    #[serde(other)]
    Other,
}

/// One unit on the battlefield, as sent by the game host.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Unit {
    pub armor: i32,
    pub attack_strength: i32,
    /// Attack allotment for this turn.
    pub attacks: i32,
    pub health: i32,
    pub id: String,
    pub kind: UnitKind,
    pub max_health: i32,
    pub moves: i32,
    pub side: Side,
    pub x: i32,
    pub y: i32,
    pub range: i32,
}

impl Unit {
    pub fn position(&self) -> Coord {
        Coord::new(self.x, self.y)
    }

    /// Moves the unit onto `to`. Later decisions of the same turn see the new cell.
    pub fn commit_move(&mut self, to: Coord) {
        self.x = to.x;
        self.y = to.y;
    }
}

/// Full board snapshot for the current turn.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct GameState {
    pub attack_actions_available: i32,
    pub board_size: BoardSize,
    pub enemy_units: Vec<Unit>,
    pub friendly_units: Vec<Unit>,
    pub move_actions_available: i32,
    pub player1: String,
    pub player2: String,
    pub turn_number: i32,
    pub uuid: String,
    pub your_id: String,
}

impl GameState {
    /// Every cell holding a unit of either side, enemies first.
    pub fn occupied_coords(&self) -> Vec<Coord> {
        self.enemy_units
            .iter()
            .chain(self.friendly_units.iter())
            .map(Unit::position)
            .collect()
    }

    pub fn enemy_coords(&self) -> Vec<Coord> {
        self.enemy_units.iter().map(Unit::position).collect()
    }
}

/// Per-request action budget, shared by every decision of one turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter {
    pub max_attacks: i32,
    pub max_moves: i32,
    pub attacks: i32,
    pub moves: i32,
}

impl Counter {
    pub fn for_turn(state: &GameState) -> Self {
        Counter {
            max_attacks: state.attack_actions_available,
            max_moves: state.move_actions_available,
            attacks: 0,
            moves: 0,
        }
    }

    pub fn can_attack(&self) -> bool {
        self.attacks < self.max_attacks
    }

    pub fn attacks_exhausted(&self) -> bool {
        !self.can_attack()
    }

    pub fn spend_attack(&mut self) {
        self.attacks += 1;
    }

    /// Archer steps are tallied here; nothing gates on the tally.
    pub fn spend_move(&mut self) {
        self.moves = self.moves.saturating_add(1);
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Move,
    Attack,
}

/// One unit's directive for this turn.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Action {
    pub unit: String,
    pub action: ActionKind,
    pub x: i32,
    pub y: i32,
}

impl Action {
    pub fn move_to(unit: &Unit, to: Coord) -> Self {
        Action {
            unit: unit.id.clone(),
            action: ActionKind::Move,
            x: to.x,
            y: to.y,
        }
    }

    pub fn attack(unit: &Unit, target: Coord) -> Self {
        Action {
            unit: unit.id.clone(),
            action: ActionKind::Attack,
            x: target.x,
            y: target.y,
        }
    }

    pub fn target(&self) -> Coord {
        Coord::new(self.x, self.y)
    }
}
