//! Team and seeding pot data structures.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a team (used in pairings and fixtures).
pub type TeamId = Uuid;

/// Number of teams in each seeding pot.
pub const POT_SIZE: usize = 9;

/// Total number of teams in the league phase.
pub const TEAM_COUNT: usize = POT_SIZE * Pot::ALL.len();

/// Seeding pot. Each pot holds exactly [`POT_SIZE`] teams.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pot {
    One,
    Two,
    Three,
    Four,
}

impl Pot {
    /// All pots in seeding order.
    pub const ALL: [Pot; 4] = [Pot::One, Pot::Two, Pot::Three, Pot::Four];

    /// Zero-based index (`Pot::One` → 0), for dense per-pot arrays.
    pub fn index(self) -> usize {
        match self {
            Pot::One => 0,
            Pot::Two => 1,
            Pot::Three => 2,
            Pot::Four => 3,
        }
    }

    /// One-based pot number (`Pot::One` → 1).
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }
}

impl std::fmt::Display for Pot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "pot {}", self.number())
    }
}

/// A team entering the league phase draw.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    /// Seeding pot this team was placed in.
    pub pot: Pot,
    /// Country code (e.g. "ENG"); drives the country-protection constraints.
    pub country: String,
}

impl Team {
    /// Create a new team with a fresh id.
    pub fn new(name: impl Into<String>, pot: Pot, country: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            pot,
            country: country.into(),
        }
    }
}
