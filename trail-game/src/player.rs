//! The wagon leader and the professions they can choose from.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("a name cannot be empty")]
    Empty,
}

/// Trim a typed name and reject blanks.
///
/// # Errors
///
/// Returns [`NameError::Empty`] when nothing but whitespace was entered.
pub fn validate_name(raw: &str) -> Result<String, NameError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(NameError::Empty);
    }
    Ok(name.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profession {
    Banker,
    Carpenter,
    Farmer,
}

/// Starting resources granted by a profession.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfessionStart {
    pub money: i32,
    pub health: i32,
    pub level: u8,
}

impl Profession {
    pub const ALL: [Self; 3] = [Self::Banker, Self::Carpenter, Self::Farmer];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Banker => "banker",
            Self::Carpenter => "carpenter",
            Self::Farmer => "farmer",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Banker => "Banker",
            Self::Carpenter => "Carpenter",
            Self::Farmer => "Farmer",
        }
    }

    /// Where this kind of emigrant set out from.
    #[must_use]
    pub const fn hometown(self) -> &'static str {
        match self {
            Self::Banker => "Boston",
            Self::Carpenter => "Ohio",
            Self::Farmer => "Illinois",
        }
    }

    #[must_use]
    pub const fn difficulty(self) -> &'static str {
        match self {
            Self::Banker => "Easy",
            Self::Carpenter => "Normal",
            Self::Farmer => "Brutal",
        }
    }

    #[must_use]
    pub const fn start(self) -> ProfessionStart {
        match self {
            Self::Banker => ProfessionStart {
                money: 1_000,
                health: 500,
                level: 1,
            },
            Self::Carpenter => ProfessionStart {
                money: 750,
                health: 350,
                level: 2,
            },
            Self::Farmer => ProfessionStart {
                money: 400,
                health: 200,
                level: 3,
            },
        }
    }

    /// Menu position (1-based) to profession.
    #[must_use]
    pub const fn from_menu(choice: u8) -> Option<Self> {
        match choice {
            1 => Some(Self::Banker),
            2 => Some(Self::Carpenter),
            3 => Some(Self::Farmer),
            _ => None,
        }
    }
}

impl fmt::Display for Profession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Profession {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "banker" | "1" => Ok(Self::Banker),
            "carpenter" | "2" => Ok(Self::Carpenter),
            "farmer" | "3" => Ok(Self::Farmer),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub profession: Profession,
    /// Whole dollars.
    pub money: i32,
    /// Can drop below zero; the journey loop treats that as death.
    pub health: i32,
    pub level: u8,
}

impl Player {
    /// Create the wagon leader with the profession's starting purse and health.
    ///
    /// # Errors
    ///
    /// Returns [`NameError::Empty`] for a blank name.
    pub fn new(name: &str, profession: Profession) -> Result<Self, NameError> {
        let name = validate_name(name)?;
        let start = profession.start();
        Ok(Self {
            name,
            profession,
            money: start.money,
            health: start.health,
            level: start.level,
        })
    }

    pub fn heal(&mut self, amount: i32) {
        self.health = self.health.saturating_add(amount);
    }

    pub fn hurt(&mut self, amount: i32) {
        self.health = self.health.saturating_sub(amount);
    }

    #[must_use]
    pub const fn can_afford(&self, cost: i32) -> bool {
        cost <= self.money
    }
}
