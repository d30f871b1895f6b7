//! Wagon companions. The party only ever shrinks.
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::player::{NameError, validate_name};

/// Number of companions a new journey starts with.
pub const PARTY_SIZE: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Party {
    members: Vec<String>,
}

impl Party {
    /// Build a party from typed names.
    ///
    /// # Errors
    ///
    /// Returns [`NameError::Empty`] if any name is blank.
    pub fn from_names<I, S>(names: I) -> Result<Self, NameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let members = names
            .into_iter()
            .map(|name| validate_name(name.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { members })
    }

    #[must_use]
    pub fn members(&self) -> &[String] {
        &self.members
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Pick a companion without removing them.
    #[must_use]
    pub fn random_member<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        if self.members.is_empty() {
            return None;
        }
        let idx = rng.gen_range(0..self.members.len());
        self.members.get(idx).map(String::as_str)
    }

    /// Remove one random companion permanently and return their name.
    pub fn lose_random_member<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<String> {
        if self.members.is_empty() {
            return None;
        }
        let idx = rng.gen_range(0..self.members.len());
        let lost = self.members.remove(idx);
        log::debug!("party member lost: {lost} ({} remain)", self.members.len());
        Some(lost)
    }
}
