use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::errors::{ValidationError, ValidationResult};

/// A single skill rating on the 1-10 scale
///
/// # Invariants
/// - Value is within `1..=10`
/// - Is immutable after construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SkillRating(u8);

impl SkillRating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// Creates a new SkillRating value object
    ///
    /// # Returns
    /// * `Ok(SkillRating)` - If the value is within range
    /// * `Err(ValidationError::SkillOutOfRange)` - Otherwise
    ///
    /// # Example
    /// ```
    /// use football_teams::domain::player::SkillRating;
    ///
    /// let rating = SkillRating::new(7).expect("valid rating");
    /// assert_eq!(rating.value(), 7);
    /// assert!(SkillRating::new(0).is_err());
    /// ```
    pub fn new(value: u8) -> ValidationResult<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::SkillOutOfRange(value))
        }
    }

    /// Returns the raw rating
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for SkillRating {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SkillRating> for u8 {
    fn from(rating: SkillRating) -> Self {
        rating.0
    }
}

impl fmt::Display for SkillRating {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Player name value object
///
/// Names identify players across balancing calls and recorded games.
///
/// # Invariants
/// - Must not be empty or whitespace only
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerName(String);

impl PlayerName {
    /// Creates a new PlayerName, rejecting blank input
    pub fn new(name: impl Into<String>) -> ValidationResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyPlayerName);
        }
        Ok(Self(name))
    }

    /// Returns the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PlayerName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PlayerName> for String {
    fn from(name: PlayerName) -> Self {
        name.0
    }
}

impl PartialEq<str> for PlayerName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The four skill attributes tracked for every player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerAttributes {
    pub attacking: SkillRating,
    pub defending: SkillRating,
    pub goalkeeping: SkillRating,
    pub energy: SkillRating,
}

impl PlayerAttributes {
    /// Builds attributes from raw ratings, validating each one
    pub fn new(attacking: u8, defending: u8, goalkeeping: u8, energy: u8) -> ValidationResult<Self> {
        Ok(Self {
            attacking: SkillRating::new(attacking)?,
            defending: SkillRating::new(defending)?,
            goalkeeping: SkillRating::new(goalkeeping)?,
            energy: SkillRating::new(energy)?,
        })
    }

    /// Sum of all four ratings, in `4..=40`
    pub fn total(&self) -> u32 {
        [self.attacking, self.defending, self.goalkeeping, self.energy]
            .iter()
            .map(|rating| u32::from(rating.value()))
            .sum()
    }
}
