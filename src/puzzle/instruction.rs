//! The three public components of an encoded PIN.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PuzzleError;

/// Joins the fields in the textual form. Absent from every field alphabet.
pub const SEPARATOR: char = '.';

/// A selector, seed and water triple produced by encoding.
///
/// None of the three alone reveals the PIN. The textual form is
/// `selector.seed.water`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawInstruction")]
pub struct Instruction {
    selector: String,
    seed: String,
    water: String,
}

#[derive(Deserialize)]
struct RawInstruction {
    selector: String,
    seed: String,
    water: String,
}

impl TryFrom<RawInstruction> for Instruction {
    type Error = PuzzleError;

    fn try_from(raw: RawInstruction) -> Result<Self, Self::Error> {
        Instruction::from_parts(raw.selector, raw.seed, raw.water)
    }
}

impl Instruction {
    pub(crate) fn new(selector: String, seed: String, water: String) -> Self {
        Self {
            selector,
            seed,
            water,
        }
    }

    /// Reassembles an instruction from separately stored fields.
    ///
    /// # Errors
    ///
    /// [`PuzzleError::MalformedInstruction`] if a field is empty or
    /// contains [`SEPARATOR`].
    pub fn from_parts(
        selector: impl Into<String>,
        seed: impl Into<String>,
        water: impl Into<String>,
    ) -> Result<Self, PuzzleError> {
        let inst = Self::new(selector.into(), seed.into(), water.into());

        let well_formed = [&inst.selector, &inst.seed, &inst.water]
            .iter()
            .all(|field| !field.is_empty() && !field.contains(SEPARATOR));
        if !well_formed {
            return Err(PuzzleError::MalformedInstruction);
        }

        Ok(inst)
    }

    /// Checksum followed by the packed position digits.
    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// Public per-encoding random value.
    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// Key material mixed into the plant.
    pub fn water(&self) -> &str {
        &self.water
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{SEPARATOR}{}{SEPARATOR}{}",
            self.selector, self.seed, self.water
        )
    }
}

impl FromStr for Instruction {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.split(SEPARATOR);

        match (fields.next(), fields.next(), fields.next(), fields.next()) {
            (Some(selector), Some(seed), Some(water), None) => {
                Self::from_parts(selector, seed, water)
            }
            _ => Err(PuzzleError::MalformedInstruction),
        }
    }
}
