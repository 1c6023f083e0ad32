use tracing::warn;

use super::esm::split_positions;
use super::{CHECKSUM_LEN, Instruction, PinPuzzle};
use crate::error::{PuzzleError, SelectorDefect};

impl PinPuzzle {
    /// Reassembles the PIN from an instruction.
    ///
    /// # Errors
    ///
    /// - [`PuzzleError::ChecksumMismatch`] if the selector's checksum does
    ///   not match the regrown plant
    /// - [`PuzzleError::MalformedSelector`] for any structural
    ///   inconsistency between selector and plant
    pub fn decode(&self, inst: &Instruction) -> Result<String, PuzzleError> {
        let plant = self.plant(inst.seed(), inst.water());

        let pin_len = plant
            .declared_pin_len()
            .ok_or(PuzzleError::MalformedSelector(SelectorDefect::PinLength))?;
        let (checksum, mask) = plant
            .metadata(pin_len)
            .ok_or(PuzzleError::MalformedSelector(SelectorDefect::ShortPlant))?;

        if inst.selector().as_bytes().get(..CHECKSUM_LEN) != Some(checksum) {
            warn!("selector checksum mismatch");
            return Err(PuzzleError::ChecksumMismatch);
        }

        // The prefix matched ASCII digits, so this is a char boundary.
        let run = inst
            .selector()
            .get(CHECKSUM_LEN..)
            .ok_or(PuzzleError::MalformedSelector(SelectorDefect::NonDigit))?;

        split_positions(&mask[..pin_len], run)?
            .into_iter()
            .map(|token| {
                let index: usize = token
                    .parse()
                    .map_err(|_| PuzzleError::MalformedSelector(SelectorDefect::NonDigit))?;

                plant
                    .digits()
                    .get(index)
                    .map(|&d| d as char)
                    .ok_or(PuzzleError::MalformedSelector(SelectorDefect::OutOfBounds))
            })
            .collect()
    }
}
