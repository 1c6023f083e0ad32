use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::thread;

use tracing::{debug, trace, warn};

use super::esm;
use super::locator::locate;
use super::{Instruction, PinPuzzle, SEPARATOR, validate_pin};
use crate::error::PuzzleError;
use crate::rng::{Csprng, SecretSource};

/// Why a seed's plant was discarded.
#[derive(Clone, Copy, Debug)]
enum Rejection {
    /// The final digit is not the PIN length.
    LengthDigit,
    /// Too few digits to hold the checksum and mask.
    ShortPlant,
    /// Some PIN digit had no free position.
    Unplaceable,
    /// The mask does not describe the located positions.
    MaskMismatch,
}

/// A worker's accepted `(selector, seed)`, if it found one.
type WorkerOutcome = Result<Option<(String, String)>, PuzzleError>;

/// Writes the seed without a sign, so it always starts with a digit.
fn render_seed(value: i64) -> String {
    let mut seed = value.to_string();

    if seed.starts_with('-') {
        seed.replace_range(..1, "0");
    }

    seed
}

impl PinPuzzle {
    /// Encodes `pin` using a fresh CSPRNG seeded from the operating system.
    ///
    /// When `key` is `None`, water is generated according to the
    /// configuration.
    ///
    /// # Errors
    ///
    /// - [`PuzzleError::InvalidPin`] / [`PuzzleError::InvalidKey`] for bad input
    /// - [`PuzzleError::EncodingExhausted`] when the attempt bound runs out
    /// - [`PuzzleError::Entropy`] when the OS cannot seed the generator
    pub fn encode(&self, pin: &str, key: Option<&str>) -> Result<Instruction, PuzzleError> {
        let mut rng = Csprng::from_os()?;

        self.encode_with(&mut rng, pin, key)
    }

    /// Encodes `pin`, drawing water and seeds from `rng`.
    pub fn encode_with<R: SecretSource + ?Sized>(
        &self,
        rng: &mut R,
        pin: &str,
        key: Option<&str>,
    ) -> Result<Instruction, PuzzleError> {
        let pin = validate_pin(pin)?;
        let water = self.resolve_water(rng, pin, key)?;
        let max_attempts = self.config.max_attempts();

        for attempt in 1..=max_attempts {
            let seed = render_seed(rng.signed_integer());

            match self.try_seed(&seed, &water, pin.as_bytes()) {
                Ok(selector) => {
                    debug!(attempt, pin_len = pin.len(), "puzzle formed");
                    return Ok(Instruction::new(selector, seed, water));
                }
                Err(rejection) => trace!(attempt, ?rejection, "seed rejected"),
            }
        }

        warn!(max_attempts, pin_len = pin.len(), "attempt bound exhausted");
        Err(PuzzleError::EncodingExhausted {
            attempts: max_attempts,
        })
    }

    /// Encodes `pin` with `workers` threads searching seeds concurrently.
    ///
    /// Every worker owns an OS-seeded CSPRNG. Attempts are counted across
    /// all workers against the configured bound, and the first accepted
    /// seed stops the rest.
    pub fn encode_parallel(
        &self,
        pin: &str,
        key: Option<&str>,
        workers: NonZeroUsize,
    ) -> Result<Instruction, PuzzleError> {
        let pin = validate_pin(pin)?;
        let water = self.resolve_water(&mut Csprng::from_os()?, pin, key)?;
        let max_attempts = self.config.max_attempts();

        let issued = &AtomicUsize::new(0);
        let solved = &AtomicBool::new(false);
        let water_ref = water.as_str();

        let outcomes: Vec<WorkerOutcome> = thread::scope(|scope| {
            let handles: Vec<_> = (0..workers.get())
                .map(|_| {
                    scope.spawn(move || -> WorkerOutcome {
                        let mut rng = Csprng::from_os()?;

                        while !solved.load(Ordering::Acquire) {
                            let attempt = issued.fetch_add(1, Ordering::Relaxed);
                            if attempt >= max_attempts {
                                break;
                            }

                            let seed = render_seed(rng.signed_integer());
                            match self.try_seed(&seed, water_ref, pin.as_bytes()) {
                                Ok(selector) => {
                                    solved.store(true, Ordering::Release);
                                    debug!(attempt = attempt + 1, "puzzle formed");
                                    return Ok(Some((selector, seed)));
                                }
                                Err(rejection) => {
                                    trace!(attempt = attempt + 1, ?rejection, "seed rejected")
                                }
                            }
                        }

                        Ok(None)
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| handle.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
                .collect()
        });

        let mut failure = None;
        for outcome in outcomes {
            match outcome {
                Ok(Some((selector, seed))) => return Ok(Instruction::new(selector, seed, water)),
                Ok(None) => {}
                Err(err) => failure = failure.or(Some(err)),
            }
        }

        if let Some(err) = failure {
            return Err(err);
        }

        warn!(max_attempts, pin_len = pin.len(), "attempt bound exhausted");
        Err(PuzzleError::EncodingExhausted {
            attempts: max_attempts,
        })
    }

    fn resolve_water<R: SecretSource + ?Sized>(
        &self,
        rng: &mut R,
        pin: &str,
        key: Option<&str>,
    ) -> Result<String, PuzzleError> {
        if let Some(key) = key {
            if key.is_empty() {
                return Err(PuzzleError::InvalidKey("empty"));
            }
            if key.contains(SEPARATOR) {
                return Err(PuzzleError::InvalidKey("contains the instruction separator"));
            }
            return Ok(key.to_owned());
        }

        let len = self.config.key_length();
        if !self.config.numeric_key() {
            return Ok(rng.alphanumeric_secret(len));
        }

        loop {
            let water = rng.numeric_secret(len);
            if water != pin {
                return Ok(water);
            }
        }
    }

    /// Runs one attempt and returns the selector if the plant is accepted.
    fn try_seed(&self, seed: &str, water: &str, pin: &[u8]) -> Result<String, Rejection> {
        let plant = self.plant(seed, water);

        if plant.declared_pin_len() != Some(pin.len()) {
            return Err(Rejection::LengthDigit);
        }

        let (checksum, mask) = plant.metadata(pin.len()).ok_or(Rejection::ShortPlant)?;
        let positions = locate(plant.digits(), pin).ok_or(Rejection::Unplaceable)?;

        if !esm::accepts(mask, &positions) {
            return Err(Rejection::MaskMismatch);
        }

        let mut selector: String = checksum.iter().map(|&d| d as char).collect();
        for position in positions {
            selector.push_str(&position.to_string());
        }

        Ok(selector)
    }
}
