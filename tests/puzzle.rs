use std::num::NonZeroUsize;

use pinpuzzle::puzzle::{CHECKSUM_LEN, PuzzleConfig};
use pinpuzzle::{Csprng, Instruction, PinPuzzle, PuzzleError, SelectorDefect};

fn puzzle() -> PinPuzzle {
    PinPuzzle::construct("test-soil", 8, false).unwrap()
}

fn rng(tag: u8) -> Csprng {
    Csprng::from_seed([tag; 32])
}

fn with_selector(inst: &Instruction, selector: &str) -> Instruction {
    Instruction::from_parts(selector, inst.seed(), inst.water()).unwrap()
}

// -------------------------------------------------------
// ROUND TRIPS
// -------------------------------------------------------

#[test]
fn scenario_a_roundtrip() {
    let puzzle = puzzle();

    let inst = puzzle.encode("4821", None).unwrap();

    assert_eq!(puzzle.decode(&inst).unwrap(), "4821");
}

#[test]
fn roundtrip_every_pin_length() {
    let puzzle = puzzle();
    let pins = [
        "7", "0", "42", "909", "1234", "00000", "314159", "2718281", "12345678", "99999999",
    ];

    for (tag, pin) in pins.iter().enumerate() {
        let inst = puzzle.encode_with(&mut rng(tag as u8), pin, None).unwrap();

        assert_eq!(puzzle.decode(&inst).unwrap(), *pin, "pin {pin}");
    }
}

#[test]
fn roundtrip_numeric_key() {
    let puzzle = PinPuzzle::construct("numeric-soil", 4, true).unwrap();

    for (tag, pin) in ["1111", "5039", "86"].iter().enumerate() {
        let inst = puzzle.encode_with(&mut rng(40 + tag as u8), pin, None).unwrap();

        assert_eq!(inst.water().len(), 4);
        assert!(inst.water().bytes().all(|b| b.is_ascii_digit()));
        assert_ne!(inst.water(), *pin);
        assert_eq!(puzzle.decode(&inst).unwrap(), *pin);
    }
}

#[test]
fn roundtrip_with_supplied_key() {
    let puzzle = puzzle();

    let inst = puzzle
        .encode_with(&mut rng(60), "2580", Some("my-own_Key42"))
        .unwrap();

    assert_eq!(inst.water(), "my-own_Key42");
    assert_eq!(puzzle.decode(&inst).unwrap(), "2580");
}

#[test]
fn roundtrip_through_text_form() {
    let puzzle = puzzle();
    let inst = puzzle.encode_with(&mut rng(61), "6174", None).unwrap();

    let text = inst.to_string();
    let parsed: Instruction = text.parse().unwrap();

    assert_eq!(text.matches('.').count(), 2);
    assert_eq!(parsed, inst);
    assert_eq!(puzzle.decode(&parsed).unwrap(), "6174");
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    let puzzle = puzzle();
    let inst = puzzle.encode_with(&mut rng(62), "  8008\n", None).unwrap();

    assert_eq!(puzzle.decode(&inst).unwrap(), "8008");
}

#[test]
fn parallel_roundtrip() {
    let puzzle = puzzle();
    let workers = NonZeroUsize::new(4).unwrap();

    let inst = puzzle.encode_parallel("73105", None, workers).unwrap();

    assert_eq!(puzzle.decode(&inst).unwrap(), "73105");
}

// -------------------------------------------------------
// INSTRUCTION SHAPE
// -------------------------------------------------------

#[test]
fn generated_fields_use_their_alphabets() {
    let puzzle = puzzle();
    let inst = puzzle.encode_with(&mut rng(70), "4821", None).unwrap();

    assert!(inst.selector().bytes().all(|b| b.is_ascii_digit()));
    assert!(inst.selector().len() >= CHECKSUM_LEN + 4);
    assert!(inst.seed().bytes().all(|b| b.is_ascii_digit()));
    assert_eq!(inst.water().len(), 8);
}

#[test]
fn selector_prefix_is_the_plant_checksum() {
    let puzzle = puzzle();
    let inst = puzzle.encode_with(&mut rng(71), "555", None).unwrap();

    let plant = puzzle.plant(inst.seed(), inst.water());
    let tail = plant.len() - (CHECKSUM_LEN + 3 + 1);

    assert_eq!(&inst.selector()[..CHECKSUM_LEN], &plant.as_str()[tail..tail + CHECKSUM_LEN]);
    assert_eq!(plant.declared_pin_len(), Some(3));
}

#[test]
fn plant_is_deterministic_digits() {
    let puzzle = puzzle();

    let a = puzzle.plant("0123", "water");
    let b = puzzle.plant("0123", "water");
    let c = puzzle.plant("0124", "water");

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert!(a.digits().iter().all(u8::is_ascii_digit));
    assert!(a.len() <= 128);
}

#[test]
fn domain_secret_changes_the_plant() {
    let one = PinPuzzle::construct("soil-one", 8, false).unwrap();
    let two = PinPuzzle::construct("soil-two", 8, false).unwrap();

    assert_ne!(one.plant("1", "w"), two.plant("1", "w"));
}

// -------------------------------------------------------
// INPUT VALIDATION
// -------------------------------------------------------

#[test]
fn scenario_b_key_length_too_short() {
    assert!(matches!(
        PinPuzzle::construct("test-soil", 2, false),
        Err(PuzzleError::Configuration(_))
    ));
}

#[test]
fn key_length_bounds() {
    assert!(PinPuzzle::construct("s", 3, false).is_ok());
    assert!(PinPuzzle::construct("s", 16, true).is_ok());
    assert!(matches!(
        PinPuzzle::construct("s", 17, false),
        Err(PuzzleError::Configuration(_))
    ));
}

#[test]
fn invalid_pins_are_rejected() {
    let puzzle = puzzle();

    for pin in ["", "   ", "12a4", "123456789", "-123", "1.5", "١٢٣"] {
        assert!(
            matches!(puzzle.encode(pin, None), Err(PuzzleError::InvalidPin(_))),
            "pin {pin:?}"
        );
    }
}

#[test]
fn invalid_keys_are_rejected() {
    let puzzle = puzzle();

    for key in ["", "has.dot"] {
        assert!(matches!(
            puzzle.encode_with(&mut rng(80), "1234", Some(key)),
            Err(PuzzleError::InvalidKey(_))
        ));
    }
}

// -------------------------------------------------------
// ATTEMPT BOUND
// -------------------------------------------------------

#[test]
fn exhaustion_is_reported() {
    let config = PuzzleConfig::new("test-soil", 8, false)
        .unwrap()
        .with_max_attempts(3)
        .unwrap();
    let puzzle = PinPuzzle::new(config);

    assert!(matches!(
        puzzle.encode_with(&mut rng(90), "98765432", None),
        Err(PuzzleError::EncodingExhausted { attempts: 3 })
    ));
}

#[test]
fn parallel_exhaustion_is_reported() {
    let config = PuzzleConfig::new("test-soil", 8, false)
        .unwrap()
        .with_max_attempts(2)
        .unwrap();
    let puzzle = PinPuzzle::new(config);
    let workers = NonZeroUsize::new(3).unwrap();

    assert!(matches!(
        puzzle.encode_parallel("98765432", None, workers),
        Err(PuzzleError::EncodingExhausted { attempts: 2 })
    ));
}

// -------------------------------------------------------
// DECODE FAILURES
// -------------------------------------------------------

#[test]
fn tampered_checksum_is_detected() {
    let puzzle = puzzle();
    let inst = puzzle.encode_with(&mut rng(100), "4821", None).unwrap();

    for i in 0..CHECKSUM_LEN {
        let mut selector = inst.selector().as_bytes().to_vec();
        selector[i] = b'0' + (selector[i] - b'0' + 1) % 10;
        let tampered = with_selector(&inst, std::str::from_utf8(&selector).unwrap());

        assert!(
            matches!(puzzle.decode(&tampered), Err(PuzzleError::ChecksumMismatch)),
            "digit {i}"
        );
    }
}

#[test]
fn short_selector_fails_checksum() {
    let puzzle = puzzle();
    let inst = puzzle.encode_with(&mut rng(101), "4821", None).unwrap();

    let tampered = with_selector(&inst, &inst.selector()[..5]);

    assert!(matches!(puzzle.decode(&tampered), Err(PuzzleError::ChecksumMismatch)));
}

#[test]
fn scenario_c_altered_water_never_yields_the_pin() {
    let puzzle = puzzle();

    for tag in 0..8u8 {
        let inst = puzzle.encode_with(&mut rng(110 + tag), "4821", None).unwrap();
        let altered = Instruction::from_parts(
            inst.selector(),
            inst.seed(),
            format!("{}X", inst.water()),
        )
        .unwrap();

        match puzzle.decode(&altered) {
            Ok(pin) => assert_ne!(pin, "4821"),
            Err(_) => {}
        }
    }
}

#[test]
fn truncated_position_run_is_malformed() {
    let puzzle = puzzle();
    let inst = puzzle.encode_with(&mut rng(120), "4821", None).unwrap();

    let selector = inst.selector();
    let tampered = with_selector(&inst, &selector[..selector.len() - 1]);

    assert!(matches!(
        puzzle.decode(&tampered),
        Err(PuzzleError::MalformedSelector(SelectorDefect::Truncated))
    ));
}

#[test]
fn extra_position_digits_are_malformed() {
    let puzzle = puzzle();
    let inst = puzzle.encode_with(&mut rng(121), "4821", None).unwrap();

    let tampered = with_selector(&inst, &format!("{}7", inst.selector()));

    assert!(matches!(
        puzzle.decode(&tampered),
        Err(PuzzleError::MalformedSelector(SelectorDefect::TrailingDigits))
    ));
}

#[test]
fn non_digit_position_run_is_malformed() {
    let puzzle = puzzle();
    let inst = puzzle.encode_with(&mut rng(122), "4821", None).unwrap();

    let tampered = with_selector(&inst, &format!("{}é", &inst.selector()[..CHECKSUM_LEN]));

    assert!(matches!(
        puzzle.decode(&tampered),
        Err(PuzzleError::MalformedSelector(SelectorDefect::NonDigit))
    ));
}

#[test]
fn plant_declaring_no_pin_is_malformed() {
    let puzzle = puzzle();

    // Find a seed whose plant ends in 0 or 9
    let seed = (0..1000)
        .map(|n| n.to_string())
        .find(|seed| puzzle.plant(seed, "w").declared_pin_len().is_none())
        .unwrap();
    let inst = Instruction::from_parts("12345678", seed, "w").unwrap();

    assert!(matches!(
        puzzle.decode(&inst),
        Err(PuzzleError::MalformedSelector(SelectorDefect::PinLength))
    ));
}

#[test]
fn position_past_plant_end_is_malformed() {
    let puzzle = puzzle();

    // A plant declaring one digit whose width digit is 0 reads a
    // three-digit position; 999 lies past any plant.
    let seed = (0..100_000)
        .map(|n| n.to_string())
        .find(|seed| {
            let plant = puzzle.plant(seed, "w");
            let digits = plant.digits();
            plant.declared_pin_len() == Some(1)
                && digits.len() >= CHECKSUM_LEN + 2
                && digits[digits.len() - 2] == b'0'
        })
        .unwrap();

    let plant = puzzle.plant(&seed, "w");
    let tail = plant.len() - (CHECKSUM_LEN + 2);
    let selector = format!("{}999", &plant.as_str()[tail..tail + CHECKSUM_LEN]);
    let inst = Instruction::from_parts(selector, seed, "w").unwrap();

    assert!(matches!(
        puzzle.decode(&inst),
        Err(PuzzleError::MalformedSelector(SelectorDefect::OutOfBounds))
    ));
}
