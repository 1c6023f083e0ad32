//! Embedded Selector Mask.
//!
//! The last `pin_len + 1` digits of a plant form the mask. Each of the
//! first `pin_len` digits tells how many decimal digits the matching
//! position occupies in the selector; the final digit is the PIN length.
//! Encoding never writes a mask. It only accepts plants whose own digits
//! already describe the located positions.

use crate::error::{PuzzleError, SelectorDefect};

/// Decimal width of one packed position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Width {
    One,
    Two,
    Three,
}

impl Width {
    /// The width a mask digit declares: odd is one, non-zero even is two,
    /// zero is three.
    pub(crate) fn from_mask_digit(digit: u8) -> Width {
        match digit {
            0 => Width::Three,
            d if d % 2 == 0 => Width::Two,
            _ => Width::One,
        }
    }

    /// Width of `position` written in decimal, if it fits in three digits.
    pub(crate) fn of_position(position: usize) -> Option<Width> {
        match position {
            0..=9 => Some(Width::One),
            10..=99 => Some(Width::Two),
            100..=999 => Some(Width::Three),
            _ => None,
        }
    }

    pub(crate) fn digits(self) -> usize {
        match self {
            Width::One => 1,
            Width::Two => 2,
            Width::Three => 3,
        }
    }
}

/// Whether `mask` (ASCII digits) describes `positions` and ends with
/// their count.
pub(crate) fn accepts(mask: &[u8], positions: &[usize]) -> bool {
    let Some((&head, widths)) = mask.split_last() else {
        return false;
    };

    if widths.len() != positions.len() || (head - b'0') as usize != positions.len() {
        return false;
    }

    widths.iter().zip(positions).all(|(&digit, &position)| {
        Width::of_position(position) == Some(Width::from_mask_digit(digit - b'0'))
    })
}

/// Cuts the undelimited position `run` into one token per width digit.
///
/// `widths` is the mask without its length digit. The run must be exactly
/// as long as the declared widths add up to.
pub(crate) fn split_positions<'a>(widths: &[u8], run: &'a str) -> Result<Vec<&'a str>, PuzzleError> {
    if !run.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PuzzleError::MalformedSelector(SelectorDefect::NonDigit));
    }

    let mut rest = run;
    let mut tokens = Vec::with_capacity(widths.len());

    for &digit in widths {
        let take = Width::from_mask_digit(digit - b'0').digits();
        if rest.len() < take {
            return Err(PuzzleError::MalformedSelector(SelectorDefect::Truncated));
        }

        let (token, tail) = rest.split_at(take);
        tokens.push(token);
        rest = tail;
    }

    if !rest.is_empty() {
        return Err(PuzzleError::MalformedSelector(SelectorDefect::TrailingDigits));
    }

    Ok(tokens)
}
