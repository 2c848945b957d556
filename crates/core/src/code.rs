//! Code sequences and the peg alphabet.
//!
//! A [`Code`] is an ordered sequence of [`CODE_LENGTH`] pegs drawn from the
//! alphabet `COLOR_MIN..=COLOR_MAX`. The value 0 is reserved as the
//! "consumed" sentinel used by the hint engine and must never appear in a
//! constructed code, which is why construction validates every element.

/// Number of pegs in a solution or guess.
pub const CODE_LENGTH: usize = 4;

/// Smallest valid peg color.
pub const COLOR_MIN: u8 = 1;

/// Largest valid peg color (classic Mastermind: six colors).
pub const COLOR_MAX: u8 = 6;

/// Errors raised when constructing a [`Code`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CodeError {
    /// A peg lies outside the valid alphabet.
    #[error("peg {value} at position {position} is outside the alphabet {COLOR_MIN}..={COLOR_MAX}")]
    InvalidColor { position: usize, value: u8 },
}

/// An ordered, validated sequence of pegs.
///
/// Used for both solutions and guesses; the two are distinguished only by
/// which commitment they are bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Code([u8; CODE_LENGTH]);

impl Code {
    /// Creates a code, rejecting any peg outside `COLOR_MIN..=COLOR_MAX`.
    pub fn new(pegs: [u8; CODE_LENGTH]) -> Result<Self, CodeError> {
        for (position, &value) in pegs.iter().enumerate() {
            if !(COLOR_MIN..=COLOR_MAX).contains(&value) {
                return Err(CodeError::InvalidColor { position, value });
            }
        }
        Ok(Self(pegs))
    }

    /// Returns the pegs in order.
    pub const fn pegs(&self) -> &[u8; CODE_LENGTH] {
        &self.0
    }
}

impl TryFrom<[u8; CODE_LENGTH]> for Code {
    type Error = CodeError;

    fn try_from(pegs: [u8; CODE_LENGTH]) -> Result<Self, Self::Error> {
        Self::new(pegs)
    }
}

impl core::fmt::Display for Code {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "[{a} {b} {c} {d}]")
    }
}
