//! Pitch identity on the cyclic 26-letter scale.
//!
//! Each letter `A`..=`Z` sits at its 0-based alphabet position. A sharp
//! raises it by half a step, a flat lowers it by half a step, and the result
//! wraps into `[0, 26)`, so `Ab` and `Z#` share a pitch.
//!
//! Pitch indices are stored as whole half-steps, so comparisons and hashing
//! are exact.

use serde::{Deserialize, Serialize};

/// Number of letters on the scale.
pub const ALPHABET_LEN: u8 = 26;

/// Number of half-steps on the scale.
const HALF_STEPS: i16 = ALPHABET_LEN as i16 * 2;

/// A single note alteration.
///
/// The derived ordering matches the spelling order used for sorting
/// (`""` < `"#"` < `"b"`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Alteration {
    /// No alteration.
    #[default]
    Natural,
    /// `#`, half a step up.
    Sharp,
    /// `b`, half a step down.
    Flat,
}

impl Alteration {
    /// Returns the alteration as it is spelled after a letter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Alteration::Natural => "",
            Alteration::Sharp => "#",
            Alteration::Flat => "b",
        }
    }

    /// Parses a spelled alteration (`""`, `"#"`, `"b"`).
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "" => Some(Alteration::Natural),
            "#" => Some(Alteration::Sharp),
            "b" => Some(Alteration::Flat),
            _ => None,
        }
    }

    /// Offset in half-steps.
    pub fn half_steps(&self) -> i16 {
        match self {
            Alteration::Natural => 0,
            Alteration::Sharp => 1,
            Alteration::Flat => -1,
        }
    }

    /// Returns true if `other`'s spelling is contained in this spelling.
    ///
    /// The empty spelling is contained in every alteration, so the relation
    /// is not symmetric: `Sharp.contains(Natural)` holds while
    /// `Natural.contains(Sharp)` does not.
    pub fn contains(&self, other: Alteration) -> bool {
        self.as_str().contains(other.as_str())
    }
}

impl std::fmt::Display for Alteration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A position on the cyclic scale, in `[0, 26)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PitchIndex {
    half_steps: u8,
}

impl PitchIndex {
    /// Computes the pitch index for a 0-based letter position.
    ///
    /// Positions past the alphabet wrap around.
    pub fn from_position(position: u8, alteration: Alteration) -> Self {
        let base = i16::from(position % ALPHABET_LEN) * 2;
        let half_steps = (base + alteration.half_steps()).rem_euclid(HALF_STEPS);
        Self {
            half_steps: half_steps as u8,
        }
    }

    /// The index as a real number (e.g., `Z#` is `25.5`).
    pub fn as_f64(&self) -> f64 {
        f64::from(self.half_steps) / 2.0
    }

    /// The index counted in half-steps, in `[0, 52)`.
    pub fn half_steps(&self) -> u8 {
        self.half_steps
    }
}

impl std::fmt::Display for PitchIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_f64())
    }
}

/// Returns the 0-based alphabet position of an uppercase letter.
pub fn letter_position(letter: char) -> Option<u8> {
    if letter.is_ascii_uppercase() {
        Some(letter as u8 - b'A')
    } else {
        None
    }
}

/// Computes the pitch index of `letter` with `alteration`.
///
/// Returns `None` if `letter` is not in `A`..=`Z`.
///
/// # Examples
/// ```
/// use chordbook_theory::pitch::{pitch_index, Alteration};
///
/// let a_sharp = pitch_index('A', Alteration::Sharp).unwrap();
/// let b_flat = pitch_index('B', Alteration::Flat).unwrap();
/// assert_eq!(a_sharp, b_flat);
/// assert_eq!(pitch_index('A', Alteration::Flat).unwrap().as_f64(), 25.5);
/// ```
pub fn pitch_index(letter: char, alteration: Alteration) -> Option<PitchIndex> {
    letter_position(letter).map(|position| PitchIndex::from_position(position, alteration))
}
