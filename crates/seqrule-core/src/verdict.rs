//! The four-valued verdict lattice.
//!
//! A verdict packs two independent boolean facts about an in-progress match:
//! whether the evaluation may consume another token (CONTINUE) and whether
//! the tokens seen so far form an acceptable sequence right now (MATCHING).
//! Verdicts combine under bitwise meet and join, which is what the logical
//! combinators use to reduce their children's answers.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign};

const CONTINUE: u8 = 0b01;
const MATCHING: u8 = 0b10;

/// Outcome of initiating or stepping a constraint evaluation.
///
/// # Examples
///
/// ```
/// use seqrule_core::Verdict;
///
/// assert!(Verdict::Satisfied.accepts());
/// assert!(Verdict::Satisfied.may_continue());
///
/// // Matching means "acceptable now, but no further tokens allowed".
/// assert!(Verdict::Matching.accepts());
/// assert!(!Verdict::Matching.may_continue());
///
/// // Meet and join act bitwise on the two flags.
/// assert_eq!(Verdict::Continue & Verdict::Matching, Verdict::Invalid);
/// assert_eq!(Verdict::Continue | Verdict::Matching, Verdict::Satisfied);
/// ```
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Verdict {
    /// Rejected; no further tokens can save this sequence.
    Invalid = 0b00,
    /// Not acceptable yet, but more tokens could make it so.
    Continue = 0b01,
    /// Acceptable right now; any further token invalidates the match.
    Matching = 0b10,
    /// Acceptable right now and open to more tokens.
    Satisfied = 0b11,
}

impl Verdict {
    /// Builds a verdict from its two flags.
    #[inline]
    pub const fn from_flags(may_continue: bool, accepts: bool) -> Self {
        match (may_continue, accepts) {
            (false, false) => Verdict::Invalid,
            (true, false) => Verdict::Continue,
            (false, true) => Verdict::Matching,
            (true, true) => Verdict::Satisfied,
        }
    }

    #[inline]
    const fn bits(self) -> u8 {
        self as u8
    }

    #[inline]
    const fn from_bits(bits: u8) -> Self {
        Verdict::from_flags(bits & CONTINUE != 0, bits & MATCHING != 0)
    }

    /// Whether another token may be fed to the evaluation.
    #[inline]
    pub const fn may_continue(self) -> bool {
        self.bits() & CONTINUE != 0
    }

    /// Whether the sequence consumed so far is acceptable as a full match.
    #[inline]
    pub const fn accepts(self) -> bool {
        self.bits() & MATCHING != 0
    }

    /// Lattice meet: both flags must be set on both sides to survive.
    ///
    /// `Satisfied` is the identity; the operation is associative and
    /// commutative. Also available as the `&` operator.
    #[inline]
    pub const fn and(self, other: Verdict) -> Verdict {
        Verdict::from_bits(self.bits() & other.bits())
    }

    /// Lattice join: a flag set on either side survives.
    ///
    /// `Invalid` is the identity. Also available as the `|` operator.
    #[inline]
    pub const fn or(self, other: Verdict) -> Verdict {
        Verdict::from_bits(self.bits() | other.bits())
    }
}

impl BitAnd for Verdict {
    type Output = Verdict;

    #[inline]
    fn bitand(self, rhs: Verdict) -> Verdict {
        self.and(rhs)
    }
}

impl BitOr for Verdict {
    type Output = Verdict;

    #[inline]
    fn bitor(self, rhs: Verdict) -> Verdict {
        self.or(rhs)
    }
}

impl BitAndAssign for Verdict {
    #[inline]
    fn bitand_assign(&mut self, rhs: Verdict) {
        *self = self.and(rhs);
    }
}

impl BitOrAssign for Verdict {
    #[inline]
    fn bitor_assign(&mut self, rhs: Verdict) {
        *self = self.or(rhs);
    }
}

impl fmt::Debug for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Verdict::Invalid => "Invalid",
            Verdict::Continue => "Continue",
            Verdict::Matching => "Matching",
            Verdict::Satisfied => "Satisfied",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Verdict; 4] = [
        Verdict::Invalid,
        Verdict::Continue,
        Verdict::Matching,
        Verdict::Satisfied,
    ];

    #[test]
    fn test_flags() {
        assert!(!Verdict::Invalid.may_continue());
        assert!(!Verdict::Invalid.accepts());
        assert!(Verdict::Continue.may_continue());
        assert!(!Verdict::Continue.accepts());
        assert!(!Verdict::Matching.may_continue());
        assert!(Verdict::Matching.accepts());
        assert!(Verdict::Satisfied.may_continue());
        assert!(Verdict::Satisfied.accepts());
    }

    #[test]
    fn test_from_flags_round_trip() {
        for v in ALL {
            assert_eq!(Verdict::from_flags(v.may_continue(), v.accepts()), v);
        }
    }

    #[test]
    fn test_and_identity_is_satisfied() {
        for v in ALL {
            assert_eq!(v & Verdict::Satisfied, v);
            assert_eq!(Verdict::Satisfied & v, v);
        }
    }

    #[test]
    fn test_or_identity_is_invalid() {
        for v in ALL {
            assert_eq!(v | Verdict::Invalid, v);
            assert_eq!(Verdict::Invalid | v, v);
        }
    }

    #[test]
    fn test_mixed_combinations() {
        assert_eq!(Verdict::Continue & Verdict::Matching, Verdict::Invalid);
        assert_eq!(Verdict::Continue | Verdict::Matching, Verdict::Satisfied);
        assert_eq!(Verdict::Satisfied & Verdict::Matching, Verdict::Matching);
        assert_eq!(Verdict::Satisfied & Verdict::Continue, Verdict::Continue);
    }

    #[test]
    fn test_assign_operators() {
        let mut v = Verdict::Satisfied;
        v &= Verdict::Continue;
        assert_eq!(v, Verdict::Continue);
        v |= Verdict::Matching;
        assert_eq!(v, Verdict::Satisfied);
    }
}
