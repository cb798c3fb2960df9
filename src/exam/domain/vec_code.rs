//! Volunteer Examiner Coordinator identifiers.

use super::ParseVecCodeError;
use std::fmt;

/// A Volunteer Examiner Coordinator known to HamStudy.
///
/// Each variant maps to exactly one display label and one lowercase wire
/// code. The set is closed: codes outside it are data errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VecCode {
    /// Anchorage Amateur Radio Club.
    Anchorage,
    /// ARRL VEC.
    Arrl,
    /// Central America VEC.
    Cavec,
    /// Golden Empire Amateur Radio Society.
    Gears,
    /// Greater Los Angeles Amateur Radio Group.
    Glaarg,
    /// Jefferson Amateur Radio Club.
    Jefferson,
    /// Laurel Amateur Radio Club.
    Laurel,
    /// Milwaukee Radio Amateurs' Club.
    Mrac,
    /// MO-KAN VEC.
    MoKan,
    /// Sandarc VEC.
    Sandarc,
    /// Sunnyvale VEC.
    Sunnyvale,
    /// W4VEC.
    W4vec,
    /// W5YI VEC.
    W5yi,
    /// Western Carolina Amateur Radio Society.
    WestCarolina,
}

impl VecCode {
    /// Every known VEC, in display order.
    pub const ALL: [Self; 14] = [
        Self::Anchorage,
        Self::Arrl,
        Self::Cavec,
        Self::Gears,
        Self::Glaarg,
        Self::Jefferson,
        Self::Laurel,
        Self::Mrac,
        Self::MoKan,
        Self::Sandarc,
        Self::Sunnyvale,
        Self::W4vec,
        Self::W5yi,
        Self::WestCarolina,
    ];

    /// Returns the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Anchorage => "Anchorage ARC",
            Self::Arrl => "ARRL-VEC",
            Self::Cavec => "CAVEC",
            Self::Gears => "GEARS",
            Self::Glaarg => "GLAARG",
            Self::Jefferson => "Jefferson ARC",
            Self::Laurel => "Laurel ARC, Inc",
            Self::Mrac => "MRAC VEC, Inc",
            Self::MoKan => "MO-KAN VEC",
            Self::Sandarc => "Sandarc-VEC",
            Self::Sunnyvale => "Sunnyvale VEC",
            Self::W4vec => "W4VEC",
            Self::W5yi => "W5YI",
            Self::WestCarolina => "Western Carolina ARS VEC",
        }
    }

    /// Returns the lowercase code used by the HamStudy API.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Anchorage => "anchorage",
            Self::Arrl => "arrl",
            Self::Cavec => "cavec",
            Self::Gears => "golden",
            Self::Glaarg => "lagroup",
            Self::Jefferson => "jefferson",
            Self::Laurel => "laurel",
            Self::Mrac => "mrac",
            Self::MoKan => "mo-kan",
            Self::Sandarc => "sandarc",
            Self::Sunnyvale => "sunnyvale",
            Self::W4vec => "w4vec",
            Self::W5yi => "w5yi",
            Self::WestCarolina => "west-carolina",
        }
    }

    /// Looks up a VEC by its wire code.
    ///
    /// # Errors
    ///
    /// Returns [`ParseVecCodeError`] when the code is not in the enumeration.
    pub fn from_code(code: &str) -> Result<Self, ParseVecCodeError> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.code() == code)
            .ok_or_else(|| ParseVecCodeError(code.to_owned()))
    }

    /// Looks up a VEC by its display label.
    ///
    /// # Errors
    ///
    /// Returns [`ParseVecCodeError`] when no VEC carries the label.
    pub fn from_label(label: &str) -> Result<Self, ParseVecCodeError> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.label() == label)
            .ok_or_else(|| ParseVecCodeError(label.to_owned()))
    }
}

impl fmt::Display for VecCode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label())
    }
}

impl TryFrom<&str> for VecCode {
    type Error = ParseVecCodeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_code(value)
    }
}
