use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the six clickable regions of the mannequin.
///
/// The set is closed: every scene holds exactly one primitive per variant,
/// and picking never produces a label outside it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
pub enum BodyPart {
    /// Sphere on top of the torso.
    Head,
    /// Central body.
    Torso,
    /// Arm on the negative-X side.
    #[serde(rename = "Left Arm")]
    LeftArm,
    /// Arm on the positive-X side.
    #[serde(rename = "Right Arm")]
    RightArm,
    /// Leg on the negative-X side.
    #[serde(rename = "Left Leg")]
    LeftLeg,
    /// Leg on the positive-X side.
    #[serde(rename = "Right Leg")]
    RightLeg,
}

impl BodyPart {
    /// Number of body parts.
    pub const COUNT: usize = 6;

    /// All parts in scene order. Picking ties resolve to the earlier entry.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Head,
        Self::Torso,
        Self::LeftArm,
        Self::RightArm,
        Self::LeftLeg,
        Self::RightLeg,
    ];

    /// Human-readable label forwarded to the host application.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Head => "Head",
            Self::Torso => "Torso",
            Self::LeftArm => "Left Arm",
            Self::RightArm => "Right Arm",
            Self::LeftLeg => "Left Leg",
            Self::RightLeg => "Right Leg",
        }
    }

    /// Position of this part in [`BodyPart::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The mirror-image counterpart (left ↔ right). Head and torso map to
    /// themselves.
    #[must_use]
    pub const fn mirror(self) -> Self {
        match self {
            Self::LeftArm => Self::RightArm,
            Self::RightArm => Self::LeftArm,
            Self::LeftLeg => Self::RightLeg,
            Self::RightLeg => Self::LeftLeg,
            other => other,
        }
    }
}

impl fmt::Display for BodyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a string is not one of the six body-part labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBodyPartError(String);

impl fmt::Display for ParseBodyPartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown body part: {:?}", self.0)
    }
}

impl std::error::Error for ParseBodyPartError {}

impl FromStr for BodyPart {
    type Err = ParseBodyPartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|part| part.label() == s)
            .ok_or_else(|| ParseBodyPartError(s.to_owned()))
    }
}
