//! Member role - the display tier a member belongs to

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Display tier of a member
///
/// Stored as free text. `"Founder"` and `"Leader"` are recognized exactly;
/// every other stored value, including a missing one, is a regular member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MemberRole {
    Founder,
    Leader,
    #[default]
    Member,
}

impl MemberRole {
    pub const FOUNDER: &'static str = "Founder";
    pub const LEADER: &'static str = "Leader";
    pub const MEMBER: &'static str = "Member";

    /// Map a stored role value onto a tier
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some(Self::FOUNDER) => Self::Founder,
            Some(Self::LEADER) => Self::Leader,
            _ => Self::Member,
        }
    }

    /// Value written to the store
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Founder => Self::FOUNDER,
            Self::Leader => Self::LEADER,
            Self::Member => Self::MEMBER,
        }
    }

    /// Founders and leaders are shown in their own sections
    #[inline]
    pub fn is_featured(&self) -> bool {
        !matches!(self, Self::Member)
    }
}

impl fmt::Display for MemberRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for MemberRole {
    fn from(value: &str) -> Self {
        Self::from_stored(Some(value))
    }
}

impl Serialize for MemberRole {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MemberRole {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(Self::from_stored(value.as_deref()))
    }
}
