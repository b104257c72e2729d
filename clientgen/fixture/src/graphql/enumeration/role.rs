// This code was automatically generated by clientgen. Do not edit manually.

use serde::{Deserialize, Serialize};
/// Generated from the `Role` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Full access.
    #[serde(rename = "ADMIN")]
    Admin,
    #[serde(rename = "MEMBER")]
    Member,
    #[deprecated(note = "No longer issued.")]
    #[serde(rename = "GUEST")]
    Guest,
}
impl Role {
    /// Every value, in schema order.
    pub const ALL: &'static [Self] = &[Self::Admin, Self::Member, Self::Guest];
    /// The value as it appears on the wire.
    pub fn as_wire_str(&self) -> &'static str {
        match *self {
            Self::Admin => "ADMIN",
            Self::Member => "MEMBER",
            Self::Guest => "GUEST",
        }
    }
    /// Parses a wire value, returning `None` for unknown values.
    pub fn from_wire_str(value: &str) -> Option<Self> {
        match value {
            "ADMIN" => Some(Self::Admin),
            "MEMBER" => Some(Self::Member),
            "GUEST" => Some(Self::Guest),
            _ => None,
        }
    }
}
impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_wire_str())
    }
}
impl std::str::FromStr for Role {
    type Err = String;
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_wire_str(value)
            .ok_or_else(|| format!("unknown {} value '{}'", "Role", value))
    }
}
