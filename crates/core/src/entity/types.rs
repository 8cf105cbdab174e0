//! Financial entities identified by Austrian bank code.

use serde::{Deserialize, Serialize};

/// Issuing entity of an Austrian account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Entity {
    /// BAWAG, bank code `16000`.
    Bawag,
    /// PSK, bank code `60000`.
    Psk,
    /// Sparda, bank code `10000`.
    Sparda,
    /// Any other bank, or a non-Austrian account.
    External,
}

/// Entity to bank code table, in lookup order.
const ENTITY_TABLE: [(Entity, &str); 4] = [
    (Entity::Bawag, "16000"),
    (Entity::Psk, "60000"),
    (Entity::Sparda, "10000"),
    (Entity::External, ""),
];

impl Entity {
    /// All entities in lookup order.
    pub const ALL: [Self; 4] = [Self::Bawag, Self::Psk, Self::Sparda, Self::External];

    /// Looks up the entity for `bank_code`.
    ///
    /// Unknown and absent codes map to [`Entity::External`].
    #[must_use]
    pub fn from_bank_code(bank_code: Option<&str>) -> Self {
        let Some(code) = bank_code else {
            return Self::External;
        };
        ENTITY_TABLE
            .iter()
            .find(|(_, known)| known.eq_ignore_ascii_case(code))
            .map_or(Self::External, |(entity, _)| *entity)
    }

    /// Bank code of this entity; empty for [`Entity::External`].
    #[must_use]
    pub fn bank_code(&self) -> &'static str {
        ENTITY_TABLE
            .iter()
            .find(|(entity, _)| entity == self)
            .map_or("", |(_, code)| *code)
    }

    /// Upper-case name used in task output.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bawag => "BAWAG",
            Self::Psk => "PSK",
            Self::Sparda => "SPARDA",
            Self::External => "EXTERNAL",
        }
    }

    /// Returns `true` for the catch-all entity.
    #[must_use]
    pub const fn is_external(&self) -> bool {
        matches!(self, Self::External)
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Entity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|entity| entity.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown entity: {s}"))
    }
}
