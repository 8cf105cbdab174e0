//! Resolves an IBAN to the entity that issued it.

use super::types::Entity;
use crate::iban::{self, Iban, IbanError};

/// Entity resolver.
///
/// Pure lookups; holds no state.
pub struct EntityResolver;

impl EntityResolver {
    /// Resolves `raw` to an entity, reporting why resolution failed.
    ///
    /// A checksum-valid IBAN always resolves: Austrian IBANs by bank code,
    /// every other country to [`Entity::External`].
    ///
    /// # Errors
    ///
    /// Returns the [`IbanError`] that made `raw` invalid.
    pub fn try_resolve(raw: Option<&str>) -> Result<Entity, IbanError> {
        let iban = Iban::parse_opt(raw)?;
        let bank_code = iban::extract_austrian_bank_code(iban.as_str());
        Ok(Entity::from_bank_code(bank_code.as_deref()))
    }

    /// Resolves `raw` to an entity; `None` when `raw` is not a valid IBAN.
    #[must_use]
    pub fn resolve(raw: Option<&str>) -> Option<Entity> {
        Self::try_resolve(raw).ok()
    }
}

/// Resolves `raw` to an entity; `None` when `raw` is not a valid IBAN.
///
/// `None` means "unresolvable" and is distinct from [`Entity::External`].
pub fn resolve_entity<'a>(raw: impl Into<Option<&'a str>>) -> Option<Entity> {
    EntityResolver::resolve(raw.into())
}

/// Like [`resolve_entity`] but returns the entity name.
pub fn resolve_entity_name<'a>(raw: impl Into<Option<&'a str>>) -> Option<&'static str> {
    resolve_entity(raw).map(|entity| entity.name())
}
