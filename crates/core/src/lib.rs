//! Core logic for IbanCheck.
//!
//! This crate contains pure validation logic with ZERO I/O dependencies.
//!
//! # Modules
//!
//! - `iban` - IBAN grammar, mod-97 checksum, and Austrian field extraction
//! - `entity` - Bank code to financial entity resolution
//! - `worker` - Task execution on top of the resolver

pub mod entity;
pub mod iban;
pub mod worker;

pub use entity::{Entity, EntityResolver, resolve_entity, resolve_entity_name};
pub use iban::{
    AustrianIban, Iban, IbanError, extract_austrian_account_number, extract_austrian_bank_code,
    is_austrian_iban, is_valid_austrian_iban, is_valid_iban, to_electronic_format,
};
pub use worker::CheckIbanWorker;
