//! Task workers built on the IBAN engine.

pub mod check_iban;

pub use check_iban::CheckIbanWorker;
