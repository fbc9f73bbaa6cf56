//! Error taxonomy shared by the engine modules.

use coop_shared::AppError;
use serde::Serialize;

use crate::ledger::LedgerError;
use crate::loan::LoanError;

/// Broad class of an engine error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Nil inputs, non-positive terms or amounts.
    Validation,
    /// A strict balance check failed.
    Imbalance,
    /// A reference or enum value the engine has no behavior for.
    Lookup,
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        let message = err.to_string();
        match err.kind() {
            ErrorKind::Validation => Self::Validation(message),
            ErrorKind::Imbalance => Self::BusinessRule(message),
            ErrorKind::Lookup => Self::NotFound(message),
        }
    }
}

impl From<LoanError> for AppError {
    fn from(err: LoanError) -> Self {
        let message = err.to_string();
        match err.kind() {
            ErrorKind::Validation | ErrorKind::Imbalance => Self::Validation(message),
            ErrorKind::Lookup => Self::NotFound(message),
        }
    }
}
