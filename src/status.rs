//! Normalização de status de contratos entre armazenamento e interface.
//!
//! A camada de armazenamento aceita apenas três valores de status
//! ([`PersistedStatus`]), enquanto a interface trabalha com um vocabulário
//! mais rico ([`DisplayStatus`]). Este módulo faz a ponte entre os dois:
//! toda escrita passa por [`to_persisted_status`] e toda leitura por
//! [`to_display_status`]. Nenhuma função aqui entra em pânico — entradas
//! desconhecidas caem em um default seguro em vez de falhar na fronteira
//! com a constraint do banco.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The restricted status vocabulary the storage check-constraint accepts.
///
/// Any value written to storage must be one of these three members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PersistedStatus {
    Signed,
    Pending,
    Canceled,
}

impl PersistedStatus {
    /// Canonical string form, as used throughout the codebase and tests.
    pub fn as_str(&self) -> &'static str {
        match self {
            PersistedStatus::Signed => "Signed",
            PersistedStatus::Pending => "Pending",
            PersistedStatus::Canceled => "Canceled",
        }
    }

    /// Label stored in the database column ("Assinado", "Pendente",
    /// "Cancelado") — the constraint vocabulary predates the English names.
    pub fn storage_label(&self) -> &'static str {
        match self {
            PersistedStatus::Signed => "Assinado",
            PersistedStatus::Pending => "Pendente",
            PersistedStatus::Canceled => "Cancelado",
        }
    }
}

impl fmt::Display for PersistedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The richer status vocabulary the user interface renders.
///
/// `Active` and `Paused` are legacy labels still present in older rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayStatus {
    Draft,
    Sent,
    Signed,
    Active,
    Paused,
    Canceled,
    Pending,
}

impl DisplayStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayStatus::Draft => "Draft",
            DisplayStatus::Sent => "Sent",
            DisplayStatus::Signed => "Signed",
            DisplayStatus::Active => "Active",
            DisplayStatus::Paused => "Paused",
            DisplayStatus::Canceled => "Canceled",
            DisplayStatus::Pending => "Pending",
        }
    }
}

impl fmt::Display for DisplayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Normalizes any status string to a value the storage constraint accepts.
///
/// Matching is case-sensitive and exact on the known labels; everything
/// else (empty, wrong case, legacy garbage) maps to `Pending`. This is a
/// total function with a safe default — it never fails and never returns a
/// value outside the persisted set.
pub fn to_persisted_status(input: &str) -> PersistedStatus {
    match input {
        "Signed" | "Active" => PersistedStatus::Signed,
        "Canceled" => PersistedStatus::Canceled,
        "Draft" | "Sent" | "Paused" | "Pending" => PersistedStatus::Pending,
        _ => PersistedStatus::Pending,
    }
}

/// Maps a stored (or arbitrary) status string to the label the UI renders.
///
/// Persisted values translate to their display counterparts ("Pending"
/// renders as "Draft"); already-UI labels pass through unchanged. Unknown
/// input is a silently tolerated default (`Draft`), not an error — rows
/// with a bad status still render instead of breaking a listing.
pub fn to_display_status(input: &str) -> DisplayStatus {
    match input {
        "Signed" => DisplayStatus::Signed,
        "Pending" => DisplayStatus::Draft,
        "Canceled" => DisplayStatus::Canceled,
        "Draft" => DisplayStatus::Draft,
        "Sent" => DisplayStatus::Sent,
        "Active" => DisplayStatus::Active,
        "Paused" => DisplayStatus::Paused,
        _ => DisplayStatus::Draft,
    }
}

/// True when the status normalizes to `Signed`.
///
/// Activeness is computed through [`to_persisted_status`], so the legacy
/// "Active" label also counts as active.
pub fn is_active(input: &str) -> bool {
    to_persisted_status(input) == PersistedStatus::Signed
}

/// Strict membership check against the three persisted literals.
///
/// Unlike [`to_persisted_status`] this does not normalize — it asserts a
/// value is already in canonical form, as a defense-in-depth check right
/// before a write.
pub fn is_valid_persisted_status(input: &str) -> bool {
    matches!(input, "Signed" | "Pending" | "Canceled")
}
