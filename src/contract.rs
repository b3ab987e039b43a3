//! Contratos de clientes e métricas de pipeline.
//!
//! O campo de status guarda a string vinda do armazenamento (que pode
//! conter rótulos legados). Toda escrita normaliza via
//! [`to_persisted_status`] e confere [`is_valid_persisted_status`] como
//! defesa em profundidade; toda leitura renderiza via
//! [`to_display_status`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::status::{
    DisplayStatus, PersistedStatus, is_active, is_valid_persisted_status, to_display_status,
    to_persisted_status,
};

/// A client contract as read from storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contract {
    pub id: Uuid,
    pub client_name: String,
    /// Contract value in cents.
    pub value_cents: i64,
    /// Raw status string as stored; may carry legacy labels.
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Contract {
    /// Creates a contract with a normalized status.
    pub fn new(client_name: String, value_cents: i64, status: &str) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            client_name,
            value_cents,
            status: to_persisted_status(status).as_str().to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Status normalized to the storage vocabulary.
    pub fn persisted_status(&self) -> PersistedStatus {
        to_persisted_status(&self.status)
    }

    /// Status label the UI renders.
    pub fn display_status(&self) -> DisplayStatus {
        to_display_status(&self.status)
    }

    /// Sets the status, normalizing whatever the caller passes.
    pub fn set_status(&mut self, input: &str) {
        self.status = to_persisted_status(input).as_str().to_string();
        self.updated_at = Utc::now();
    }

    /// Status string guaranteed to pass the storage check-constraint.
    ///
    /// Normalization already makes invalid values unrepresentable; the
    /// strict membership check runs anyway right before the write.
    pub fn status_for_write(&self) -> String {
        let canonical = self.persisted_status().as_str();
        debug_assert!(is_valid_persisted_status(canonical));
        canonical.to_string()
    }

    pub fn is_active(&self) -> bool {
        is_active(&self.status)
    }
}

/// Aggregated pipeline numbers over a set of contracts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineSummary {
    pub total: usize,
    pub signed: usize,
    pub pending: usize,
    pub canceled: usize,
    /// Sum of the values of signed contracts, in cents.
    pub signed_value_cents: i64,
}

impl PipelineSummary {
    pub fn from_contracts(contracts: &[Contract]) -> Self {
        let mut summary = Self {
            total: contracts.len(),
            signed: 0,
            pending: 0,
            canceled: 0,
            signed_value_cents: 0,
        };

        for contract in contracts {
            match contract.persisted_status() {
                PersistedStatus::Signed => {
                    summary.signed += 1;
                    summary.signed_value_cents += contract.value_cents;
                }
                PersistedStatus::Pending => summary.pending += 1,
                PersistedStatus::Canceled => summary.canceled += 1,
            }
        }

        summary
    }
}
