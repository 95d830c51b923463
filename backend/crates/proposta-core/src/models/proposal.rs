//! Proposal entity - the cadastral record managed by the service.

use crate::{NewProposal, ProposalStatus};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored proposal.
///
/// `funcionario_id` references an employee owned by the remote employee
/// service. It is never resolved or checked locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Proposal {
    pub id: i64,
    pub titulo: String,
    pub descricao: Option<String>,
    /// Proposed amount
    pub valor: Option<f64>,
    pub funcionario_id: Option<i64>,
    pub status: ProposalStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Proposal {
    /// Build the stored representation of a new proposal once the store has
    /// assigned its id.
    pub fn from_new(id: i64, new: &NewProposal, now: DateTime<Utc>) -> Self {
        Self {
            id,
            titulo: new.titulo.clone(),
            descricao: new.descricao.clone(),
            valor: new.valor,
            funcionario_id: new.funcionario_id,
            status: new.status,
            created_at: now,
            updated_at: now,
        }
    }
}
