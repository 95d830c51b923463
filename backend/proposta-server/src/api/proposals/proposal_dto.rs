use proposta_core::{Proposal, ProposalStatus};

use serde::{Deserialize, Serialize};

/// Proposal DTO for JSON serialization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposalDto {
    pub id: i64,
    pub titulo: String,
    pub descricao: Option<String>,
    pub valor: Option<f64>,
    pub funcionario_id: Option<i64>,
    pub status: ProposalStatus,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Proposal> for ProposalDto {
    fn from(p: Proposal) -> Self {
        Self {
            id: p.id,
            titulo: p.titulo,
            descricao: p.descricao,
            valor: p.valor,
            funcionario_id: p.funcionario_id,
            status: p.status,
            created_at: p.created_at.timestamp(),
            updated_at: p.updated_at.timestamp(),
        }
    }
}
