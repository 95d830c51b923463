use serde::{Deserialize, Serialize};

/// Request body for registering a proposal.
///
/// Also the response body of a successful create: the submitted payload is
/// echoed back as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposalCreateRequest {
    /// Explicit id; assigned by the store when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Title (required)
    pub titulo: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valor: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub funcionario_id: Option<i64>,

    /// "pendente" (default), "aprovada" or "recusada"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}
