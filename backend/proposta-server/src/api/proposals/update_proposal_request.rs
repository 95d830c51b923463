use serde::Deserialize;

/// Request body for updating a proposal. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProposalUpdateRequest {
    /// When present, must match the id in the path
    #[serde(default)]
    pub id: Option<i64>,

    #[serde(default)]
    pub titulo: Option<String>,

    #[serde(default)]
    pub descricao: Option<String>,

    #[serde(default)]
    pub valor: Option<f64>,

    #[serde(default)]
    pub funcionario_id: Option<i64>,

    /// "pendente", "aprovada" or "recusada"
    #[serde(default)]
    pub status: Option<String>,
}
