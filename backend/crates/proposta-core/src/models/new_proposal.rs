use crate::ProposalStatus;

/// Validated data for a proposal that has not been stored yet.
///
/// `id` is `None` when the store should assign one.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProposal {
    pub id: Option<i64>,
    pub titulo: String,
    pub descricao: Option<String>,
    pub valor: Option<f64>,
    pub funcionario_id: Option<i64>,
    pub status: ProposalStatus,
}
