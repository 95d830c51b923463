use crate::{CoreError, ProposalStatus};

use std::str::FromStr;

#[test]
fn test_proposal_status_as_str() {
    assert_eq!(ProposalStatus::Pendente.as_str(), "pendente");
    assert_eq!(ProposalStatus::Aprovada.as_str(), "aprovada");
    assert_eq!(ProposalStatus::Recusada.as_str(), "recusada");
}

#[test]
fn test_proposal_status_from_str() {
    assert_eq!(
        ProposalStatus::from_str("pendente").unwrap(),
        ProposalStatus::Pendente
    );
    assert_eq!(
        ProposalStatus::from_str("aprovada").unwrap(),
        ProposalStatus::Aprovada
    );
    assert_eq!(
        ProposalStatus::from_str("recusada").unwrap(),
        ProposalStatus::Recusada
    );
}

#[test]
fn test_proposal_status_from_str_rejects_unknown_value() {
    match ProposalStatus::from_str("Aprovada") {
        Err(CoreError::InvalidProposalStatus { value, .. }) => assert_eq!(value, "Aprovada"),
        other => panic!("Expected InvalidProposalStatus, got {:?}", other),
    }
}

#[test]
fn test_proposal_status_default() {
    assert_eq!(ProposalStatus::default(), ProposalStatus::Pendente);
}

#[test]
fn test_proposal_status_serializes_as_snake_case() {
    let json = serde_json::to_string(&ProposalStatus::Recusada).unwrap();
    assert_eq!(json, "\"recusada\"");
}
