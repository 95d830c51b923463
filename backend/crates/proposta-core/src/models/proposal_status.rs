use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Proposal status.
///
/// A plain attribute of the proposal: any value can be assigned on update,
/// there are no enforced transitions between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProposalStatus {
    /// Registered and awaiting a decision
    #[default]
    Pendente,
    /// Accepted
    Aprovada,
    /// Declined
    Recusada,
}

impl ProposalStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pendente => "pendente",
            Self::Aprovada => "aprovada",
            Self::Recusada => "recusada",
        }
    }
}

impl FromStr for ProposalStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "pendente" => Ok(Self::Pendente),
            "aprovada" => Ok(Self::Aprovada),
            "recusada" => Ok(Self::Recusada),
            _ => Err(CoreError::InvalidProposalStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for ProposalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
