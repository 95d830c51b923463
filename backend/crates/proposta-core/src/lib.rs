pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::employee::Employee;
pub use models::employee_registration::EmployeeRegistration;
pub use models::new_proposal::NewProposal;
pub use models::proposal::Proposal;
pub use models::proposal_status::ProposalStatus;
