pub mod create_proposal_request;
pub mod proposal_dto;
pub mod proposals;
pub mod update_proposal_request;
