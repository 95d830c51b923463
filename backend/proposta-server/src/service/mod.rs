pub mod error;
pub mod proposal_service;
