pub mod proposal_repository;
