pub mod employee;
pub mod employee_registration;
pub mod new_proposal;
pub mod proposal;
pub mod proposal_status;
