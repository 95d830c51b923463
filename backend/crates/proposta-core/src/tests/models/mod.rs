mod employee_registration;
mod proposal_status;
