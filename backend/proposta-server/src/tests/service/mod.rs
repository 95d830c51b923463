mod proposal_service;
