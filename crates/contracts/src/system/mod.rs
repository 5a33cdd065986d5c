pub mod approvals;
pub mod users;
