pub mod check_status;
