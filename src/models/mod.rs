pub mod duty_change;
pub mod duty_status;
pub mod hos_summary;
pub mod log_input;
pub mod log_result;
pub mod stored_log;
