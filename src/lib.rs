pub mod achievements;
pub mod consistency;
pub mod export;
pub mod matches;
pub mod morale;
pub mod persist;
pub mod records;
pub mod sample_log;
