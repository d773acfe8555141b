pub mod attendance;
pub mod backup;
pub mod config;
pub mod stats;
pub mod students;
