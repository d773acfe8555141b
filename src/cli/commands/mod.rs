pub mod add;
pub mod backup;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod del;
pub mod export;
pub mod init;
pub mod mark;
pub mod report;
pub mod show;
pub mod students;
