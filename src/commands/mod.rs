pub mod catalog;
pub mod combo;
pub mod init;
pub mod part;
pub mod stats;
