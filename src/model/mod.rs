pub mod collection;
pub mod combo;
pub mod common;
pub mod part;
pub mod stats;
