pub mod clitests;
pub mod paths;
