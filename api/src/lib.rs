pub mod application;
pub mod args;
