pub mod cli;
pub mod resolve;
