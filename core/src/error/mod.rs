#[allow(clippy::module_inception)]
pub mod error;
pub mod resolve;

pub use error::CliError;
pub use resolve::ResolveError;
