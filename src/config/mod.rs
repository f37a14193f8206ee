#[cfg(feature = "cli")]
pub mod cli;
pub mod deployment;

#[cfg(feature = "cli")]
pub use cli::{CliArgs, Command};
pub use deployment::DeploymentConfig;
