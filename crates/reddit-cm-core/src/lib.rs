pub mod config;
pub mod error;
pub mod result;

pub use config::{ConfigFile, CredentialOverrides, CredentialResolver, Credentials};
pub use error::{CmError, PlatformError};
pub use result::{CmResult, PlatformResult};
