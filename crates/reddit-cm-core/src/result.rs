use crate::error::{CmError, PlatformError};

pub type CmResult<T> = Result<T, CmError>;

pub type PlatformResult<T> = Result<T, PlatformError>;
