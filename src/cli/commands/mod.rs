pub mod clear;
pub mod config;
pub mod estimate;
pub mod export;
pub mod init;
pub mod range;
pub mod start;
pub mod status;
pub mod stop;

use crate::config::Config;
use crate::errors::{AppError, AppResult};

/// Member id from the command line, falling back to the configured default.
pub(crate) fn resolve_member(member: Option<&String>, cfg: &Config) -> AppResult<String> {
    member
        .cloned()
        .or_else(|| cfg.default_member.clone())
        .ok_or(AppError::NoMember)
}
