pub mod add;
pub mod delete;
pub mod done;
pub mod edit;
pub mod list;
pub mod next;
pub mod show;

use anyhow::Result;
use scheduler_core::rule;

/// Rejects malformed repeat rules before anything is stored. An empty rule means one-off.
pub(crate) fn validate_repeat(repeat: &str) -> Result<()> {
    if !repeat.is_empty() {
        rule::parse(repeat)?;
    }
    Ok(())
}
