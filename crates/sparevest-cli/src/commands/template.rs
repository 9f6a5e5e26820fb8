//! Template command implementation.

use anyhow::Result;

use crate::config::SpareVestConfig;

/// Prints the default portfolio as a config file.
pub fn execute() -> Result<()> {
    print!("{}", SpareVestConfig::template().to_toml()?);
    Ok(())
}
