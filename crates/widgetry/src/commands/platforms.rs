//! List recognized platforms.

use anyhow::Result;
use widgetry_widgets::Platform;

/// Run the platforms command.
pub fn run() -> Result<()> {
    for platform in Platform::ALL {
        println!("{}", platform);
    }

    Ok(())
}
