use anyhow::{Context, Result};

use crate::layout::Layout;
use crate::target::{self, Target};
use crate::ui;

pub fn execute(layout: &Layout, targets: &[Target], backup: bool, cleanup: bool) -> Result<()> {
    if targets.is_empty() {
        ui::info("No targets specified, nothing to do");
        return Ok(());
    }

    for &target in targets {
        let manager = target::create(target, layout);
        ui::status("Installing", target);

        if backup {
            manager
                .backup()
                .with_context(|| format!("Failed to back up {}", target))?;
        }

        if cleanup {
            manager
                .cleanup()
                .with_context(|| format!("Failed to clean up {}", target))?;
        }

        manager
            .install()
            .with_context(|| format!("Failed to install {}", target))?;

        ui::success("Installed", target);
    }

    Ok(())
}
