use anyhow::{Context, Result};

use crate::layout::Layout;
use crate::target::{self, Target};
use crate::ui;

pub fn execute(layout: &Layout, targets: &[Target]) -> Result<()> {
    if targets.is_empty() {
        ui::info("No targets specified, nothing to do");
        return Ok(());
    }

    for &target in targets {
        target::create(target, layout)
            .backup()
            .with_context(|| format!("Failed to back up {}", target))?;
        ui::success("Backed up", target);
    }

    Ok(())
}
