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
            .restore()
            .with_context(|| format!("Failed to restore {}", target))?;
        ui::success("Restored", target);
    }

    Ok(())
}
