use anyhow::Result;

use crate::target::Target;

pub fn execute() -> Result<()> {
    for target in Target::ALL {
        println!("{:<8} {}", target.as_str(), target.description());
    }
    Ok(())
}
