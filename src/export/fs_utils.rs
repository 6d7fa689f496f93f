use crate::errors::{AppError, AppResult};
use crate::ui::messages::{confirm, info};
use std::path::Path;

/// Make sure `path` may be written: new files always, existing ones only
/// with `force` or after the user agrees to overwrite.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    let prompt = format!("The file '{}' already exists.", path.display());
    if !confirm(&prompt, "Overwrite?") {
        return Err(AppError::Export(
            "export cancelled: existing file not overwritten".into(),
        ));
    }

    info("Existing file will be overwritten.");
    Ok(())
}
