pub mod mongoid;

use std::fs;
use std::path::Path;

use crate::Result;

/// Write rendered template content, creating parent directories as needed.
///
/// Existing files are overwritten; last write wins.
pub fn write_template_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// Substitute `{{NAME}}` placeholders with their bound values.
///
/// Unknown placeholders are left in place so a missing binding is visible
/// in the emitted file rather than silently blanked.
pub fn replace_placeholders(template: &str, bindings: &[(&str, &str)]) -> String {
    let mut rendered = template.to_string();
    for (name, value) in bindings {
        rendered = rendered.replace(&format!("{{{{{}}}}}", name), value);
    }
    rendered
}
