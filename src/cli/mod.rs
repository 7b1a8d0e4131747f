pub mod commands;

use std::path::Path;

use mongen::registry::{HOST_MANIFEST, LEGACY_MARKER};

/// A directory looks like a host application root when it carries either
/// generation of application metadata.
pub fn is_host_application(root: &Path) -> bool {
    root.join(HOST_MANIFEST).exists() || root.join(LEGACY_MARKER).exists()
}
