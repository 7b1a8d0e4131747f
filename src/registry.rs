use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::naming::underscore;
use crate::{MongenError, Result};

/// Relative path of the modern host manifest.
pub const HOST_MANIFEST: &str = "config/application.yml";

/// Relative path of the legacy namespace marker.
pub const LEGACY_MARKER: &str = ".application";

/// Reference to the parent module of the host application class.
///
/// Legacy hosts expose the parent as an object rather than a plain name;
/// callers convert it to its string form via `Display`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentModule {
    segments: Vec<String>,
}

impl ParentModule {
    pub fn new(segments: Vec<String>) -> Self {
        Self { segments }
    }
}

impl fmt::Display for ParentModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("::"))
    }
}

/// Handle to the host application's root class.
///
/// Injected into the generator at invocation time so name resolution stays
/// testable without a live host tree.
pub trait AppHandle {
    /// Modern hosts expose the parent module name directly. Hosts without
    /// this accessor signal `MongenError::UnsupportedApi`.
    fn module_parent_name(&self) -> Result<String>;

    /// Legacy hosts expose a parent module reference instead of a name.
    fn module_parent(&self) -> Result<ParentModule>;
}

/// Resolve the host application's name in underscored form.
///
/// Tries the modern accessor first and falls back to the legacy accessor
/// only when the modern one is not present (`UnsupportedApi`). Any other
/// failure from either accessor propagates unchanged.
pub fn resolve_app_name(app: &dyn AppHandle) -> Result<String> {
    let parent = match app.module_parent_name() {
        Ok(name) => name,
        Err(MongenError::UnsupportedApi(accessor)) => {
            debug!(%accessor, "modern accessor not present, using legacy parent accessor");
            app.module_parent()?.to_string()
        }
        Err(e) => return Err(e),
    };
    Ok(underscore(&parent))
}

#[derive(Debug, Deserialize)]
struct HostManifest {
    module: Option<String>,
}

/// Host application metadata rooted at the invocation directory.
///
/// Modern hosts carry a `config/application.yml` manifest with a `module`
/// key; older hosts only carry a `.application` file holding the fully
/// qualified name of the application class.
#[derive(Debug, Clone)]
pub struct HostApp {
    root: PathBuf,
}

impl HostApp {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AppHandle for HostApp {
    fn module_parent_name(&self) -> Result<String> {
        let path = self.root.join(HOST_MANIFEST);
        if !path.exists() {
            return Err(MongenError::UnsupportedApi(HOST_MANIFEST.to_string()));
        }

        // A manifest that exists but cannot be used is not grounds for
        // falling back to the legacy marker.
        let raw = fs::read_to_string(&path)?;
        let manifest: HostManifest = serde_yaml::from_str(&raw)?;
        manifest.module.ok_or_else(|| {
            MongenError::Resolve(format!("{} has no `module` key", path.display()))
        })
    }

    fn module_parent(&self) -> Result<ParentModule> {
        let path = self.root.join(LEGACY_MARKER);
        if !path.exists() {
            return Err(MongenError::Resolve(format!(
                "no application metadata under {} (expected {} or {})",
                self.root.display(),
                HOST_MANIFEST,
                LEGACY_MARKER
            )));
        }

        let raw = fs::read_to_string(&path)?;
        let qualified = raw.trim();
        if qualified.is_empty() {
            return Err(MongenError::Resolve(format!("{} is empty", path.display())));
        }

        let mut segments: Vec<String> =
            qualified.split("::").map(|s| s.trim().to_string()).collect();
        // Drop the application class itself; a bare single-segment name is
        // already the module name.
        if segments.len() > 1 {
            segments.pop();
        }
        Ok(ParentModule::new(segments))
    }
}
