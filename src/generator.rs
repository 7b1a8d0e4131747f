use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::MongodbConfig;
use crate::templates::{self, mongoid};
use crate::Result;

/// File name of the generated client configuration.
pub const CONFIG_FILE: &str = "mongoid.yml";

/// File name of the generated boot initializer.
pub const INITIALIZER_FILE: &str = "mongoid.rb";

/// One generator run: the resolved application name, an optional database
/// name, and the host root the two files are written under.
///
/// `app_name` is expected in underscored form; callers resolve it via
/// `registry::resolve_app_name` or pass an already-normalized override.
#[derive(Debug, Clone)]
pub struct ConfigGenerator {
    root: PathBuf,
    app_name: String,
    database_name: Option<String>,
    client: MongodbConfig,
}

impl ConfigGenerator {
    pub fn new(
        root: impl Into<PathBuf>,
        app_name: impl Into<String>,
        database_name: Option<String>,
        client: MongodbConfig,
    ) -> Self {
        Self {
            root: root.into(),
            app_name: app_name.into(),
            database_name,
            client,
        }
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Database name rendered into the configuration. Falls back to the
    /// underscored application name when the caller did not supply one.
    pub fn database_name(&self) -> &str {
        self.database_name.as_deref().unwrap_or(&self.app_name)
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join("config").join(CONFIG_FILE)
    }

    pub fn initializer_path(&self) -> PathBuf {
        self.root.join("config").join("initializers").join(INITIALIZER_FILE)
    }

    pub fn render_config(&self) -> String {
        self.render(mongoid::CONFIG_TEMPLATE)
    }

    pub fn render_initializer(&self) -> String {
        self.render(mongoid::INITIALIZER_TEMPLATE)
    }

    /// Write both files, returning the paths in the order written.
    ///
    /// Filesystem failures propagate unchanged; a failure on the second
    /// write leaves the first file in place.
    pub fn run(&self) -> Result<Vec<PathBuf>> {
        let config_path = self.config_path();
        templates::write_template_file(&config_path, &self.render_config())?;
        debug!(path = %config_path.display(), "wrote client configuration");

        let initializer_path = self.initializer_path();
        templates::write_template_file(&initializer_path, &self.render_initializer())?;
        debug!(path = %initializer_path.display(), "wrote boot initializer");

        Ok(vec![config_path, initializer_path])
    }

    fn render(&self, template: &str) -> String {
        let port = self.client.port.to_string();
        templates::replace_placeholders(
            template,
            &[
                ("APP_NAME", self.app_name.as_str()),
                ("DATABASE_NAME", self.database_name()),
                ("MONGODB_HOST", self.client.host.as_str()),
                ("MONGODB_PORT", port.as_str()),
            ],
        )
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
