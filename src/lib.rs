pub mod config;
pub mod error;
pub mod generator;
pub mod naming;
pub mod registry;
pub mod templates;

pub use error::{MongenError, Result};
pub use generator::ConfigGenerator;
pub use naming::underscore;
pub use registry::{resolve_app_name, AppHandle, HostApp, ParentModule};
