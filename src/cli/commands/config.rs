use anyhow::Result;
use clap::ArgMatches;
use std::path::PathBuf;

use mongen::config::Config;
use mongen::{resolve_app_name, underscore, ConfigGenerator, HostApp};

pub fn handle_config(matches: &ArgMatches, settings: &Config) -> Result<()> {
    let database_name = matches.get_one::<String>("database-name").cloned();
    let root = matches.get_one::<PathBuf>("root").unwrap().clone();
    let verbose = matches.get_flag("verbose");

    let app_name = match matches.get_one::<String>("app-name") {
        Some(name) => underscore(name),
        None => {
            if verbose && !crate::cli::is_host_application(&root) {
                println!("🔍 No application metadata under {}", root.display());
            }
            resolve_app_name(&HostApp::new(&root))?
        }
    };

    println!("🎯 Generating Mongoid configuration for '{}'", app_name);
    if verbose {
        match &database_name {
            Some(name) => println!("📋 Database: {}", name),
            None => println!("📋 Database: {} (derived from application name)", app_name),
        }
        println!("📋 Client endpoint: {}:{}", settings.mongodb.host, settings.mongodb.port);
    }

    let generator = ConfigGenerator::new(root, app_name, database_name, settings.mongodb.clone());

    for path in generator.run()? {
        println!("✅ Wrote {}", path.display());
    }

    println!("\n🚀 Next steps:");
    println!("   1. Review config/mongoid.yml and adjust hosts for your environments");
    println!("   2. Restart the application so the initializer is picked up");

    Ok(())
}
