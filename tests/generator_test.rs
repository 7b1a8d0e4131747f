use std::fs;

use mongen::config::MongodbConfig;
use mongen::{resolve_app_name, ConfigGenerator, HostApp};
use tempfile::TempDir;

fn generator(root: &TempDir, database_name: Option<&str>) -> ConfigGenerator {
    ConfigGenerator::new(
        root.path(),
        "blog",
        database_name.map(str::to_string),
        MongodbConfig::default(),
    )
}

#[test]
fn writes_both_files_under_config() {
    let root = TempDir::new().unwrap();

    let written = generator(&root, None).run().unwrap();

    assert_eq!(
        written,
        vec![
            root.path().join("config/mongoid.yml"),
            root.path().join("config/initializers/mongoid.rb"),
        ]
    );
    for path in &written {
        assert!(path.is_file(), "missing {}", path.display());
    }
}

#[test]
fn explicit_database_name_appears_alongside_app_name() {
    let root = TempDir::new().unwrap();

    generator(&root, Some("analytics_db")).run().unwrap();

    let config = fs::read_to_string(root.path().join("config/mongoid.yml")).unwrap();
    assert!(config.contains("analytics_db"));
    assert!(config.contains("blog"));
    assert!(config.contains("database: analytics_db_development"));
}

#[test]
fn omitted_database_name_derives_from_app_name() {
    let root = TempDir::new().unwrap();

    generator(&root, None).run().unwrap();

    let config = fs::read_to_string(root.path().join("config/mongoid.yml")).unwrap();
    assert!(config.contains("database: blog_development"));
    assert!(config.contains("database: blog_test"));
}

#[test]
fn emitted_configuration_is_valid_yaml() {
    let root = TempDir::new().unwrap();

    generator(&root, Some("analytics_db")).run().unwrap();

    let config = fs::read_to_string(root.path().join("config/mongoid.yml")).unwrap();
    let parsed: serde_yaml::Value = serde_yaml::from_str(&config).unwrap();

    let database = &parsed["development"]["clients"]["default"]["database"];
    assert_eq!(database.as_str(), Some("analytics_db_development"));
    let hosts = &parsed["development"]["clients"]["default"]["hosts"];
    assert_eq!(hosts[0].as_str(), Some("localhost:27017"));
}

#[test]
fn initializer_invokes_host_configuration_api() {
    let root = TempDir::new().unwrap();

    generator(&root, None).run().unwrap();

    let initializer =
        fs::read_to_string(root.path().join("config/initializers/mongoid.rb")).unwrap();
    assert!(initializer.contains("Mongoid.configure"));
    assert!(initializer.contains("blog"));
}

#[test]
fn client_endpoint_settings_are_rendered() {
    let root = TempDir::new().unwrap();
    let client = MongodbConfig {
        host: "db.internal".to_string(),
        port: 27018,
    };

    ConfigGenerator::new(root.path(), "blog", None, client)
        .run()
        .unwrap();

    let config = fs::read_to_string(root.path().join("config/mongoid.yml")).unwrap();
    assert!(config.contains("- db.internal:27018"));
}

#[test]
fn rerun_produces_byte_identical_files() {
    let root = TempDir::new().unwrap();
    let generator = generator(&root, Some("analytics_db"));

    generator.run().unwrap();
    let first_config = fs::read(root.path().join("config/mongoid.yml")).unwrap();
    let first_initializer =
        fs::read(root.path().join("config/initializers/mongoid.rb")).unwrap();

    generator.run().unwrap();
    let second_config = fs::read(root.path().join("config/mongoid.yml")).unwrap();
    let second_initializer =
        fs::read(root.path().join("config/initializers/mongoid.rb")).unwrap();

    assert_eq!(first_config, second_config);
    assert_eq!(first_initializer, second_initializer);
}

#[test]
fn existing_files_are_overwritten() {
    let root = TempDir::new().unwrap();
    let config_path = root.path().join("config/mongoid.yml");
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, "stale contents\n").unwrap();

    generator(&root, None).run().unwrap();

    let config = fs::read_to_string(&config_path).unwrap();
    assert!(!config.contains("stale contents"));
    assert!(config.contains("database: blog_development"));
}

#[test]
fn full_run_from_host_metadata() {
    let root = TempDir::new().unwrap();
    let config_dir = root.path().join("config");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("application.yml"), "module: PhotoBlog\n").unwrap();

    let app_name = resolve_app_name(&HostApp::new(root.path())).unwrap();
    assert_eq!(app_name, "photo_blog");

    ConfigGenerator::new(root.path(), app_name, None, MongodbConfig::default())
        .run()
        .unwrap();

    let config = fs::read_to_string(root.path().join("config/mongoid.yml")).unwrap();
    assert!(config.contains("database: photo_blog_development"));
}
