//! Embedded templates for the two generated files.
//!
//! Placeholders use the `{{NAME}}` form consumed by
//! `templates::replace_placeholders`.

/// Client configuration written to `config/mongoid.yml`.
pub const CONFIG_TEMPLATE: &str = r#"# Mongoid client configuration for {{APP_NAME}}.
development:
  # Configure available database clients. (required)
  clients:
    # Defines the default client. (required)
    default:
      # Defines the name of the default database that the client can connect
      # to. (required)
      database: {{DATABASE_NAME}}_development
      # Provides the hosts the default client can connect to. Must be an
      # array of host:port pairs. (required)
      hosts:
        - {{MONGODB_HOST}}:{{MONGODB_PORT}}
      options:
        # Change the default write concern. (default = { w: 1 })
        # write:
        #   w: 1

        # Change the default read preference. Valid options for mode are:
        # :eventual, :monotonic, :nearest, :primary, :primary_preferred,
        # :secondary, :secondary_preferred. (default: primary)
        # read:
        #   mode: :secondary_preferred

        # The name of the user for authentication.
        # user: 'user'

        # The password of the user for authentication.
        # password: 'password'

        # The maximum number of connections in the connection pool.
        # (default: 5)
        # max_pool_size: 5

        # The time in seconds for selecting servers for a near read
        # preference. (default: 0.015)
        # local_threshold: 0.015

        # The timeout in seconds for selecting a server for an operation.
        # (default: 30)
        # server_selection_timeout: 30
  # Configure Mongoid-specific options. (optional)
  options:
    # Raise an error when performing a #find and the document is not found.
    # (default: true)
    # raise_not_found_error: true

    # Set the Mongoid and Ruby driver log levels when the application is not
    # using a standard logger. (default: :info)
    # log_level: :info

test:
  clients:
    default:
      database: {{DATABASE_NAME}}_test
      hosts:
        - {{MONGODB_HOST}}:{{MONGODB_PORT}}
      options:
        read:
          mode: :primary
        max_pool_size: 1
"#;

/// Boot-time hook written to `config/initializers/mongoid.rb`.
pub const INITIALIZER_TEMPLATE: &str = r#"# Boot-time Mongoid configuration for {{APP_NAME}}.
#
# Client settings live in config/mongoid.yml; this initializer is the place
# for overrides that must be applied in code while the application boots.
Mongoid.configure do |config|
  # config.log_level = :info
  # config.preload_models = true
end
"#;
