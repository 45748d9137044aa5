//! Example of nested structs and URL fields

use envconfig::{Envconfig, Url};

#[derive(Debug, Default, Envconfig)]
struct Database {
    #[envconfig(key = "host", required)]
    pub host: String,

    #[envconfig(key = "port", default = 5432)]
    pub port: u16,
}

#[derive(Debug, Default, Envconfig)]
struct Config {
    #[envconfig(key = "name", default = "shop")]
    pub name: String,

    // Read from APP_DB_HOST and APP_DB_PORT
    #[envconfig(key = "db")]
    pub db: Database,

    // Left as None when APP_WEBHOOK is not an absolute URL
    #[envconfig(key = "webhook")]
    pub webhook: Option<Url>,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("APP_DB_HOST", "db.internal");
    std::env::set_var("APP_WEBHOOK", "https://hooks.example.com/notify");

    let mut config = Config::default();
    envconfig::process("app", &mut config)?;

    println!("Nested configuration:");
    println!("  Name: {}", config.name);
    println!("  Database: {}:{}", config.db.host, config.db.port);
    println!("  Webhook: {:?}", config.webhook.as_ref().map(Url::as_str));

    Ok(())
}
