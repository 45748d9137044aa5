//! Basic example of populating a struct from environment variables

use envconfig::Envconfig;

#[derive(Debug, Default, Envconfig)]
struct Config {
    #[envconfig(key = "database_url")]
    pub database_url: String,

    #[envconfig(key = "max_connections")]
    pub max_connections: u32,

    #[envconfig(key = "debug")]
    pub debug: bool,
}

fn main() -> anyhow::Result<()> {
    // Keys are PREFIX_KEY, upper-cased
    std::env::set_var("MYAPP_DATABASE_URL", "postgres://localhost/db");
    std::env::set_var("MYAPP_MAX_CONNECTIONS", "0x20");
    std::env::set_var("MYAPP_DEBUG", "t");

    let mut config = Config::default();
    envconfig::process("myapp", &mut config)?;

    println!("Configuration loaded:");
    println!("  Database URL: {}", config.database_url);
    println!("  Max connections: {}", config.max_connections);
    println!("  Debug: {}", config.debug);

    Ok(())
}
