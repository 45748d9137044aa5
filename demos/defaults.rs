//! Example demonstrating default values and required fields

use envconfig::Envconfig;

#[derive(Debug, Default, Envconfig)]
struct Config {
    // Reported as missing when SERVER_API_KEY is unset or empty
    #[envconfig(key = "api_key", required = "true")]
    pub api_key: String,

    #[envconfig(key = "listen_addr", default = "127.0.0.1")]
    pub listen_addr: String,

    #[envconfig(key = "port", default = 8080)]
    pub port: u16,

    // Stays 0.0 when unset; only "true" makes a field required
    #[envconfig(key = "sample_rate", required = "false")]
    pub sample_rate: f64,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("SERVER_API_KEY", "secret-key-123");
    std::env::set_var("SERVER_PORT", "3000");

    let mut config = Config::default();
    envconfig::process("server", &mut config)?;

    println!("Configuration with defaults:");
    println!("  API key: {}", config.api_key);
    println!("  Listen address: {} (default)", config.listen_addr);
    println!("  Port: {} (from SERVER_PORT)", config.port);
    println!("  Sample rate: {}", config.sample_rate);

    Ok(())
}
