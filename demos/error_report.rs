//! Example showing how every problem is reported in one pass

use envconfig::{Envconfig, FieldError};

#[derive(Debug, Default, Envconfig)]
struct Config {
    #[envconfig(key = "host", required = "true")]
    pub host: String,

    #[envconfig(key = "port")]
    pub port: u16,

    #[envconfig(key = "verbose")]
    pub verbose: bool,
}

fn main() -> anyhow::Result<()> {
    std::env::remove_var("REPORT_HOST");
    std::env::set_var("REPORT_PORT", "eighty");
    std::env::set_var("REPORT_VERBOSE", "yes please");

    let mut config = Config::default();
    let Err(errors) = envconfig::process("report", &mut config) else {
        println!("No errors: {config:?}");
        return Ok(());
    };

    // Human-readable block
    println!("{errors}");

    // Individual, typed failures
    for error in &errors {
        match error {
            FieldError::Required { key } => println!("missing: {key}"),
            FieldError::Parse { key, value, .. } => println!("invalid: {key}={value}"),
        }
    }

    // Machine-readable report
    println!("{}", serde_json::to_string_pretty(&errors)?);

    Ok(())
}
