//! CLI options.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(about, version)]
pub struct Opts {
    /// Sentry DSN
    #[arg(long, env = "DIABETES_PREDICTOR_SENTRY_DSN")]
    pub sentry_dsn: Option<String>,

    /// Sentry performance monitoring sample rate
    #[arg(long, default_value = "0.0")]
    pub traces_sample_rate: f32,

    /// Bind host
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Bind port
    #[arg(short, long, env = "PORT", default_value = "8080")]
    pub port: u16,

    /// Path of the persisted model
    #[arg(long, default_value = "diabetes.pkl")]
    pub model_path: PathBuf,
}

pub fn parse() -> Opts {
    Opts::parse()
}
