// ============================================================================
// Server Configuration
// Command-line / environment settings for the HTTP service
// ============================================================================

use crate::numeric::DecimalContext;
use clap::Parser;

/// Startup settings for the calculator service
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(author, version, about = "Decimal calculator with an HTML form and a JSON API")]
pub struct ServerConfig {
    /// Interface to listen on
    #[arg(long, default_value = "0.0.0.0", env = "CALC_HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(short = 'p', long, default_value_t = 5000, env = "CALC_PORT")]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error) or a full filter directive
    #[arg(short = 'l', long, default_value = "info", env = "RUST_LOG")]
    pub log_level: String,

    /// Significant digits results are rounded to
    #[arg(long, default_value_t = DecimalContext::DEFAULT_PRECISION, env = "CALC_PRECISION")]
    pub precision: u32,

    /// Maximum fractional digits shown in results
    #[arg(long, default_value_t = DecimalContext::DEFAULT_DISPLAY_SCALE, env = "CALC_DISPLAY_SCALE")]
    pub display_scale: u32,
}

impl ServerConfig {
    /// Address string suitable for `TcpListener::bind`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Decimal context described by this configuration
    pub fn decimal_context(&self) -> Result<DecimalContext, String> {
        let ctx = DecimalContext::default()
            .with_precision(self.precision)
            .with_display_scale(self.display_scale);
        ctx.validate()?;
        Ok(ctx)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("Host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("Port must be non-zero".to_string());
        }

        self.decimal_context().map(|_| ())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            log_level: "info".to_string(),
            precision: DecimalContext::DEFAULT_PRECISION,
            display_scale: DecimalContext::DEFAULT_DISPLAY_SCALE,
        }
    }
}
