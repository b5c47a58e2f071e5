// SPDX-License-Identifier: MPL-2.0
//! Logging setup.
//!
//!   iced_compare --debug ...                 # Debug logging to console
//!   RUST_LOG=iced_compare=trace iced_compare # Fine-grained log control

use crate::error::{Error, Result};
use tracing_subscriber::EnvFilter;

/// Installs the global console subscriber.
///
/// `RUST_LOG` wins when set; otherwise `debug` selects the default level.
pub fn init_tracing(debug: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(debug)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug)
        .compact()
        .try_init()
        .map_err(|err| Error::Logging(err.to_string()))
}

fn default_directive(debug: bool) -> &'static str {
    // wgpu and winit are chatty at debug level.
    if debug {
        "iced_compare=debug,warn"
    } else {
        "iced_compare=info,warn"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_flag_raises_crate_level() {
        assert!(default_directive(true).contains("iced_compare=debug"));
        assert!(default_directive(false).contains("iced_compare=info"));
    }

    #[test]
    fn directives_parse() {
        assert!(EnvFilter::try_new(default_directive(true)).is_ok());
        assert!(EnvFilter::try_new(default_directive(false)).is_ok());
    }
}
