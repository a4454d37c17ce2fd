// src/log.rs
// Diagnostics go to stderr so stdout stays clean for reports.
// `SM_SCRAPE_LOG` (EnvFilter syntax) wins over the -v count.

use tracing_subscriber::{EnvFilter, fmt};

use crate::config::consts::LOG_ENV;

fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(join!("sm_scrape=", level_for(verbosity))));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(0), "warn");
        assert_eq!(level_for(2), "debug");
        assert_eq!(level_for(9), "trace");
    }

    #[test]
    fn init_twice_is_harmless() {
        init(0);
        init(3);
    }
}
