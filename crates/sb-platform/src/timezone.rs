//! Host timezone detection.

use anyhow::{anyhow, Result};
use chrono_tz::Tz;
use tracing::{debug, warn};

/// The host's IANA timezone, or UTC when it cannot be determined.
pub fn detect_local_timezone() -> Tz {
    let name = match iana_time_zone::get_timezone() {
        Ok(name) => name,
        Err(err) => {
            warn!(error = %err, "Could not detect host timezone, using UTC");
            return Tz::UTC;
        }
    };

    match parse_timezone(&name) {
        Ok(tz) => {
            debug!(timezone = %tz, "Detected host timezone");
            tz
        }
        Err(err) => {
            warn!(error = %err, "Host timezone not in tz database, using UTC");
            Tz::UTC
        }
    }
}

pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|e| anyhow!("unknown timezone {:?}: {}", name, e))
}

/// An explicit zone name wins over detection.
pub fn resolve_timezone(configured: Option<&str>) -> Result<Tz> {
    match configured {
        Some(name) => parse_timezone(name),
        None => Ok(detect_local_timezone()),
    }
}
