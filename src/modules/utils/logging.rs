use env_logger::{Builder, WriteStyle};
use log::{error, info, warn, LevelFilter};
use std::fs::OpenOptions;
use std::path::Path;

/// Initialize the logging system, appending to `log_file`
pub fn initialize_logging<P: AsRef<Path>>(
    log_file: P,
    level: LevelFilter,
) -> Result<(), Box<dyn std::error::Error>> {
    // Create or append to log file
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file.as_ref())?;

    Builder::new()
        .filter_level(level)
        .format_timestamp_secs()
        .format_module_path(true)
        .write_style(WriteStyle::Never)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()?;

    info!("Logging system initialized");
    Ok(())
}

/// Mask an identity number (or any other identifier) before it is logged
pub fn format_sensitive(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..2].iter().collect();
    let tail: String = chars[chars.len() - 2..].iter().collect();
    format!("{}***{}", head, tail)
}

/// Structured logging for registration and login events
pub fn log_auth_event(event_type: &str, identity_number: &str, success: bool, details: Option<&str>) {
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    if success {
        info!(
            "Auth event: type={}, voter={}, success=true, timestamp={}, details={:?}",
            event_type,
            format_sensitive(identity_number),
            timestamp,
            details
        );
    } else {
        warn!(
            "Auth event: type={}, voter={}, success=false, timestamp={}, details={:?}",
            event_type,
            format_sensitive(identity_number),
            timestamp,
            details
        );
    }
}

/// Structured logging for data operations such as casting a vote
pub fn log_data_operation(
    operation: &str,
    voter: &str,
    resource: &str,
    success: bool,
    details: Option<&str>,
) {
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    if success {
        info!(
            "Data operation: op={}, voter={}, resource={}, success=true, timestamp={}, details={:?}",
            operation, voter, resource, timestamp, details
        );
    } else {
        error!(
            "Data operation: op={}, voter={}, resource={}, success=false, timestamp={}, details={:?}",
            operation, voter, resource, timestamp, details
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_sensitive_data_formatting() {
        assert_eq!(format_sensitive("123456789012"), "12***12");
        assert_eq!(format_sensitive("1234"), "****");
        assert_eq!(format_sensitive("12345"), "12***45");
        assert_eq!(format_sensitive(""), "");
    }

    #[test]
    fn test_logging_initialization() {
        let log_file = NamedTempFile::new().unwrap();

        // Another test may already have installed a logger
        let result = initialize_logging(log_file.path(), LevelFilter::Info);
        assert!(
            result.is_ok()
                || result
                    .unwrap_err()
                    .to_string()
                    .contains("already initialized")
        );
    }
}
