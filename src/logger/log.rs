use crate::logger::severity::LogSeverity;
use crate::logger::systime::now;

/// Writes a timestamped line to stderr so the conversion artifact on stdout
/// stays clean for piping.
pub fn log(msg: String, log_severity: LogSeverity) {
    eprintln!("[{}] {} {}", log_severity, now(), msg);
}
