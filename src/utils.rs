use std::time::{Duration, Instant};
use tracing::Level;
use tracing_subscriber::fmt::time::ChronoLocal;

const LOG_TIMESTAMP: &str = "%H:%M:%S%.3f";

/// Installs the global stderr logger. Diagnostics only; operator output goes
/// through the console.
pub fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new(LOG_TIMESTAMP.to_string()))
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install logger: {e}"))
}

pub fn measure_time<F, T>(f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let result = f();
    let duration = start.elapsed();
    (result, duration)
}

pub fn get_memory_usage() -> String {
    if let Ok(mem_info) = sys_info::mem_info() {
        format!(
            "Memory: Total: {} MB, Free: {} MB, Used: {} MB",
            mem_info.total / 1024,
            mem_info.free / 1024,
            mem_info.total.saturating_sub(mem_info.free) / 1024
        )
    } else {
        "Unable to get memory info".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_time_returns_closure_result() {
        let (value, elapsed) = measure_time(|| 21 * 2);
        assert_eq!(value, 42);
        assert!(elapsed < Duration::from_secs(5));
    }

    #[test]
    fn memory_usage_is_a_single_line() {
        let line = get_memory_usage();
        assert!(!line.contains('\n'));
        assert!(line.starts_with("Memory") || line.starts_with("Unable"));
    }
}
