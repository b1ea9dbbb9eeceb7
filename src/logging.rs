use flexi_logger::{opt_format, Cleanup, Criterion, FileSpec, Logger, Naming};

use crate::DameoError;

/// Starts a rotating file logger in `directory`, honoring `RUST_LOG`.
pub fn setup_logging(directory: &str) -> crate::Result<()> {
    Logger::try_with_env_or_str("info")
        .map_err(|e| DameoError::Logging(e.to_string()))?
        .log_to_file(FileSpec::default().directory(directory))
        .format(opt_format)
        .rotate(
            Criterion::Size(10 * 1024 * 1024), // Rotate logs after they reach 10 MB
            Naming::Numbers,
            Cleanup::KeepLogFiles(5),
        )
        .start()
        .map_err(|e| DameoError::Logging(e.to_string()))?;
    Ok(())
}
