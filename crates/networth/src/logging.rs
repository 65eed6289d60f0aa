use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE: &str = "networth.log";

/// Size at which the log file is trimmed (5 MB)
const MAX_LOG_SIZE: u64 = 5 * 1024 * 1024;
/// Tail kept after trimming (1 MB)
const KEEP_SIZE: u64 = 1024 * 1024;

const ROTATION_MARKER: &[u8] = b"--- older entries removed ---\n";

/// Trim `path` to its last `keep` bytes once it grows past `max`.
///
/// The kept tail starts at a line boundary. Returns whether the file was
/// rewritten.
fn trim_log(path: &Path, max: u64, keep: u64) -> std::io::Result<bool> {
    let len = match fs::metadata(path) {
        Ok(metadata) => metadata.len(),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };
    if len <= max {
        return Ok(false);
    }

    let mut tail = Vec::with_capacity(keep as usize);
    {
        let mut file = File::open(path)?;
        file.seek(SeekFrom::Start(len.saturating_sub(keep)))?;
        file.read_to_end(&mut tail)?;
    }

    let start = tail
        .iter()
        .position(|&b| b == b'\n')
        .map_or(0, |i| i + 1);

    let mut file = File::create(path)?;
    file.write_all(ROTATION_MARKER)?;
    file.write_all(&tail[start..])?;
    Ok(true)
}

/// Default filter when `RUST_LOG` is unset
fn default_filter(level: &str) -> String {
    format!("networth={level},networth_core=warn")
}

/// Route `tracing` output to `{data_dir}/networth.log`.
///
/// The terminal belongs to the UI, so nothing is written to stdout. The
/// file is trimmed on startup once it passes 5 MB. `RUST_LOG` overrides
/// `level`.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<PathBuf> {
    fs::create_dir_all(data_dir)?;
    let log_path = data_dir.join(LOG_FILE);

    if let Err(e) = trim_log(&log_path, MAX_LOG_SIZE, KEEP_SIZE) {
        eprintln!("Warning: could not trim {}: {e}", log_path.display());
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    tracing::info!(log_path = %log_path.display(), "Logging initialized");
    Ok(log_path)
}
