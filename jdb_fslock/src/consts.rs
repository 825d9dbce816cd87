use std::time::Duration;

/// rw-rw-rw- before umask
pub const DEFAULT_PERM: u32 = 0o666;

/// Upper bound of the line-read window (64MB)
/// 按行读取窗口上限
pub const DEFAULT_MAX_LINE: usize = 64 * 1024 * 1024;

pub const POLL_MIN: Duration = Duration::from_millis(1);

pub const POLL_MAX: Duration = Duration::from_millis(50);

pub const EOL: u8 = b'\n';
