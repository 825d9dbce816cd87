use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// Zero bytes at the requested offset / 请求偏移处无数据
  #[error("eof")]
  Eof,

  #[error("file locked / 文件已锁定")]
  Locked,

  #[error("lock: {0}")]
  Lock(#[source] std::io::Error),

  #[error("wait timeout / 等待超时")]
  Timeout,

  #[error("wait canceled / 等待已取消")]
  Canceled,

  #[error("file closed / 文件已关闭")]
  Closed,

  #[error("line too long: pos={pos}, max={max}")]
  LineTooLong { pos: u64, max: usize },

  #[error("unterminated line: pos={pos}, len={len}")]
  Unterminated { pos: u64, len: usize },

  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
