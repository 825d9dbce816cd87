//! Per-request I/O context
//! 单次请求的 I/O 上下文
//!
//! One `Req` per lock or read request, dropped when the request ends.
//! 每个加锁或读取请求一个 Req，请求结束即释放。

use std::{fs::File, io::ErrorKind, thread};

use fs4::fs_std::FileExt;

use crate::{Error, Result, Wait, os};

/// Outcome of issuing a request / 发起请求的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Status {
  Done,
  Pending,
}

pub(crate) struct Req {
  pub pos: u64,
}

impl Req {
  #[inline]
  pub fn at(pos: u64) -> Self {
    Self { pos }
  }

  /// Issue an exclusive whole-file lock without blocking
  /// 非阻塞发起整文件排他锁
  pub fn lock(&self, f: &File) -> Result<Status> {
    match FileExt::try_lock_exclusive(f) {
      Ok(true) => Ok(Status::Done),
      Ok(false) => Ok(Status::Pending),
      Err(e) if e.kind() == ErrorKind::WouldBlock => Ok(Status::Pending),
      Err(e) => Err(Error::Lock(e)),
    }
  }

  /// Block until a pending lock is granted / 阻塞直到挂起的锁被授予
  pub fn wait_lock(&self, f: &File, wait: &Wait) -> Result<()> {
    if wait.is_forever() {
      return FileExt::lock_exclusive(f).map_err(Error::Lock);
    }
    wait.poll(|slice| match self.lock(f)? {
      Status::Done => Ok(Some(())),
      Status::Pending => {
        thread::sleep(slice);
        Ok(None)
      }
    })
  }

  #[inline]
  pub fn read(&self, f: &File, buf: &mut [u8]) -> Result<usize> {
    Ok(os::read_at(f, buf, self.pos)?)
  }
}
