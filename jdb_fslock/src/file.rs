//! Locked file handle
//! 已加锁文件句柄
//!
//! Writes and flushes take the guard exclusively, reads share it.
//! 写入与刷盘独占守卫，读取共享守卫。

use std::{
  fs::File,
  io::{self, Write},
  path::{Path, PathBuf},
};

use fs4::fs_std::FileExt;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{Error, ParsedConf, Result, Wait, req::Req};

/// File holding an exclusive cross-process lock
/// 持有跨进程排他锁的文件
pub struct LockedFile {
  /// None once closed / 关闭后为 None
  file: RwLock<Option<File>>,
  path: PathBuf,
  conf: ParsedConf,
}

impl LockedFile {
  pub(crate) fn new(file: File, path: PathBuf, conf: ParsedConf) -> Self {
    Self {
      file: RwLock::new(Some(file)),
      path,
      conf,
    }
  }

  #[inline]
  pub fn path(&self) -> &Path {
    &self.path
  }

  #[inline]
  pub fn conf(&self) -> &ParsedConf {
    &self.conf
  }

  pub fn is_closed(&self) -> bool {
    self.file.read().is_none()
  }

  pub(crate) fn shared(&self, wait: &Wait) -> Result<RwLockReadGuard<'_, Option<File>>> {
    if wait.is_forever() {
      return Ok(self.file.read());
    }
    wait.poll(|slice| Ok(self.file.try_read_for(slice)))
  }

  pub(crate) fn exclusive(&self, wait: &Wait) -> Result<RwLockWriteGuard<'_, Option<File>>> {
    if wait.is_forever() {
      return Ok(self.file.write());
    }
    wait.poll(|slice| Ok(self.file.try_write_for(slice)))
  }

  pub fn write(&self, data: &[u8]) -> Result<()> {
    self.write_with(data, &self.conf.wait())
  }

  /// Write all bytes, no partial-write recovery
  /// 写入全部字节，不做部分写恢复
  pub fn write_with(&self, data: &[u8], wait: &Wait) -> Result<()> {
    let g = self.exclusive(wait)?;
    let mut f = g.as_ref().ok_or(Error::Closed)?;
    f.write_all(data)?;
    Ok(())
  }

  pub fn flush(&self) -> Result<()> {
    self.flush_with(&self.conf.wait())
  }

  /// Sync to stable storage / 同步到稳定存储
  pub fn flush_with(&self, wait: &Wait) -> Result<()> {
    let g = self.exclusive(wait)?;
    let f = g.as_ref().ok_or(Error::Closed)?;
    f.sync_all()?;
    Ok(())
  }

  pub fn read(&self) -> Result<Vec<u8>> {
    self.read_with(&self.conf.wait())
  }

  /// Read whole file from offset 0 with a single positional read.
  /// One read returns at most what the OS allows per call (about 2GB on linux),
  /// larger files come back truncated.
  /// 单次定位读取整个文件；单次读取受系统上限约束（linux 约 2GB），更大的文件会被截断
  pub fn read_with(&self, wait: &Wait) -> Result<Vec<u8>> {
    let g = self.shared(wait)?;
    let f = g.as_ref().ok_or(Error::Closed)?;
    let size = usize::try_from(f.metadata()?.len())
      .map_err(|_| io::Error::from(io::ErrorKind::OutOfMemory))?;
    // One spare byte past the reported size
    // 比报告的大小多分配一个字节
    let mut buf = vec![0u8; size.saturating_add(1)];
    let n = Req::at(0).read(f, &mut buf)?;
    buf.truncate(n);
    Ok(buf)
  }

  /// Current file size / 当前文件大小
  pub fn len(&self) -> Result<u64> {
    let g = self.shared(&self.conf.wait())?;
    let f = g.as_ref().ok_or(Error::Closed)?;
    Ok(f.metadata()?.len())
  }

  pub fn is_empty(&self) -> Result<bool> {
    Ok(self.len()? == 0)
  }

  /// Same as [`close`](Self::close): closing releases the lock
  /// 同 close：关闭即释放锁
  #[inline]
  pub fn unlock(&self) -> Result<()> {
    self.close()
  }

  /// Release the lock and close the file. Waits for in-flight calls.
  /// Calling again is a no-op.
  /// 释放锁并关闭文件，等待进行中的调用，重复调用无操作
  pub fn close(&self) -> Result<()> {
    let Some(f) = self.file.write().take() else {
      return Ok(());
    };
    let r = FileExt::unlock(&f).map_err(Error::Lock);
    drop(f);
    log::debug!("lock released: {:?}", self.path);
    r
  }
}

impl Drop for LockedFile {
  fn drop(&mut self) {
    if self.file.get_mut().is_some() {
      log::warn!("LockedFile dropped without close: {:?}", self.path);
    }
  }
}
