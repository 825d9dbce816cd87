//! Lock acquisition / 加锁
//!
//! Open, then issue a non-blocking exclusive lock. A pending lock turns into a
//! blocking wait bounded by the configured [`Wait`].
//! 先打开，再非阻塞发起排他锁；挂起时转为阻塞等待，上限由 Wait 决定。

use std::{
  fs::File,
  path::{Path, PathBuf},
};

use crate::{
  Conf, Error, LockedFile, ParsedConf, Result, Wait, os,
  req::{Req, Status},
};

impl LockedFile {
  /// Open without locking, pass the file to [`lock_file`](Self::lock_file)
  /// 仅打开，不加锁，之后交给 lock_file
  pub fn open(path: impl AsRef<Path>, conf: &ParsedConf) -> Result<File> {
    let mut o = conf.mode.options();
    os::perm(&mut o, conf.perm);
    Ok(o.open(path)?)
  }

  /// Open and lock the whole file, block until granted.
  /// Both steps happen here, a returned `LockedFile` always holds the lock.
  /// 打开并锁定整个文件，阻塞直到获得锁
  pub fn acquire(path: impl Into<PathBuf>, conf: &[Conf]) -> Result<Self> {
    let path = path.into();
    let conf = ParsedConf::parse(conf);
    let file = Self::open(&path, &conf)?;
    let wait = conf.wait();
    Self::lock(file, path, conf, Some(&wait))
  }

  /// Lock an already opened file, block until granted.
  /// `path` is kept for [`path`](Self::path) and logs only.
  /// 锁定已打开的文件，阻塞直到获得锁
  pub fn lock_file(file: File, path: impl Into<PathBuf>, conf: &[Conf]) -> Result<Self> {
    let conf = ParsedConf::parse(conf);
    let wait = conf.wait();
    Self::lock(file, path.into(), conf, Some(&wait))
  }

  /// Like [`acquire`](Self::acquire), but fail with [`Error::Locked`] instead of waiting
  /// 同 acquire，但锁被占用时直接返回 Locked
  pub fn try_acquire(path: impl Into<PathBuf>, conf: &[Conf]) -> Result<Self> {
    let path = path.into();
    let conf = ParsedConf::parse(conf);
    let file = Self::open(&path, &conf)?;
    Self::lock(file, path, conf, None)
  }

  fn lock(file: File, path: PathBuf, conf: ParsedConf, wait: Option<&Wait>) -> Result<Self> {
    let req = Req::at(0);
    if req.lock(&file)? == Status::Pending {
      let Some(wait) = wait else {
        return Err(Error::Locked);
      };
      log::debug!("lock contended, waiting: {path:?}");
      req.wait_lock(&file, wait)?;
    }
    log::debug!("lock granted: {path:?}");
    Ok(Self::new(file, path, conf))
  }
}
