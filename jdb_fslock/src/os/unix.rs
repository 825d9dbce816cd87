//! Unix specific implementations

use std::{
  fs::{File, OpenOptions},
  io,
  os::unix::fs::{FileExt, OpenOptionsExt},
};

/// Positional read, leaves the file cursor untouched
/// 定位读取，不移动文件游标
#[inline]
pub fn read_at(f: &File, buf: &mut [u8], pos: u64) -> io::Result<usize> {
  f.read_at(buf, pos)
}

#[inline]
pub fn perm(o: &mut OpenOptions, perm: u32) {
  o.mode(perm);
}
