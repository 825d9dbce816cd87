//! Windows specific implementations

use std::{
  fs::{File, OpenOptions},
  io,
  os::windows::fs::FileExt,
};

/// Positional read. Moves the file cursor on windows, appends are unaffected.
/// 定位读取，windows 上会移动游标，追加写不受影响
#[inline]
pub fn read_at(f: &File, buf: &mut [u8], pos: u64) -> io::Result<usize> {
  f.seek_read(buf, pos)
}

#[inline]
pub fn perm(_o: &mut OpenOptions, _perm: u32) {}
