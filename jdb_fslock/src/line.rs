//! Read one line at an offset, growing the window until `\n` is found
//! 从偏移处读取一行，窗口翻倍直到找到 `\n`

use memchr::memchr;

use crate::{Error, LockedFile, Result, Wait, consts::EOL, req::Req};

enum Probe {
  Line(Vec<u8>),
  /// Window filled, no terminator / 窗口已满，无换行
  Full,
  /// End of file before terminator / 换行前到达文件末尾
  Short(usize),
}

impl LockedFile {
  pub fn read_line_at(&self, pos: u64, len: usize) -> Result<Vec<u8>> {
    self.read_line_at_with(pos, len, &self.conf().wait())
  }

  /// Bytes from `pos` up to, not including, the next `\n`.
  /// `len` is the first window size, doubled while no terminator is found,
  /// capped by `Conf::MaxLine`.
  /// 返回 pos 到下一个 `\n`（不含）的字节；len 为初始窗口，未找到则翻倍，上限 MaxLine
  pub fn read_line_at_with(&self, pos: u64, len: usize, wait: &Wait) -> Result<Vec<u8>> {
    let max = self.conf().max_line;
    let mut len = len.clamp(1, max);
    loop {
      match self.probe(pos, len, wait)? {
        Probe::Line(line) => return Ok(line),
        Probe::Short(n) => return Err(Error::Unterminated { pos, len: n }),
        Probe::Full => {
          if len >= max {
            return Err(Error::LineTooLong { pos, max });
          }
          len = len.saturating_mul(2).min(max);
          log::trace!("line window grow: pos={pos}, len={len}");
        }
      }
    }
  }

  /// One attempt, shared guard held for this read only
  /// 单次尝试，共享守卫只在本次读取期间持有
  fn probe(&self, pos: u64, len: usize, wait: &Wait) -> Result<Probe> {
    // No file extends past i64::MAX, the OS rejects such offsets
    // 文件不会超过 i64::MAX，操作系统拒绝这类偏移
    if pos
      .checked_add(len as u64)
      .is_none_or(|end| end > i64::MAX as u64)
    {
      return Err(Error::Eof);
    }
    let mut buf = vec![0u8; len];
    let n = {
      let g = self.shared(wait)?;
      let f = g.as_ref().ok_or(Error::Closed)?;
      Req::at(pos).read(f, &mut buf)?
    };
    if n == 0 {
      return Err(Error::Eof);
    }
    if let Some(i) = memchr(EOL, &buf[..n]) {
      buf.truncate(i);
      return Ok(Probe::Line(buf));
    }
    Ok(if n < len { Probe::Short(n) } else { Probe::Full })
  }
}
