//! Open mode bitmask
//! 打开模式位掩码

use std::{fs::OpenOptions, ops::BitOr};

/// Open mode flags. `Mode::EMPTY` resolves to `APPEND | READ | WRITE`.
/// 打开模式标志，空值解析为追加 + 读写
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Mode(u32);

impl Mode {
  pub const EMPTY: Self = Self(0);
  pub const READ: Self = Self(1);
  pub const WRITE: Self = Self(1 << 1);
  pub const APPEND: Self = Self(1 << 2);
  /// Create if missing / 不存在则创建
  pub const CREATE: Self = Self(1 << 3);
  pub const TRUNCATE: Self = Self(1 << 4);

  pub const DEFAULT: Self = Self(Self::APPEND.0 | Self::READ.0 | Self::WRITE.0);

  #[inline]
  pub const fn bits(self) -> u32 {
    self.0
  }

  #[inline]
  pub const fn from_bits(bits: u32) -> Self {
    Self(bits)
  }

  #[inline]
  pub const fn contains(self, other: Self) -> bool {
    self.0 & other.0 == other.0
  }

  #[inline]
  pub const fn is_empty(self) -> bool {
    self.0 == 0
  }

  /// Empty mode falls back to default / 空模式回退为默认值
  #[inline]
  pub const fn resolve(self) -> Self {
    if self.is_empty() { Self::DEFAULT } else { self }
  }

  pub fn options(self) -> OpenOptions {
    let mode = self.resolve();
    let mut o = OpenOptions::new();
    o.read(mode.contains(Self::READ))
      .write(mode.contains(Self::WRITE))
      .append(mode.contains(Self::APPEND))
      .create(mode.contains(Self::CREATE))
      .truncate(mode.contains(Self::TRUNCATE));
    o
  }
}

impl BitOr for Mode {
  type Output = Self;

  #[inline]
  fn bitor(self, rhs: Self) -> Self {
    Self(self.0 | rhs.0)
  }
}
