//! Bounded blocking wait
//! 有界阻塞等待
//!
//! Every blocking point (OS lock, in-process guard) goes through a [`Wait`].
//! `Wait::FOREVER` blocks without limit; a deadline or a [`Cancel`] token turns
//! the wait into back-off polling that can give up.
//! 所有阻塞点都经过 Wait。FOREVER 无限阻塞；设置截止时间或取消令牌后改为退避轮询。

use std::{
  sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
  },
  time::{Duration, Instant},
};

use crate::{
  Error, Result,
  consts::{POLL_MAX, POLL_MIN},
};

/// Cancel token, clones share one flag
/// 取消令牌，克隆共享同一标志
#[derive(Clone, Debug, Default)]
pub struct Cancel(Arc<AtomicBool>);

impl Cancel {
  pub fn new() -> Self {
    Self::default()
  }

  #[inline]
  pub fn cancel(&self) {
    self.0.store(true, Ordering::Release);
  }

  #[inline]
  pub fn is_canceled(&self) -> bool {
    self.0.load(Ordering::Acquire)
  }
}

/// How long a blocking call may wait
/// 阻塞调用可等待多久
#[derive(Clone, Debug, Default)]
pub struct Wait {
  pub deadline: Option<Instant>,
  pub cancel: Option<Cancel>,
}

impl Wait {
  pub const FOREVER: Self = Self {
    deadline: None,
    cancel: None,
  };

  /// Saturates to forever when `now + dur` overflows
  pub fn timeout(dur: Duration) -> Self {
    Self {
      deadline: Instant::now().checked_add(dur),
      cancel: None,
    }
  }

  pub fn until(deadline: Instant) -> Self {
    Self {
      deadline: Some(deadline),
      cancel: None,
    }
  }

  pub fn with_cancel(mut self, cancel: Cancel) -> Self {
    self.cancel = Some(cancel);
    self
  }

  #[inline]
  pub fn is_forever(&self) -> bool {
    self.deadline.is_none() && self.cancel.is_none()
  }

  /// Time left before deadline, None = unbounded
  /// 距截止时间的剩余，None 表示无限
  #[inline]
  pub fn remain(&self) -> Option<Duration> {
    self
      .deadline
      .map(|d| d.saturating_duration_since(Instant::now()))
  }

  pub(crate) fn check(&self) -> Result<()> {
    if self.cancel.as_ref().is_some_and(Cancel::is_canceled) {
      return Err(Error::Canceled);
    }
    if self.deadline.is_some_and(|d| Instant::now() >= d) {
      return Err(Error::Timeout);
    }
    Ok(())
  }

  /// Call `f` with a time slice until it yields a value.
  /// `f` may block up to the slice it is given.
  /// 以时间片反复调用 f 直到返回值，f 最多阻塞给定时间片
  pub(crate) fn poll<T>(&self, mut f: impl FnMut(Duration) -> Result<Option<T>>) -> Result<T> {
    let mut step = POLL_MIN;
    loop {
      let slice = self.remain().map_or(step, |r| r.min(step));
      if let Some(v) = f(slice)? {
        return Ok(v);
      }
      self.check()?;
      step = (step * 2).min(POLL_MAX);
    }
  }
}
