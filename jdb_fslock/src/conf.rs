//! Lock configuration / 锁配置

use std::time::Duration;

use crate::{
  Cancel, Mode, Wait,
  consts::{DEFAULT_MAX_LINE, DEFAULT_PERM},
};

/// Lock configuration options / 锁配置选项
#[derive(Debug, Clone)]
pub enum Conf {
  /// Open mode, `Mode::EMPTY` = append + read/write / 打开模式
  Mode(Mode),
  /// Permission bits for new files, unix only / 新建文件权限位，仅 unix
  Perm(u32),
  /// Default bound for every blocking wait / 所有阻塞等待的默认上限
  Timeout(Duration),
  /// Default cancel token for every blocking wait / 所有阻塞等待的默认取消令牌
  Cancel(Cancel),
  /// Max line-read window in bytes / 按行读取窗口上限（字节）
  MaxLine(usize),
}

/// Parsed config / 解析后的配置
#[derive(Debug, Clone)]
pub struct ParsedConf {
  pub mode: Mode,
  pub perm: u32,
  pub timeout: Option<Duration>,
  pub cancel: Option<Cancel>,
  pub max_line: usize,
}

impl Default for ParsedConf {
  fn default() -> Self {
    Self {
      mode: Mode::DEFAULT,
      perm: DEFAULT_PERM,
      timeout: None,
      cancel: None,
      max_line: DEFAULT_MAX_LINE,
    }
  }
}

impl ParsedConf {
  pub fn parse(conf: &[Conf]) -> Self {
    let mut c = Self::default();
    for item in conf {
      match item {
        Conf::Mode(v) => c.mode = v.resolve(),
        Conf::Perm(v) => c.perm = *v,
        Conf::Timeout(v) => c.timeout = Some(*v),
        Conf::Cancel(v) => c.cancel = Some(v.clone()),
        Conf::MaxLine(v) => c.max_line = *v,
      }
    }
    c.max_line = c.max_line.max(1);
    c
  }

  /// Fresh wait for one call, deadline counted from now
  /// 为单次调用生成等待，截止时间从现在算起
  pub fn wait(&self) -> Wait {
    let w = match self.timeout {
      Some(dur) => Wait::timeout(dur),
      None => Wait::FOREVER,
    };
    match &self.cancel {
      Some(c) => w.with_cancel(c.clone()),
      None => w,
    }
  }
}
