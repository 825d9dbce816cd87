//! Tests for read_line_at
//! read_line_at 测试

use std::{fs, path::PathBuf};

use aok::{OK, Void};
use jdb_fslock::{Conf, Error, LockedFile};
use tempfile::{TempDir, tempdir};

#[static_init::constructor(0)]
extern "C" fn _log_init() {
  log_init::init();
}

fn with_content(
  content: &[u8],
  conf: &[Conf],
) -> jdb_fslock::Result<(TempDir, PathBuf, LockedFile)> {
  let dir = tempdir()?;
  let path = dir.path().join("lines");
  fs::write(&path, content)?;
  let f = LockedFile::acquire(&path, conf)?;
  Ok((dir, path, f))
}

#[test]
fn test_line_grows_past_window() -> Void {
  let (_dir, _path, f) = with_content(b"abc\ndef\n", &[])?;

  assert_eq!(f.read_line_at(0, 2)?, b"abc");
  assert_eq!(f.read_line_at(4, 2)?, b"def");
  // Mid-line offset / 行中偏移
  assert_eq!(f.read_line_at(1, 1)?, b"bc");

  f.close()?;
  OK
}

#[test]
fn test_line_eof() -> Void {
  let (_dir, _path, f) = with_content(b"abc\ndef\n", &[])?;

  assert!(matches!(f.read_line_at(8, 2), Err(Error::Eof)));
  assert!(matches!(f.read_line_at(100, 16), Err(Error::Eof)));

  f.close()?;
  OK
}

#[test]
fn test_line_power_of_two_boundary() -> Void {
  // Line fills the window exactly, terminator lands in the next one
  // 行恰好填满窗口，换行符落在下一个窗口
  let (_dir, _path, f) = with_content(b"abcd\nxyz\n", &[])?;
  assert_eq!(f.read_line_at(0, 4)?, b"abcd");
  assert_eq!(f.read_line_at(0, 1)?, b"abcd");
  // Terminator is the last byte of the first window
  // 换行符是首个窗口最后一个字节
  assert_eq!(f.read_line_at(0, 5)?, b"abcd");
  f.close()?;

  let line = vec![b'q'; 16];
  let mut content = line.clone();
  content.push(b'\n');
  let (_dir, _path, f) = with_content(&content, &[])?;
  assert_eq!(f.read_line_at(0, 1)?, line);
  assert_eq!(f.read_line_at(0, 16)?, line);
  assert_eq!(f.read_line_at(0, 17)?, line);
  f.close()?;
  OK
}

#[test]
fn test_line_empty_and_zero_len() -> Void {
  let (_dir, _path, f) = with_content(b"\nab\n", &[])?;

  assert_eq!(f.read_line_at(0, 4)?, b"");
  assert_eq!(f.read_line_at(1, 0)?, b"ab");

  f.close()?;
  OK
}

#[test]
fn test_line_unterminated_tail() -> Void {
  let (_dir, _path, f) = with_content(b"ab\ncde", &[])?;

  assert_eq!(f.read_line_at(0, 2)?, b"ab");
  match f.read_line_at(3, 2) {
    Err(Error::Unterminated { pos, len }) => {
      assert_eq!(pos, 3);
      assert_eq!(len, 3);
    }
    r => panic!("expected unterminated, got {r:?}"),
  }

  f.close()?;
  OK
}

#[test]
fn test_line_too_long() -> Void {
  let mut content = vec![b'a'; 20];
  content.push(b'\n');
  let (_dir, _path, f) = with_content(&content, &[Conf::MaxLine(8)])?;

  assert!(matches!(
    f.read_line_at(0, 2),
    Err(Error::LineTooLong { pos: 0, max: 8 })
  ));
  assert!(matches!(
    f.read_line_at(0, 100),
    Err(Error::LineTooLong { pos: 0, max: 8 })
  ));
  // Short tail still fits / 较短的尾部仍可读取
  assert_eq!(f.read_line_at(15, 2)?, b"aaaaa");

  f.close()?;
  OK
}

#[test]
fn test_line_sees_appended_data() -> Void {
  let (_dir, _path, f) = with_content(b"", &[])?;

  assert!(matches!(f.read_line_at(0, 4), Err(Error::Eof)));
  f.write(b"first\nsecond\n")?;
  assert_eq!(f.read_line_at(0, 4)?, b"first");
  assert_eq!(f.read_line_at(6, 4)?, b"second");
  assert!(matches!(f.read_line_at(13, 4), Err(Error::Eof)));

  f.close()?;
  OK
}

#[test]
fn test_line_offset_past_max_file_size() -> Void {
  let (_dir, _path, f) = with_content(b"abc\n", &[])?;

  assert!(matches!(f.read_line_at(1 << 40, 2), Err(Error::Eof)));
  for pos in [i64::MAX as u64, i64::MAX as u64 + 1, u64::MAX] {
    assert!(
      matches!(f.read_line_at(pos, 2), Err(Error::Eof)),
      "pos={pos}"
    );
  }
  assert_eq!(f.read_line_at(0, 2)?, b"abc");

  f.close()?;
  OK
}
