#![cfg_attr(docsrs, feature(doc_cfg))]

//! # jdb_fslock - Exclusive file lock / 排他文件锁
//!
//! One process holds an exclusive lock on a whole file; inside that process
//! many threads read and write it through a reader/writer guard.
//! 一个进程持有整个文件的排他锁；进程内多线程通过读写守卫并发读写。
//!
//! ```no_run
//! use jdb_fslock::{Conf, LockedFile, Mode};
//!
//! let f = LockedFile::acquire("lease", &[Conf::Mode(Mode::DEFAULT | Mode::CREATE)])?;
//! f.write(b"owner=1\n")?;
//! f.flush()?;
//! assert_eq!(f.read_line_at(0, 4)?, b"owner=1");
//! f.close()?;
//! # Ok::<(), jdb_fslock::Error>(())
//! ```

pub mod conf;
pub mod consts;
pub mod error;
mod file;
mod line;
mod lock;
pub mod mode;
mod os;
mod req;
pub mod wait;

pub use conf::{Conf, ParsedConf};
pub use error::{Error, Result};
pub use file::LockedFile;
pub use mode::Mode;
pub use wait::{Cancel, Wait};
