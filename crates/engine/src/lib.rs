//! Front-end drivers for the rules engine
//!
//! Both front ends use only the public [`gamma_core::Game`] API:
//!
//! - [`protocol`] + [`batch`]: the line-oriented text protocol (`B`, `m`, `b`, `f`, `p`)
//! - [`session`]: turn order and cursor state for interactive play
//!
//! # Example
//!
//! ```
//! use gamma_engine::BatchRunner;
//!
//! let mut runner = BatchRunner::new(Vec::new(), Vec::new());
//! runner.run("B 3 1 2 1\nm 1 0 0\nf 2\np\n".as_bytes()).unwrap();
//!
//! let (out, err) = runner.into_writers();
//! assert_eq!(String::from_utf8(out).unwrap(), "OK 1\n1\n2\n1..\n");
//! assert!(err.is_empty());
//! ```

pub mod batch;
pub mod protocol;
pub mod session;

pub use gamma_core as core;
pub use gamma_types as types;

pub use batch::{BatchRunner, Flow};
pub use protocol::{parse_line, Command, Mode, ParseError};
pub use session::{ActionOutcome, Session};
