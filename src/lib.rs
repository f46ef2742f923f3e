//! Gamma territory game (workspace facade crate).
//!
//! Re-exports the member crates under `crates/` as `gamma::{core, engine, input,
//! term, types}`.

pub use gamma_core as core;
pub use gamma_engine as engine;
pub use gamma_input as input;
pub use gamma_term as term;
pub use gamma_types as types;
