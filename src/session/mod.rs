pub mod state;

pub use state::{ResolveSeq, Session};
