pub mod context;
pub mod cost;
pub mod registry;
pub mod session;

pub use context::AppContext;
pub use registry::Registry;
pub use session::{Identity, Session};
