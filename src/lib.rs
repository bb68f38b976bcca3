mod generic;
mod session;

pub use generic::*;
pub use session::*;
