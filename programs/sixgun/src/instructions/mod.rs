pub mod pass;
pub use pass::*;

pub mod shoot;
pub use shoot::*;

pub mod start_session;
pub use start_session::*;
