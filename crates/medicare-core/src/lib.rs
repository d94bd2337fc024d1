pub mod booking;
pub mod config;
pub mod responder;
pub mod session;
pub mod slots;
pub mod transcript;

pub use booking::*;
pub use config::*;
pub use responder::*;
pub use session::*;
pub use slots::*;
pub use transcript::*;
