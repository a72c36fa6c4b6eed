pub mod digitizer;
pub mod encoding;
pub mod error;
pub mod event;
pub mod header;
pub mod status;

pub use digitizer::*;
pub use encoding::*;
pub use error::*;
pub use event::*;
pub use header::*;
pub use status::*;
