pub use self::error::*;
pub use self::sentry::*;

mod error;
mod sentry;
