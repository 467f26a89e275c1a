
mod position;

pub(crate) use self::position::Slot;
pub use self::position::*;
