pub mod color;
pub mod key;
pub mod parsers;
pub mod pos;
pub mod tristate;

pub use color::{Hsv, NamedTextColor, ShadowColor, TextColor};
pub use key::{Key, MINECRAFT_NAMESPACE};
pub use parsers::ParseError;
pub use pos::{BlockPos, Coordinate, CoordinateKind};
pub use tristate::TriState;
