pub mod builtin;
pub mod names;
pub mod normalize;
pub mod segment;

pub use names::{DatabaseError, NameDatabase};
pub use normalize::{fold_ascii, normalize, InvalidInputError, Lookup, NormalizedName};
pub use segment::{ParsedName, Segmenter};
