pub mod directed_path;
pub mod side;

pub use directed_path::{DirectedPath, DEFAULT_DELTA};
pub use side::Side;
