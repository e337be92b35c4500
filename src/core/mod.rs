pub mod formatter;
pub mod renderer;

pub use formatter::{DisplayPair, ResponseFormatter};
pub use renderer::{ItemListRenderer, QueryMode, general_error};
