pub mod date;
pub mod formatting;
pub mod path;
pub mod table;
pub mod time;

pub use formatting::mins2readable;
pub use formatting::truncate_chars;
