pub mod colors;
pub mod date;
pub mod formatting;
pub mod time;

pub use formatting::balance_label;
pub use formatting::hours2readable;
