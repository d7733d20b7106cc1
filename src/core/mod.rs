pub mod logic;
pub mod schema;
pub mod series;
pub mod sessions;
pub mod target;
pub mod window;
