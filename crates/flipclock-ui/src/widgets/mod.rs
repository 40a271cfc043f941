pub mod clock;
pub mod digit;
pub mod separator;
