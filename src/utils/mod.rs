pub mod key2user;
pub mod misc;
pub mod prompt;
