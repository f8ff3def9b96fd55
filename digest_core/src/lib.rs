pub mod ai;
pub mod comments;
pub mod formatter;
pub mod helpers;
pub mod prompt;
