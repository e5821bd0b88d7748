pub mod add;
pub mod clear;
pub mod delete;
pub mod list;
pub mod random;
pub mod tui;
