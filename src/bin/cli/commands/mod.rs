pub mod add;
pub mod clear;
pub mod export;
pub mod import;
pub mod list;
pub mod reset;
pub mod stats;
pub mod study;
