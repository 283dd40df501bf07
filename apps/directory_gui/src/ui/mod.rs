//! UI layer for the directory GUI: app shell, employee table, and dialogs.

pub mod app;
pub mod dialogs;
pub mod table;

pub use app::DirectoryApp;
