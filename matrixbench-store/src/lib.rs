//! matrixbench Store - Named matrices, history and persistence
//!
//! - `MatrixStore`: name → matrix mapping with an operation history
//! - `HistoryLog`: append-only log of operation descriptions
//! - `persist`: plain-text matrix files and history exports

mod store;
mod history;
pub mod persist;

pub use store::MatrixStore;
pub use history::HistoryLog;
pub use persist::PersistError;
