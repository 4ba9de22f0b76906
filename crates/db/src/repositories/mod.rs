//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods.
//! Single-statement methods accept any [`sqlx::SqliteExecutor`] so they run
//! equally against the pool or inside a caller-owned transaction; multi-step
//! operations take `&DbPool` and open their own transaction.

pub mod category_repo;
pub mod note_repo;

pub use category_repo::CategoryRepo;
pub use note_repo::NoteRepo;
