//! Filesystem adapters: the real disk, and an in-memory fake for tests.

mod local;
mod memory;

pub use local::LocalFilesystem;
pub use memory::MemoryFilesystem;
