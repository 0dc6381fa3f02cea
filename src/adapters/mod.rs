// Adapters layer: concrete implementations of the domain ports (repositories, storage).

pub mod file;
pub mod memory;
pub mod storage;

pub use file::FilePropertyRepository;
pub use memory::InMemoryPropertyRepository;
pub use storage::LocalStorage;
