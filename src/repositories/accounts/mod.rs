pub mod account_store;
pub mod account_repo;
#[cfg(test)]
pub mod memory_store;

pub use account_store::*;
pub use account_repo::*;
#[cfg(test)]
pub use memory_store::MemoryAccountStore;
