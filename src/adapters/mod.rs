pub mod local_directory_store;

pub use local_directory_store::LocalDirectoryStore;
