pub mod mock_storage;

pub use mock_storage::MockStorage;
