//! Test doubles shared by the integration tests.

mod mock_book_store;

#[allow(unused_imports)]
pub use mock_book_store::MockBookStore;
