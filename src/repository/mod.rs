//! Repository layer owning the in-memory book store

pub mod books;

use std::sync::Arc;
use tokio::sync::RwLock;

pub use books::BookStore;

/// Main repository struct, cheap to clone and shared across handlers
#[derive(Clone)]
pub struct Repository {
    books: Arc<RwLock<BookStore>>,
}

impl Repository {
    /// Create a new repository around the given store
    pub fn new(store: BookStore) -> Self {
        Self {
            books: Arc::new(RwLock::new(store)),
        }
    }
}
