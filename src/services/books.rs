//! Books service

use crate::{
    error::AppResult,
    models::book::{Book, CreateBook, UpdateBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Vec<Book> {
        let books = self.repository.books_list().await;
        tracing::debug!("Listing {} books", books.len());
        books
    }

    pub async fn create(&self, data: CreateBook) -> AppResult<Book> {
        let book = self.repository.books_create(data).await.map_err(|e| {
            tracing::warn!("Rejected book creation: {}", e);
            e
        })?;
        tracing::info!(id = book.id, title = %book.title, "Book created");
        Ok(book)
    }

    pub async fn update(&self, id: i32, data: UpdateBook) -> AppResult<Book> {
        let book = self.repository.books_update(id, data).await.map_err(|e| {
            tracing::debug!("Update of book {} failed: {}", id, e);
            e
        })?;
        tracing::info!(id = book.id, "Book updated");
        Ok(book)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.books_delete(id).await.map_err(|e| {
            tracing::debug!("Delete of book {} failed: {}", id, e);
            e
        })?;
        tracing::info!(id, "Book deleted");
        Ok(())
    }
}
