//! In-memory book store and the Repository methods guarding it

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook, UpdateBook},
};
use validator::Validate;

use super::Repository;

const MISSING_FIELDS: &str = "Missing title or author in request body.";

/// Ordered collection of books with a monotonic id allocator.
///
/// Ids are handed out from `next_id` only, so a deleted id is never assigned again.
#[derive(Debug, Clone)]
pub struct BookStore {
    books: Vec<Book>,
    // wider than `Book::id` so the counter itself can never wrap
    next_id: i64,
}

impl BookStore {
    /// Store holding `books` in the given order; allocation resumes after the highest id.
    pub fn with_books(books: Vec<Book>) -> Self {
        let next_id = books.iter().map(|b| i64::from(b.id)).max().unwrap_or(0) + 1;
        Self { books, next_id }
    }

    /// Store holding the three records every fresh process starts with
    pub fn seeded() -> Self {
        Self::with_books(vec![
            Book::new(1, "The Great Gatsby", "F. Scott Fitzgerald"),
            Book::new(2, "To Kill a Mockingbird", "Harper Lee"),
            Book::new(3, "1984", "George Orwell"),
        ])
    }

    pub fn list(&self) -> &[Book] {
        &self.books
    }

    /// Append a new book. Title and author must both be present and non-empty.
    pub fn create(&mut self, data: CreateBook) -> AppResult<Book> {
        data.validate()
            .map_err(|_| AppError::Validation(MISSING_FIELDS.to_string()))?;

        let (Some(title), Some(author)) = (data.title, data.author) else {
            return Err(AppError::Validation(MISSING_FIELDS.to_string()));
        };

        let id = i32::try_from(self.next_id)
            .map_err(|_| AppError::Internal("Book id space exhausted".to_string()))?;
        let book = Book { id, title, author };
        self.next_id += 1;
        self.books.push(book.clone());
        Ok(book)
    }

    /// Replace the book in place. Omitted fields keep their value; empty strings are stored as given.
    pub fn update(&mut self, id: i32, data: UpdateBook) -> AppResult<Book> {
        let book = self
            .books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| not_found(id))?;

        if let Some(title) = data.title {
            book.title = title;
        }
        if let Some(author) = data.author {
            book.author = author;
        }
        Ok(book.clone())
    }

    pub fn delete(&mut self, id: i32) -> AppResult<()> {
        let index = self
            .books
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| not_found(id))?;
        self.books.remove(index);
        Ok(())
    }
}

impl Default for BookStore {
    fn default() -> Self {
        Self::seeded()
    }
}

pub(crate) fn not_found(id: impl std::fmt::Display) -> AppError {
    AppError::NotFound(format!("Book with ID {} not found.", id))
}

impl Repository {
    /// List all books in insertion order
    pub async fn books_list(&self) -> Vec<Book> {
        self.books.read().await.list().to_vec()
    }

    /// Create a book
    pub async fn books_create(&self, data: CreateBook) -> AppResult<Book> {
        self.books.write().await.create(data)
    }

    /// Update a book
    pub async fn books_update(&self, id: i32, data: UpdateBook) -> AppResult<Book> {
        self.books.write().await.update(id, data)
    }

    /// Delete a book
    pub async fn books_delete(&self, id: i32) -> AppResult<()> {
        self.books.write().await.delete(id)
    }
}
