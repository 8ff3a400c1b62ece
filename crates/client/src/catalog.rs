//! Catalog reads.

use bookstall_catalog::{Book, Category};
use bookstall_core::{BookId, RemoteResult};

use crate::dto::{BookDto, CategoryDto};
use crate::transport::{Auth, Http};

/// Read-only client for the public catalog endpoints.
#[derive(Clone)]
pub struct CatalogClient {
    http: Http,
}

impl CatalogClient {
    pub fn new(http: Http) -> Self {
        Self { http }
    }

    pub async fn list_books(&self) -> RemoteResult<Vec<Book>> {
        let dtos: Vec<BookDto> = self.http.get("books-store/books/", Auth::Public).await?;
        Ok(dtos.into_iter().map(Book::from).collect())
    }

    pub async fn get_book(&self, id: BookId) -> RemoteResult<Book> {
        let dto: BookDto = self
            .http
            .get(&format!("books-store/books/{id}/"), Auth::Public)
            .await?;
        Ok(dto.into())
    }

    pub async fn list_categories(&self) -> RemoteResult<Vec<Category>> {
        let dtos: Vec<CategoryDto> = self
            .http
            .get("books-store/categories/", Auth::Public)
            .await?;
        Ok(dtos.into_iter().map(Category::from).collect())
    }
}
