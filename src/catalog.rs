//! Book Catalog
//!
//! Catalog documents at `books/{isbn}` and the editable form used by the
//! admin ISBN tool.

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::firebase::{self, BOOKS};

const NOT_AVAILABLE: &str = "N/A";
const UNKNOWN: &str = "Unknown";

pub const MISSING_DETAILS: &str = "Error reading form data. Please ensure the book details are populated.";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CatalogBook {
    pub title: String,
    pub author: String,
    pub synopsis: String,
    pub cover_image: String,
    pub genre: Vec<String>,
}

/// Raw text of the editable book form
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogForm {
    pub cover: String,
    pub title: String,
    pub authors: String,
    /// Comma-separated
    pub genres: String,
    pub synopsis: String,
}

fn or_default(value: &str, fallback: &str) -> String {
    let value = value.trim();
    if value.is_empty() { fallback.to_string() } else { value.to_string() }
}

/// Split a comma-separated genre field, dropping blanks
pub fn split_genres(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|g| g.trim())
        .filter(|g| !g.is_empty())
        .map(String::from)
        .collect()
}

impl CatalogForm {
    pub fn from_book(book: &CatalogBook) -> Self {
        Self {
            cover: book.cover_image.clone(),
            title: book.title.clone(),
            authors: book.author.clone(),
            genres: book.genre.join(", "),
            synopsis: book.synopsis.clone(),
        }
    }

    /// Form contents with placeholders for blank fields
    pub fn to_book(&self) -> CatalogBook {
        let genres = split_genres(&self.genres);
        CatalogBook {
            title: or_default(&self.title, NOT_AVAILABLE),
            author: or_default(&self.authors, UNKNOWN),
            synopsis: or_default(&self.synopsis, NOT_AVAILABLE),
            cover_image: or_default(&self.cover, NOT_AVAILABLE),
            genre: if genres.is_empty() { vec![UNKNOWN.to_string()] } else { genres },
        }
    }

    /// Adding a new book needs a real title and author
    pub fn to_new_book(&self) -> Result<CatalogBook, &'static str> {
        if self.title.trim().is_empty() || self.authors.trim().is_empty() {
            return Err(MISSING_DETAILS);
        }
        Ok(self.to_book())
    }
}

/// Trim and strip hyphens; `None` when nothing is left
pub fn normalize_isbn(input: &str) -> Option<String> {
    let isbn: String = input.trim().chars().filter(|c| *c != '-').collect();
    if isbn.is_empty() { None } else { Some(isbn) }
}

pub async fn load_book(isbn: &str) -> Result<Option<CatalogBook>, AppError> {
    firebase::get_document(BOOKS, isbn).await
}

pub async fn save_book(isbn: &str, book: &CatalogBook) -> Result<(), AppError> {
    firebase::set_document(BOOKS, isbn, book, true).await
}

pub async fn update_book(isbn: &str, book: &CatalogBook) -> Result<(), AppError> {
    firebase::update_document(BOOKS, isbn, book).await
}

pub async fn delete_book(isbn: &str) -> Result<(), AppError> {
    firebase::delete_document(BOOKS, isbn).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_isbn() {
        assert_eq!(normalize_isbn(" 978-0-14-143951-8 "), Some("9780141439518".to_string()));
        assert_eq!(normalize_isbn("  "), None);
        assert_eq!(normalize_isbn("--"), None);
    }

    #[test]
    fn test_blank_fields_get_placeholders() {
        let book = CatalogForm::default().to_book();
        assert_eq!(book.title, "N/A");
        assert_eq!(book.author, "Unknown");
        assert_eq!(book.synopsis, "N/A");
        assert_eq!(book.cover_image, "N/A");
        assert_eq!(book.genre, vec!["Unknown"]);
    }

    #[test]
    fn test_genres_are_split_and_trimmed() {
        assert_eq!(split_genres("Fantasy,  Fiction ,, Classics"), vec!["Fantasy", "Fiction", "Classics"]);
    }

    #[test]
    fn test_new_book_requires_title_and_author() {
        let mut form = CatalogForm { title: "Emma".to_string(), ..Default::default() };
        assert_eq!(form.to_new_book(), Err(MISSING_DETAILS));
        form.authors = "Jane Austen".to_string();
        let book = form.to_new_book().unwrap();
        assert_eq!(book.author, "Jane Austen");
        assert_eq!(book.synopsis, "N/A");
    }

    #[test]
    fn test_form_round_trips_book() {
        let book = CatalogBook {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            synopsis: "Spice.".to_string(),
            cover_image: "https://covers.openlibrary.org/b/isbn/1-L.jpg".to_string(),
            genre: vec!["Science Fiction".to_string(), "Classics".to_string()],
        };
        let form = CatalogForm::from_book(&book);
        assert_eq!(form.genres, "Science Fiction, Classics");
        assert_eq!(form.to_book(), book);
    }

    #[test]
    fn test_document_uses_cover_image_key() {
        let json = serde_json::to_value(CatalogForm::default().to_book()).unwrap();
        assert!(json.get("coverImage").is_some());
    }
}
