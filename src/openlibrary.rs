//! Open Library Lookup
//!
//! Seeds catalog entries from the public Open Library edition API.

use serde::Deserialize;

use crate::catalog::CatalogBook;
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct AuthorRef {
    key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct AuthorRecord {
    name: Option<String>,
}

/// `description` is either plain text or a typed `{type, value}` object
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
enum Description {
    Text(String),
    Typed { value: String },
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
struct EditionRecord {
    title: Option<String>,
    authors: Vec<AuthorRef>,
    description: Option<Description>,
    subjects: Vec<String>,
}

/// Subjects without their trailing period; `["Unknown"]` when there are none
fn clean_subjects(subjects: &[String]) -> Vec<String> {
    let cleaned: Vec<String> = subjects
        .iter()
        .map(|s| s.strip_suffix('.').unwrap_or(s).trim().to_string())
        .collect();
    if cleaned.is_empty() { vec!["Unknown".to_string()] } else { cleaned }
}

fn into_catalog_book(edition: EditionRecord, author_names: Vec<String>, cover_image: String) -> CatalogBook {
    let synopsis = match edition.description {
        Some(Description::Text(text)) => text,
        Some(Description::Typed { value }) => value,
        None => "N/A".to_string(),
    };
    let author = author_names.join(", ");
    CatalogBook {
        title: edition.title.unwrap_or_else(|| "N/A".to_string()),
        author: if author.is_empty() { "Unknown".to_string() } else { author },
        synopsis,
        cover_image,
        genre: clean_subjects(&edition.subjects),
    }
}

#[derive(Clone, Debug)]
pub struct OpenLibraryClient {
    base: String,
    covers_base: String,
    http: reqwest::Client,
}

impl OpenLibraryClient {
    pub fn new(base: impl Into<String>, covers_base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            covers_base: covers_base.into(),
            http: reqwest::Client::new(),
        }
    }

    pub fn cover_url(&self, isbn: &str) -> String {
        format!("{}/b/isbn/{}-L.jpg", self.covers_base, isbn)
    }

    /// `Ok(None)` when Open Library has no edition for `isbn`
    pub async fn lookup_isbn(&self, isbn: &str) -> Result<Option<CatalogBook>, AppError> {
        let resp = self.http.get(format!("{}/isbn/{}.json", self.base, isbn)).send().await?;
        if !resp.status().is_success() {
            tracing::info!("[OPENLIBRARY] {} -> status {}", isbn, resp.status().as_u16());
            return Ok(None);
        }
        let edition: EditionRecord = resp.json().await?;

        let mut author_names = Vec::new();
        for key in edition.authors.iter().filter_map(|a| a.key.as_deref()) {
            let author: AuthorRecord = self
                .http
                .get(format!("{}{}.json", self.base, key))
                .send()
                .await?
                .json()
                .await?;
            if let Some(name) = author.name {
                author_names.push(name);
            }
        }

        Ok(Some(into_catalog_book(edition, author_names, self.cover_url(isbn))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_typed_description() {
        let edition: EditionRecord = serde_json::from_str(r#"{
            "title": "Emma",
            "authors": [{"key": "/authors/OL21594A"}],
            "description": {"type": "/type/text", "value": "A comedy of manners."},
            "subjects": ["Fiction.", " Match-making "]
        }"#).unwrap();
        let book = into_catalog_book(edition, vec!["Jane Austen".to_string()], "cover.jpg".to_string());
        assert_eq!(book.title, "Emma");
        assert_eq!(book.author, "Jane Austen");
        assert_eq!(book.synopsis, "A comedy of manners.");
        assert_eq!(book.genre, vec!["Fiction", "Match-making"]);
        assert_eq!(book.cover_image, "cover.jpg");
    }

    #[test]
    fn test_sparse_edition_gets_placeholders() {
        let edition: EditionRecord = serde_json::from_str(r#"{"publishers": ["Penguin"]}"#).unwrap();
        let book = into_catalog_book(edition, vec![], String::new());
        assert_eq!(book.title, "N/A");
        assert_eq!(book.author, "Unknown");
        assert_eq!(book.synopsis, "N/A");
        assert_eq!(book.genre, vec!["Unknown"]);
    }

    #[test]
    fn test_plain_description_and_multiple_authors() {
        let edition: EditionRecord = serde_json::from_str(r#"{"title":"Good Omens","description":"Armageddon."}"#).unwrap();
        let book = into_catalog_book(edition, vec!["Terry Pratchett".into(), "Neil Gaiman".into()], String::new());
        assert_eq!(book.synopsis, "Armageddon.");
        assert_eq!(book.author, "Terry Pratchett, Neil Gaiman");
    }

    #[test]
    fn test_cover_url() {
        let client = OpenLibraryClient::new("https://openlibrary.org", "https://covers.openlibrary.org");
        assert_eq!(client.cover_url("9780141439518"), "https://covers.openlibrary.org/b/isbn/9780141439518-L.jpg");
    }
}
