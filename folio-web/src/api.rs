use folio_ui::display_types::{Book, Genre};
use serde::Deserialize;
use tracing::warn;

/// Wire format for a book record from `/api/books`
#[derive(Deserialize)]
struct ApiBook {
    id: String,
    title: String,
    subtitle: String,
    #[serde(rename = "type")]
    book_type: String,
    format: String,
    #[serde(rename = "releaseDate")]
    release_date: String,
    author: String,
    price: f64,
    #[serde(rename = "publisherRRP")]
    publisher_rrp: f64,
    pages: i32,
    description: String,
    dimensions: String,
    #[serde(rename = "wishList")]
    wish_list: bool,
    isbn: String,
    publisher: String,
}

/// Wire format for a genre record from `/api/genres`
#[derive(Deserialize)]
struct ApiGenre {
    id: String,
    name: String,
}

/// Cover images are served alongside the app, keyed by ISBN.
fn cover_url_for(isbn: &str) -> Option<String> {
    if isbn.is_empty() {
        None
    } else {
        Some(format!("/images/{isbn}.jpg"))
    }
}

fn to_book(record: ApiBook) -> Book {
    let cover_url = cover_url_for(&record.isbn);
    Book {
        id: record.id,
        title: record.title,
        subtitle: record.subtitle,
        genre: record.book_type,
        format: record.format,
        release_date: record.release_date,
        author: record.author,
        price: record.price,
        publisher_rrp: record.publisher_rrp,
        pages: record.pages,
        description: record.description,
        dimensions: record.dimensions,
        wish_list: record.wish_list,
        isbn: record.isbn,
        publisher: record.publisher,
        cover_url,
    }
}

fn to_genre(record: ApiGenre) -> Genre {
    Genre {
        id: record.id,
        name: record.name,
    }
}

/// Fetch the full book list
pub async fn fetch_books() -> Result<Vec<Book>, String> {
    let resp = reqwest::get("/api/books")
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    if !resp.status().is_success() {
        warn!("books fetch failed: {}", resp.status());
        return Err(format!("Server error: {}", resp.status()));
    }

    let records: Vec<ApiBook> = resp.json().await.map_err(|e| format!("Parse error: {e}"))?;
    Ok(records.into_iter().map(to_book).collect())
}

/// Fetch the genre list (includes the "All Genres" entry)
pub async fn fetch_genres() -> Result<Vec<Genre>, String> {
    let resp = reqwest::get("/api/genres")
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    if !resp.status().is_success() {
        warn!("genres fetch failed: {}", resp.status());
        return Err(format!("Server error: {}", resp.status()));
    }

    let records: Vec<ApiGenre> = resp.json().await.map_err(|e| format!("Parse error: {e}"))?;
    Ok(records.into_iter().map(to_genre).collect())
}

/// Fetch a single book by id.
///
/// The backend only exposes the collection endpoint, so this re-fetches the
/// list and selects from it.
pub async fn fetch_book(book_id: &str) -> Result<Book, String> {
    let books = fetch_books().await?;
    books
        .into_iter()
        .find(|b| b.id == book_id)
        .ok_or_else(|| "Book not found.".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOOK_JSON: &str = r#"{
        "id": "b-1",
        "title": "The Sea Garden",
        "subtitle": "A novel",
        "type": "Fiction",
        "format": "Paperback",
        "releaseDate": "2021-05-03",
        "author": "M. Laurent",
        "price": 18.5,
        "publisherRRP": 24.99,
        "pages": 312,
        "description": "A family secret resurfaces on the Brittany coast.",
        "dimensions": "198x129mm",
        "wishList": true,
        "isbn": "9780000000001",
        "publisher": "Harbor Press"
    }"#;

    #[test]
    fn book_wire_format_maps_to_display_type() {
        let record: ApiBook = serde_json::from_str(BOOK_JSON).unwrap();
        let book = to_book(record);

        assert_eq!(book.id, "b-1");
        assert_eq!(book.genre, "Fiction");
        assert_eq!(book.release_date, "2021-05-03");
        assert_eq!(book.publisher_rrp, 24.99);
        assert_eq!(book.pages, 312);
        assert!(book.wish_list);
        assert_eq!(
            book.cover_url.as_deref(),
            Some("/images/9780000000001.jpg")
        );
    }

    #[test]
    fn cover_url_requires_an_isbn() {
        assert_eq!(cover_url_for(""), None);
        assert_eq!(cover_url_for("12345").as_deref(), Some("/images/12345.jpg"));
    }

    #[test]
    fn genre_wire_format_maps_to_display_type() {
        let record: ApiGenre =
            serde_json::from_str(r#"{"id":"g-0","name":"All Genres"}"#).unwrap();
        let genre = to_genre(record);

        assert_eq!(genre.id, "g-0");
        assert_eq!(genre.name, folio_common::ALL_GENRES);
    }
}
