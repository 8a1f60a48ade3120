/// Reserved genre name meaning "no genre filtering".
///
/// The backend includes this entry in the genre list it serves; it is never
/// constructed locally.
pub const ALL_GENRES: &str = "All Genres";

/// Book display info
///
/// One record from `/api/books`, with `cover_url` already derived from the
/// ISBN by the API layer.
#[derive(Clone, Debug, PartialEq)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    /// Genre name (the backend calls this field `type`). Expected to match
    /// exactly one `Genre.name`; the backend guarantees the correspondence.
    pub genre: String,
    pub format: String,
    /// ISO date string, `YYYY-MM-DD`
    pub release_date: String,
    pub author: String,
    pub price: f64,
    pub publisher_rrp: f64,
    pub pages: i32,
    pub description: String,
    pub dimensions: String,
    pub wish_list: bool,
    pub isbn: String,
    pub publisher: String,
    /// None when the book has no ISBN to key an image on
    pub cover_url: Option<String>,
}

/// Genre display info
#[derive(Clone, Debug, PartialEq)]
pub struct Genre {
    pub id: String,
    pub name: String,
}
