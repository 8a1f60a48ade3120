use crate::{Book, Genre, ALL_GENRES};

/// Pure filter state for the catalog page.
///
/// Holds the book list fetched from the backend and a derived visible
/// subsequence, recomputed from the full list on every criterion change
/// rather than patched incrementally. Genre selection and title search are
/// mutually exclusive: applying either one resets the other.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogFilter {
    books: Vec<Book>,
    filtered: Vec<Book>,
    selected_genre: Option<Genre>,
    query: String,
}

impl CatalogFilter {
    /// Create a filter over the full book list. Everything is visible until
    /// a criterion is applied.
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            filtered: books.clone(),
            books,
            selected_genre: None,
            query: String::new(),
        }
    }

    /// Select a genre, clearing any active search.
    ///
    /// The "All Genres" sentinel restores the full list; any other genre
    /// keeps the books whose genre name matches exactly, in original order.
    pub fn select_genre(&mut self, genre: &Genre) {
        self.selected_genre = Some(genre.clone());
        self.query.clear();
        self.filtered = if genre.name == ALL_GENRES {
            self.books.clone()
        } else {
            self.books
                .iter()
                .filter(|b| b.genre == genre.name)
                .cloned()
                .collect()
        };
    }

    /// Search by title prefix, clearing any active genre selection.
    ///
    /// Matching is case-insensitive and anchored at the start of the title,
    /// so the empty query matches everything.
    pub fn search(&mut self, query: &str) {
        self.query = query.to_string();
        self.selected_genre = None;
        let needle = query.to_lowercase();
        self.filtered = self
            .books
            .iter()
            .filter(|b| b.title.to_lowercase().starts_with(&needle))
            .cloned()
            .collect();
    }

    /// Currently visible books.
    pub fn visible(&self) -> &[Book] {
        &self.filtered
    }

    /// Number of currently visible books.
    pub fn visible_count(&self) -> usize {
        self.filtered.len()
    }

    /// Active genre selection, if any.
    pub fn selected_genre(&self) -> Option<&Genre> {
        self.selected_genre.as_ref()
    }

    /// Active search query (empty when none).
    pub fn query(&self) -> &str {
        &self.query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: &str, title: &str, genre: &str) -> Book {
        Book {
            id: id.into(),
            title: title.into(),
            subtitle: String::new(),
            genre: genre.into(),
            format: String::new(),
            release_date: String::new(),
            author: String::new(),
            price: 0.0,
            publisher_rrp: 0.0,
            pages: 0,
            description: String::new(),
            dimensions: String::new(),
            wish_list: false,
            isbn: String::new(),
            publisher: String::new(),
            cover_url: None,
        }
    }

    fn genre(name: &str) -> Genre {
        Genre {
            id: format!("genre-{name}"),
            name: name.into(),
        }
    }

    fn sample() -> CatalogFilter {
        CatalogFilter::new(vec![
            book("1", "Dune", "Fiction"),
            book("2", "Dusk", "Fiction"),
            book("3", "Moby Dick", "Poetry"),
        ])
    }

    fn titles(filter: &CatalogFilter) -> Vec<&str> {
        filter.visible().iter().map(|b| b.title.as_str()).collect()
    }

    #[test]
    fn test_everything_visible_initially() {
        let f = sample();
        assert_eq!(f.visible_count(), 3);
        assert_eq!(f.selected_genre(), None);
        assert_eq!(f.query(), "");
    }

    #[test]
    fn test_select_genre_keeps_matching_books_in_order() {
        let mut f = sample();
        f.select_genre(&genre("Fiction"));
        assert_eq!(titles(&f), vec!["Dune", "Dusk"]);
        assert!(f.visible().iter().all(|b| b.genre == "Fiction"));
    }

    #[test]
    fn test_all_genres_restores_full_list() {
        let mut f = sample();
        f.select_genre(&genre("Poetry"));
        assert_eq!(f.visible_count(), 1);
        f.select_genre(&genre(ALL_GENRES));
        assert_eq!(titles(&f), vec!["Dune", "Dusk", "Moby Dick"]);
    }

    #[test]
    fn test_all_genres_is_still_an_active_selection() {
        let mut f = sample();
        f.select_genre(&genre(ALL_GENRES));
        assert_eq!(f.selected_genre().map(|g| g.name.as_str()), Some(ALL_GENRES));
    }

    #[test]
    fn test_search_matches_title_prefix() {
        let mut f = sample();
        f.search("du");
        assert_eq!(titles(&f), vec!["Dune", "Dusk"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let mut f = sample();
        f.search("MOBY");
        assert_eq!(titles(&f), vec!["Moby Dick"]);
    }

    #[test]
    fn test_search_is_prefix_not_substring() {
        let mut f = sample();
        f.search("dick");
        assert!(f.visible().is_empty());
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let mut f = sample();
        f.search("du");
        f.search("");
        assert_eq!(f.visible_count(), 3);
    }

    #[test]
    fn test_search_clears_genre_selection() {
        let mut f = sample();
        f.select_genre(&genre("Fiction"));
        f.search("mo");
        assert_eq!(f.selected_genre(), None);
        assert_eq!(titles(&f), vec!["Moby Dick"]);
    }

    #[test]
    fn test_select_genre_clears_query() {
        let mut f = sample();
        f.search("du");
        f.select_genre(&genre("Poetry"));
        assert_eq!(f.query(), "");
        assert_eq!(titles(&f), vec!["Moby Dick"]);
    }

    #[test]
    fn test_unknown_genre_matches_nothing() {
        let mut f = sample();
        f.select_genre(&genre("Cookbooks"));
        assert!(f.visible().is_empty());
    }

    #[test]
    fn test_empty_base_operations_are_noops() {
        let mut f = CatalogFilter::default();
        f.select_genre(&genre("Fiction"));
        assert!(f.visible().is_empty());
        f.search("du");
        assert!(f.visible().is_empty());
    }
}
