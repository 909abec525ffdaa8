//! Catalog data types shared by the search session and the store client

use std::cmp::Ordering;

/// Store category filter. Each variant maps to a distinct `entity` token
/// understood by the search endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    All,
    Music,
    Software,
    Ebooks,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::All,
        Category::Music,
        Category::Software,
        Category::Ebooks,
    ];

    /// The `entity` query parameter value; empty means no entity filter.
    pub fn entity_token(self) -> &'static str {
        match self {
            Category::All => "",
            Category::Music => "musicTrack",
            Category::Software => "software",
            Category::Ebooks => "ebook",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Music => "Music",
            Category::Software => "Software",
            Category::Ebooks => "E-books",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Category::All => Category::Music,
            Category::Music => Category::Software,
            Category::Software => Category::Ebooks,
            Category::Ebooks => Category::All,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Category::All => Category::Ebooks,
            Category::Music => Category::All,
            Category::Software => Category::Music,
            Category::Ebooks => Category::Software,
        }
    }
}

/// A single item returned by a catalog search. Fields are pass-through
/// values from the store API, normalized once at the client boundary.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct SearchResult {
    pub name: String,
    pub artist: String,
    pub kind: String,
    pub price: f64,
    pub currency: String,
    pub store_url: String,
    pub artwork_small: String,
    pub artwork_large: String,
    pub genre: String,
}

impl SearchResult {
    /// Human-readable label for the raw `kind` value.
    pub fn kind_for_display(&self) -> &str {
        match self.kind.as_str() {
            "album" => "Album",
            "audiobook" => "Audio Book",
            "book" => "Book",
            "ebook" => "E-Book",
            "feature-movie" => "Movie",
            "music-video" => "Music Video",
            "podcast" => "Podcast",
            "software" => "App",
            "song" => "Song",
            "tv-episode" => "TV Episode",
            other => other,
        }
    }
}

/// Listing order: case-insensitive name ascending, ties broken by artist.
pub fn listing_order(a: &SearchResult, b: &SearchResult) -> Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.artist.to_lowercase().cmp(&b.artist.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, artist: &str) -> SearchResult {
        SearchResult {
            name: name.to_string(),
            artist: artist.to_string(),
            ..SearchResult::default()
        }
    }

    #[test]
    fn entity_tokens_are_distinct_per_category() {
        let tokens: Vec<&str> = Category::ALL.iter().map(|c| c.entity_token()).collect();
        assert_eq!(tokens, vec!["", "musicTrack", "software", "ebook"]);
    }

    #[test]
    fn category_cycling_visits_every_variant() {
        let mut current = Category::All;
        for expected in [
            Category::Music,
            Category::Software,
            Category::Ebooks,
            Category::All,
        ] {
            current = current.next();
            assert_eq!(current, expected);
        }
        assert_eq!(Category::All.prev(), Category::Ebooks);
        assert_eq!(Category::Music.prev(), Category::All);
    }

    #[test]
    fn listing_order_ignores_case_and_breaks_ties_by_artist() {
        let mut items = vec![
            result("beta", "Zed"),
            result("Alpha", "Mia"),
            result("beta", "Ada"),
        ];
        items.sort_by(listing_order);
        assert_eq!(items[0].name, "Alpha");
        assert_eq!(items[1].artist, "Ada");
        assert_eq!(items[2].artist, "Zed");
    }

    #[test]
    fn kind_display_falls_through_for_unknown_values() {
        let mut item = result("x", "y");
        item.kind = "song".to_string();
        assert_eq!(item.kind_for_display(), "Song");
        item.kind = "ringtone".to_string();
        assert_eq!(item.kind_for_display(), "ringtone");
    }
}
