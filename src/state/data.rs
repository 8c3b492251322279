/// Artwork catalog shipped with the application
///
/// Images and captions are listed separately and paired by position
/// when the gallery is built.

use super::gallery::{Caption, Gallery, GalleryError, ImageRef};

/// Asset names of the shipped artworks, in display order
const IMAGES: [&str; 5] = ["kotlin_1", "kotlin_2", "kotlin_3", "kotlin_4", "kotlin_5"];

/// (title, artist, year) for each entry of `IMAGES`
const CAPTIONS: [(&str, &str, &str); 5] = [
    ("Afrique", "IDRISS", "2024"),
    ("Danse", "NOUPEYI", "2023"),
    ("Femme", "Corein", "2022"),
    ("Ocean", "enfants", "2024"),
    ("Oiseau", "Rondelle", "2023"),
];

/// Build the gallery of shipped artworks
pub fn shipped_gallery() -> Result<Gallery, GalleryError> {
    let images = IMAGES.iter().map(|name| ImageRef::new(*name)).collect();
    let captions = CAPTIONS
        .iter()
        .map(|(title, artist, year)| Caption::new(*title, *artist, *year))
        .collect();

    Gallery::from_parts(images, captions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_gallery_has_five_items() {
        let gallery = shipped_gallery().unwrap();
        assert_eq!(gallery.item_count().get(), 5);
    }

    #[test]
    fn test_shipped_order() {
        let gallery = shipped_gallery().unwrap();
        let mut state = gallery.start();
        let mut titles = vec![gallery.current(state).title.clone()];
        while !state.is_last() {
            state = state.next();
            titles.push(gallery.current(state).title.clone());
        }
        assert_eq!(titles, ["Afrique", "Danse", "Femme", "Ocean", "Oiseau"]);

        let first = gallery.current(gallery.start());
        assert_eq!(first.image.name(), "kotlin_1");
        assert_eq!(first.artist, "IDRISS");
        assert_eq!(first.year, "2024");
    }

    #[test]
    fn test_end_to_end_navigation() {
        let gallery = shipped_gallery().unwrap();
        let state = gallery.start().next().next().next().previous();
        assert_eq!(state.current_index(), 2);
        assert_eq!(gallery.current(state).title, "Femme");
    }
}
