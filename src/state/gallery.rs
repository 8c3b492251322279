/// Gallery model and bounded navigation
///
/// A `Gallery` is a fixed, non-empty list of artworks. Which one is on
/// screen is tracked separately by a `GalleryState`, a small `Copy` value
/// that moves through pure `previous`/`next` transitions. Navigation stops
/// at both ends instead of wrapping.

use std::num::NonZeroUsize;
use thiserror::Error;

/// Opaque reference to an artwork image (an asset name such as `kotlin_1`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

/// Caption shown under an artwork
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caption {
    pub title: String,
    pub artist: String,
    pub year: String,
}

impl Caption {
    pub fn new(title: impl Into<String>, artist: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            year: year.into(),
        }
    }
}

/// A single artwork in the gallery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    pub image: ImageRef,
    pub title: String,
    pub artist: String,
    pub year: String,
}

impl GalleryItem {
    fn from_parts(image: ImageRef, caption: Caption) -> Self {
        Self {
            image,
            title: caption.title,
            artist: caption.artist,
            year: caption.year,
        }
    }
}

/// Errors raised while assembling a gallery
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GalleryError {
    #[error("a gallery needs at least one item")]
    Empty,

    #[error("{images} images but {captions} captions")]
    LengthMismatch { images: usize, captions: usize },
}

/// Immutable, ordered, non-empty collection of artworks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    items: Vec<GalleryItem>,
}

impl Gallery {
    pub fn new(items: Vec<GalleryItem>) -> Result<Self, GalleryError> {
        if items.is_empty() {
            return Err(GalleryError::Empty);
        }
        Ok(Self { items })
    }

    /// Build a gallery from parallel image and caption lists
    ///
    /// Both lists must have the same length; entry `i` of one describes
    /// entry `i` of the other.
    pub fn from_parts(images: Vec<ImageRef>, captions: Vec<Caption>) -> Result<Self, GalleryError> {
        if images.len() != captions.len() {
            return Err(GalleryError::LengthMismatch {
                images: images.len(),
                captions: captions.len(),
            });
        }

        let items = images
            .into_iter()
            .zip(captions)
            .map(|(image, caption)| GalleryItem::from_parts(image, caption))
            .collect();

        Self::new(items)
    }

    pub fn item_count(&self) -> NonZeroUsize {
        // `new` rejects empty lists
        NonZeroUsize::new(self.items.len()).unwrap_or(NonZeroUsize::MIN)
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    /// Fresh navigation state positioned on the first item
    pub fn start(&self) -> GalleryState {
        GalleryState::new(self.item_count())
    }

    /// The item `state` points at
    ///
    /// A state built for a larger gallery is clamped to the last item.
    pub fn current(&self, state: GalleryState) -> &GalleryItem {
        let last = self.items.len() - 1;
        &self.items[state.current_index().min(last)]
    }
}

/// A navigation request from the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Previous,
    Next,
}

/// Cursor into a gallery of `item_count` items
///
/// Invariant: `current_index < item_count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryState {
    current_index: usize,
    item_count: NonZeroUsize,
}

impl GalleryState {
    pub fn new(item_count: NonZeroUsize) -> Self {
        Self {
            current_index: 0,
            item_count,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn item_count(&self) -> usize {
        self.item_count.get()
    }

    /// 1-based position for display, e.g. `(2, 5)`
    pub fn position(&self) -> (usize, usize) {
        (self.current_index + 1, self.item_count())
    }

    pub fn is_first(&self) -> bool {
        self.current_index == 0
    }

    pub fn is_last(&self) -> bool {
        self.current_index == self.item_count() - 1
    }

    /// Step back one item; no-op on the first item
    #[must_use]
    pub fn previous(self) -> Self {
        if self.is_first() {
            return self;
        }
        Self {
            current_index: self.current_index - 1,
            ..self
        }
    }

    /// Step forward one item; no-op on the last item
    #[must_use]
    pub fn next(self) -> Self {
        if self.is_last() {
            return self;
        }
        Self {
            current_index: self.current_index + 1,
            ..self
        }
    }

    #[must_use]
    pub fn apply(self, navigation: Navigation) -> Self {
        match navigation {
            Navigation::Previous => self.previous(),
            Navigation::Next => self.next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample(count: usize) -> Gallery {
        let images = (0..count).map(|i| ImageRef::new(format!("art_{i}"))).collect();
        let captions = (0..count)
            .map(|i| Caption::new(format!("Title {i}"), "Artist", "2024"))
            .collect();
        Gallery::from_parts(images, captions).unwrap()
    }

    fn count(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_starts_at_first_item() {
        let gallery = sample(5);
        let state = gallery.start();
        assert_eq!(state.current_index(), 0);
        assert!(state.is_first());
        assert!(!state.is_last());
        assert_eq!(gallery.current(state).title, "Title 0");
    }

    #[test]
    fn test_three_next_one_previous() {
        let state = GalleryState::new(count(5)).next().next().next().previous();
        assert_eq!(state.current_index(), 2);
        assert!(!state.is_first());
        assert_eq!(state.position(), (3, 5));
    }

    #[test]
    fn test_previous_at_start_is_noop() {
        let state = GalleryState::new(count(5));
        assert_eq!(state.previous(), state);
        assert_eq!(state.previous().previous().previous(), state);
    }

    #[test]
    fn test_next_at_end_is_noop() {
        let mut state = GalleryState::new(count(5));
        for _ in 0..4 {
            state = state.next();
        }
        assert!(state.is_last());
        assert_eq!(state.current_index(), 4);
        assert_eq!(state.next(), state);
        assert_eq!(state.next().next(), state);
    }

    #[test]
    fn test_single_item_gallery() {
        let state = GalleryState::new(count(1));
        assert!(state.is_first() && state.is_last());
        assert_eq!(state.next(), state);
        assert_eq!(state.previous(), state);
    }

    #[test]
    fn test_current_follows_state() {
        let gallery = sample(3);
        let state = gallery.start().apply(Navigation::Next);
        assert_eq!(gallery.current(state).image.name(), "art_1");
        let state = state.apply(Navigation::Previous);
        assert_eq!(gallery.current(state).image.name(), "art_0");
    }

    #[test]
    fn test_current_clamps_foreign_state() {
        let small = sample(2);
        let mut state = sample(5).start();
        for _ in 0..4 {
            state = state.next();
        }
        assert_eq!(small.current(state).title, "Title 1");
    }

    #[test]
    fn test_rejects_empty_gallery() {
        assert_eq!(Gallery::new(Vec::new()), Err(GalleryError::Empty));
        assert_eq!(
            Gallery::from_parts(Vec::new(), Vec::new()),
            Err(GalleryError::Empty)
        );
    }

    #[test]
    fn test_rejects_mismatched_lists() {
        let images = vec![ImageRef::new("a"), ImageRef::new("b")];
        let captions = vec![Caption::new("A", "x", "2020")];
        assert_eq!(
            Gallery::from_parts(images, captions),
            Err(GalleryError::LengthMismatch { images: 2, captions: 1 })
        );
    }

    proptest! {
        #[test]
        fn index_stays_in_bounds(n in 1usize..20, moves in prop::collection::vec(any::<bool>(), 0..100)) {
            let mut state = GalleryState::new(count(n));
            for forward in moves {
                let before = state.current_index();
                state = if forward { state.next() } else { state.previous() };
                prop_assert!(state.current_index() < n);
                // Each step moves at most one position
                prop_assert!(state.current_index().abs_diff(before) <= 1);
                prop_assert_eq!(state.item_count(), n);
            }
        }

        #[test]
        fn ends_are_sticky(n in 1usize..20, repeats in 1usize..10) {
            let first = GalleryState::new(count(n));
            let mut last = first;
            for _ in 0..n {
                last = last.next();
            }
            prop_assert_eq!(last.current_index(), n - 1);

            let (mut at_first, mut at_last) = (first, last);
            for _ in 0..repeats {
                at_first = at_first.previous();
                at_last = at_last.next();
            }
            prop_assert_eq!(at_first, first);
            prop_assert_eq!(at_last, last);
        }
    }
}
