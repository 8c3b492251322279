/// State management module
///
/// This module holds everything the screens compute with, independent of
/// any widget code:
/// - Tip calculation (tip.rs)
/// - Locale currency formatting (currency.rs)
/// - Gallery model and bounded navigation (gallery.rs)
/// - The shipped artwork catalog (data.rs)
/// - User settings (settings.rs)

pub mod currency;
pub mod data;
pub mod gallery;
pub mod settings;
pub mod tip;
