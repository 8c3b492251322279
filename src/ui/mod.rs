/// Widget code for the two screens
///
/// Views only read state and emit `Message`s; all computation lives in
/// the `state` module.

pub mod artwork;
pub mod gallery;
pub mod tip;
