/// Artwork images for the gallery
///
/// Image references are resolved to `<asset_dir>/<name>.png` once at
/// startup. Anything missing is drawn as a generated placeholder instead.
use iced::widget::canvas::{self, Path, Stroke};
use iced::widget::image;
use iced::{Color, Point, Rectangle, Size};
use std::collections::HashMap;
use std::path::{Path as FsPath, PathBuf};

use crate::state::gallery::{Gallery, ImageRef};
use crate::Message;

/// Resolved image handles for every artwork found on disk
#[derive(Debug, Clone, Default)]
pub struct ArtworkLibrary {
    handles: HashMap<ImageRef, image::Handle>,
}

impl ArtworkLibrary {
    /// Look up every gallery image in `dir`
    pub fn load(dir: &FsPath, gallery: &Gallery) -> Self {
        let mut handles = HashMap::new();

        for item in gallery.items() {
            let path = image_path(dir, &item.image);
            if path.is_file() {
                handles.insert(item.image.clone(), image::Handle::from_path(path));
            } else {
                tracing::warn!(path = %path.display(), "artwork not found, drawing placeholder");
            }
        }

        tracing::debug!(dir = %dir.display(), found = handles.len(), "artwork resolved");
        Self { handles }
    }

    pub fn handle(&self, image: &ImageRef) -> Option<&image::Handle> {
        self.handles.get(image)
    }
}

fn image_path(dir: &FsPath, image: &ImageRef) -> PathBuf {
    dir.join(format!("{}.png", image.name()))
}

/// Colors cycled through by placeholders
const PALETTE: [Color; 5] = [
    Color { r: 0.85, g: 0.45, b: 0.20, a: 1.0 },
    Color { r: 0.55, g: 0.30, b: 0.65, a: 1.0 },
    Color { r: 0.80, g: 0.35, b: 0.45, a: 1.0 },
    Color { r: 0.20, g: 0.50, b: 0.75, a: 1.0 },
    Color { r: 0.30, g: 0.65, b: 0.40, a: 1.0 },
];

const BAR_COUNT: u32 = 12;

/// Stand-in drawing for an artwork whose file is missing
#[derive(Debug, Clone, Copy)]
pub struct Placeholder {
    seed: u32,
}

impl Placeholder {
    /// Placeholders are stable per image name
    pub fn for_image(image: &ImageRef) -> Self {
        let seed = image
            .name()
            .bytes()
            .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(u32::from(b)));
        Self { seed }
    }

    fn base_color(&self) -> Color {
        PALETTE[(self.seed % PALETTE.len() as u32) as usize]
    }

    /// Relative bar height in 0.25..0.75
    fn bar_height(&self, index: u32) -> f32 {
        let t = self.seed.wrapping_mul(7).wrapping_add(index * 37) % 100;
        0.25 + 0.5 * t as f32 / 100.0
    }
}

impl canvas::Program<Message> for Placeholder {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let width = bounds.width;
        let height = bounds.height;
        let base = self.base_color();

        frame.fill_rectangle(Point::ORIGIN, bounds.size(), Color { a: 0.35, ..base });

        // Skyline of bars along the bottom edge
        let bar_width = width / BAR_COUNT as f32;
        for i in 0..BAR_COUNT {
            let bar_height = self.bar_height(i) * height;
            frame.fill_rectangle(
                Point::new(i as f32 * bar_width, height - bar_height),
                Size::new(bar_width * 0.8, bar_height),
                base,
            );
        }

        let cross = Path::new(|builder| {
            builder.move_to(Point::ORIGIN);
            builder.line_to(Point::new(width, height));
            builder.move_to(Point::new(width, 0.0));
            builder.line_to(Point::new(0.0, height));
        });
        frame.stroke(
            &cross,
            Stroke::default()
                .with_color(Color::from_rgba(1.0, 1.0, 1.0, 0.5))
                .with_width(2.0),
        );

        vec![frame.into_geometry()]
    }
}
