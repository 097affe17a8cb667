use glam::Vec2;

/// A single articulation point: position plus a nominal half-width.
///
/// `size` doubles as the silhouette half-width for renderers and as the
/// segment-length parameter for limb chains.
#[derive(Debug, Clone, Copy)]
pub struct Joint {
    pub position: Vec2,
    pub size: f32,
}

impl Joint {
    pub fn new(position: Vec2, size: f32) -> Self {
        Self { position, size }
    }
}
