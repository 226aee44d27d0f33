use super::Surface;
use crate::connections::Connection;
use crate::particle::Particle;

/// One recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear { width: f64, height: f64 },
    Line(Connection),
    Sphere(Particle),
}

/// Headless [`Surface`] that records every call in order.  Used by the
/// animator and reducer tests, which run without a browser.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> impl Iterator<Item = &Connection> {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Line(line) => Some(line),
            _ => None,
        })
    }

    pub fn spheres(&self) -> impl Iterator<Item = &Particle> {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Sphere(p) => Some(p),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.calls.push(DrawCall::Clear { width, height });
    }

    fn line(&mut self, connection: &Connection) {
        self.calls.push(DrawCall::Line(*connection));
    }

    fn sphere(&mut self, particle: &Particle) {
        self.calls.push(DrawCall::Sphere(*particle));
    }
}
