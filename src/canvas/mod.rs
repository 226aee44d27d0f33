pub mod recording;
pub mod renderer;
pub mod shapes;

use crate::connections::Connection;
use crate::particle::Particle;

pub use recording::{DrawCall, RecordingSurface};
pub use renderer::CanvasSurface;

/// Drawing target for one frame.  Drawing is best-effort: implementations
/// swallow host errors instead of interrupting the frame.
pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    fn line(&mut self, connection: &Connection);
    fn sphere(&mut self, particle: &Particle);
}
