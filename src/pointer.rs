/// Last observed cursor position.  `None` until the first pointer move, in
/// which case nothing gets a proximity boost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    pub position: Option<(f64, f64)>,
    pub radius: f64,
}

impl PointerState {
    pub fn new(radius: f64) -> Self {
        PointerState {
            position: None,
            radius,
        }
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.position = Some((x, y));
    }

    /// Distance from the pointer to `(x, y)`, if the pointer has been seen.
    pub fn distance_to(&self, x: f64, y: f64) -> Option<f64> {
        self.position.map(|(px, py)| (x - px).hypot(y - py))
    }
}
