/// Drawable area in physical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Panics on a zero dimension: the host must never report a degenerate viewport.
    pub fn new(width: u32, height: u32) -> Self {
        assert!(
            width > 0 && height > 0,
            "degenerate viewport {width}x{height}"
        );
        Self { width, height }
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_new() {
        let viewport = Viewport::new(1920, 1080);
        assert_eq!(viewport.width, 1920);
        assert_eq!(viewport.height, 1080);
    }

    #[test]
    fn test_viewport_aspect() {
        assert_eq!(Viewport::new(800, 400).aspect(), 2.0);
        assert_eq!(Viewport::new(1, 1).aspect(), 1.0);
    }

    #[test]
    #[should_panic(expected = "degenerate viewport")]
    fn test_zero_width_is_fatal() {
        Viewport::new(0, 600);
    }

    #[test]
    #[should_panic(expected = "degenerate viewport")]
    fn test_zero_height_is_fatal() {
        Viewport::new(800, 0);
    }
}
