//! Page-space geometry
//!
//! Coordinates follow the page: `x` grows rightward, `y` grows downward.
//! The viewport is the window onto the page at the current scroll offset.

/// An axis-aligned rectangle in page coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// The zero rectangle. Used for detached elements that have no layout.
    pub const ZERO: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// True when the rect encloses no area (zero-sized or degenerate)
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Overlapping region of two rects, or `Rect::ZERO` when disjoint
    pub fn intersection(&self, other: &Rect) -> Rect {
        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if right <= left || bottom <= top {
            return Rect::ZERO;
        }

        Rect::new(left, top, right - left, bottom - top)
    }
}

/// The visible window onto the page
///
/// Scroll offsets move the window across page space; `rect()` is the
/// window expressed in the same coordinates as element rects.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub scroll_x: f32,
    pub scroll_y: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Viewport at the top of the page
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            scroll_x: 0.0,
            scroll_y: 0.0,
            width,
            height,
        }
    }

    /// The window as a page-space rect
    pub fn rect(&self) -> Rect {
        Rect::new(self.scroll_x, self.scroll_y, self.width, self.height)
    }

    pub fn scroll_to(&mut self, x: f32, y: f32) {
        self.scroll_x = x;
        self.scroll_y = y;
    }

    /// Vertical scroll, the common case for a stacked page
    pub fn set_scroll_y(&mut self, y: f32) {
        self.scroll_y = y;
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Fraction of `target`'s area inside the viewport, in `0.0..=1.0`
    ///
    /// A zero-sized target measures 0.0: an element with no layout can
    /// never intersect, it does not error.
    pub fn visible_fraction(&self, target: &Rect) -> f32 {
        if target.is_empty() {
            return 0.0;
        }

        let overlap = self.rect().intersection(target);
        (overlap.area() / target.area()).clamp(0.0, 1.0)
    }
}
