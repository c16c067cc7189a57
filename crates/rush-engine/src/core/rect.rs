use glam::Vec2;

/// Which point of a rectangle a position refers to.
///
/// Sprites of different frame sizes (running vs. crouching) keep a stable
/// contact point across frame changes by anchoring the same rectangle point
/// to the same simulation position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    MidTop,
    MidBottom,
    MidLeft,
    MidRight,
    Center,
}

/// Axis-aligned rectangle in float coordinates, y-down.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Place a rectangle of `size` so that its `anchor` point lies at `point`.
    pub fn anchored(anchor: Anchor, point: Vec2, size: Vec2) -> Self {
        let (w, h) = (size.x, size.y);
        let (x, y) = match anchor {
            Anchor::TopLeft => (point.x, point.y),
            Anchor::TopRight => (point.x - w, point.y),
            Anchor::BottomLeft => (point.x, point.y - h),
            Anchor::BottomRight => (point.x - w, point.y - h),
            Anchor::MidTop => (point.x - w / 2.0, point.y),
            Anchor::MidBottom => (point.x - w / 2.0, point.y - h),
            Anchor::MidLeft => (point.x, point.y - h / 2.0),
            Anchor::MidRight => (point.x - w, point.y - h / 2.0),
            Anchor::Center => (point.x - w / 2.0, point.y - h / 2.0),
        };
        Self { x, y, w, h }
    }

    /// The position of the given anchor point on this rectangle.
    pub fn point(&self, anchor: Anchor) -> Vec2 {
        match anchor {
            Anchor::TopLeft => Vec2::new(self.left(), self.top()),
            Anchor::TopRight => Vec2::new(self.right(), self.top()),
            Anchor::BottomLeft => Vec2::new(self.left(), self.bottom()),
            Anchor::BottomRight => Vec2::new(self.right(), self.bottom()),
            Anchor::MidTop => Vec2::new(self.centerx(), self.top()),
            Anchor::MidBottom => Vec2::new(self.centerx(), self.bottom()),
            Anchor::MidLeft => Vec2::new(self.left(), self.centery()),
            Anchor::MidRight => Vec2::new(self.right(), self.centery()),
            Anchor::Center => Vec2::new(self.centerx(), self.centery()),
        }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn centerx(&self) -> f32 {
        self.x + self.w / 2.0
    }

    pub fn centery(&self) -> f32 {
        self.y + self.h / 2.0
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }

    pub fn midtop(&self) -> Vec2 {
        self.point(Anchor::MidTop)
    }

    pub fn midbottom(&self) -> Vec2 {
        self.point(Anchor::MidBottom)
    }

    pub fn bottomleft(&self) -> Vec2 {
        self.point(Anchor::BottomLeft)
    }

    pub fn bottomright(&self) -> Vec2 {
        self.point(Anchor::BottomRight)
    }

    /// Strict overlap test: touching edges do not count.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}
