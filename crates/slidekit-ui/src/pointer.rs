use slidekit_graphics::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// Pointer sample in track-local pixels, stamped with the host's event time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub position: Point,
    pub time_millis: i64,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, time_millis: i64) -> Self {
        Self {
            kind,
            position,
            time_millis,
        }
    }

    pub fn down(x: f32, y: f32, time_millis: i64) -> Self {
        Self::new(PointerEventKind::Down, Point::new(x, y), time_millis)
    }

    pub fn moved(x: f32, y: f32, time_millis: i64) -> Self {
        Self::new(PointerEventKind::Move, Point::new(x, y), time_millis)
    }

    pub fn up(x: f32, y: f32, time_millis: i64) -> Self {
        Self::new(PointerEventKind::Up, Point::new(x, y), time_millis)
    }

    pub fn cancel(time_millis: i64) -> Self {
        Self::new(PointerEventKind::Cancel, Point::ZERO, time_millis)
    }

    pub fn kind(&self) -> PointerEventKind {
        self.kind
    }

    pub fn position(&self) -> Point {
        self.position
    }
}
