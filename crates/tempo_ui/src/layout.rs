//! Geometry and hit-testing for the stepper's three regions.

/// A point in the stepper's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A rectangle defined by position and size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Inclusive on every edge.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Which part of the stepper a point falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Increase,
    Decrease,
    /// Inside neither button (the value field counts as outside)
    Outside,
}

/// Frames of the value field and the two buttons, in one shared coordinate space.
///
/// The engine only hit-tests the button frames; `value_field` is carried for the
/// presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StepperLayout {
    pub value_field: Bounds,
    pub increase: Bounds,
    pub decrease: Bounds,
}

impl StepperLayout {
    pub fn new(value_field: Bounds, increase: Bounds, decrease: Bounds) -> Self {
        Self {
            value_field,
            increase,
            decrease,
        }
    }

    /// Value field on the left, increase button stacked above decrease on the right.
    ///
    /// Both buttons share the column equally. A `button_width` wider than `bounds`
    /// collapses the value field to zero width.
    pub fn arrange(bounds: Bounds, button_width: f32) -> Self {
        let button_width = button_width.clamp(0.0, bounds.width.max(0.0));
        let button_x = bounds.x + bounds.width - button_width;
        let half_height = bounds.height / 2.0;

        Self {
            value_field: Bounds::new(bounds.x, bounds.y, bounds.width - button_width, bounds.height),
            increase: Bounds::new(button_x, bounds.y, button_width, half_height),
            decrease: Bounds::new(button_x, bounds.y + half_height, button_width, half_height),
        }
    }

    /// Classify a point. The increase frame wins where the two frames touch.
    pub fn region_at(&self, point: Point) -> Region {
        if self.increase.contains(point) {
            Region::Increase
        } else if self.decrease.contains(point) {
            Region::Decrease
        } else {
            Region::Outside
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_contains_edges() {
        let b = Bounds::new(10.0, 10.0, 20.0, 20.0);
        assert!(b.contains(Point::new(10.0, 10.0)));
        assert!(b.contains(Point::new(30.0, 30.0)));
        assert!(!b.contains(Point::new(30.1, 15.0)));
        assert!(!b.contains(Point::new(15.0, 9.9)));
    }

    #[test]
    fn test_arrange_stacks_buttons_on_the_right() {
        let layout = StepperLayout::arrange(Bounds::new(0.0, 0.0, 100.0, 40.0), 20.0);

        assert_eq!(layout.value_field, Bounds::new(0.0, 0.0, 80.0, 40.0));
        assert_eq!(layout.increase, Bounds::new(80.0, 0.0, 20.0, 20.0));
        assert_eq!(layout.decrease, Bounds::new(80.0, 20.0, 20.0, 20.0));
    }

    #[test]
    fn test_region_uses_each_buttons_own_frame() {
        let layout = StepperLayout::arrange(Bounds::new(0.0, 0.0, 100.0, 40.0), 20.0);

        assert_eq!(layout.region_at(Point::new(90.0, 5.0)), Region::Increase);
        assert_eq!(layout.region_at(Point::new(90.0, 35.0)), Region::Decrease);
        assert_eq!(layout.region_at(Point::new(40.0, 20.0)), Region::Outside);
        assert_eq!(layout.region_at(Point::new(150.0, 5.0)), Region::Outside);
    }

    #[test]
    fn test_hand_built_layout_and_centers() {
        let layout = StepperLayout::new(
            Bounds::new(0.0, 0.0, 60.0, 30.0),
            Bounds::new(60.0, 0.0, 30.0, 30.0),
            Bounds::new(90.0, 0.0, 30.0, 30.0),
        );
        assert_eq!(layout.increase.center(), Point::new(75.0, 15.0));
        assert_eq!(layout.region_at(layout.decrease.center()), Region::Decrease);
        assert_eq!(layout.region_at(layout.value_field.center()), Region::Outside);
    }

    #[test]
    fn test_arrange_oversized_button_width() {
        let layout = StepperLayout::arrange(Bounds::new(0.0, 0.0, 10.0, 40.0), 20.0);
        assert_eq!(layout.value_field.width, 0.0);
        assert_eq!(layout.increase.width, 10.0);
    }
}
