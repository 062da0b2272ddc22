//! Nested composite values for the destructure check.

use std::str::FromStr;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle given by two corner points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rectangle {
    pub top_left: Point,
    pub bottom_right: Point,
}

impl Rectangle {
    pub const fn new(top_left: Point, bottom_right: Point) -> Self {
        Self {
            top_left,
            bottom_right,
        }
    }
}

impl Default for Rectangle {
    fn default() -> Self {
        Self::new(Point::new(0, 0), Point::new(10, 10))
    }
}

/// Error returned when a rectangle literal cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected four comma-separated integers x1,y1,x2,y2, got {0:?}")]
pub struct ParseRectangleError(pub String);

impl FromStr for Rectangle {
    type Err = ParseRectangleError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let coords: Vec<i32> = raw
            .split(',')
            .map(|part| part.trim().parse::<i32>())
            .collect::<Result<_, _>>()
            .map_err(|_| ParseRectangleError(raw.to_string()))?;

        match coords.as_slice() {
            [x1, y1, x2, y2] => Ok(Self::new(Point::new(*x1, *y1), Point::new(*x2, *y2))),
            _ => Err(ParseRectangleError(raw.to_string())),
        }
    }
}

/// Closed set of shapes the destructure check may receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Shape {
    Rectangle(Rectangle),
    Point(Point),
}

impl Default for Shape {
    fn default() -> Self {
        Self::Rectangle(Rectangle::default())
    }
}

/// Describe a shape if it is a rectangle, binding all four coordinates.
///
/// Returns `None` for any other shape.
pub fn describe_rectangle(shape: &Shape) -> Option<String> {
    if let Shape::Rectangle(Rectangle {
        top_left: Point { x: x1, y: y1 },
        bottom_right: Point { x: x2, y: y2 },
    }) = shape
    {
        Some(format!("Rectangle from ({x1},{y1}) to ({x2},{y2})"))
    } else {
        None
    }
}
