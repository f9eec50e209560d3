use num_traits::Float;

/// Euclidean distance
pub fn euclidean<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Float,
{
    ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt()
}

/// 2D Point
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to another point
    pub fn distance_to(&self, other: &Point) -> f64 {
        euclidean(self.x, self.y, other.x, other.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euclidean_distance() {
        assert_eq!(euclidean(0.0, 0.0, 3.0, 4.0), 5.0);
        assert_eq!(euclidean(1.0, 1.0, 1.0, 1.0), 0.0);
    }

    #[test]
    fn test_point_distance_is_symmetric() {
        let a = Point::new(150.0, 150.0);
        let b = Point::new(350.0, 200.0);
        assert_eq!(a.distance_to(&b), b.distance_to(&a));
    }
}
