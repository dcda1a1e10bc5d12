use crate::{Scalar, Vec3};

pub trait VecExt {
    fn all_ge(&self, other: &Self) -> bool;

    fn all_le(&self, other: &Self) -> bool;

    fn component_clamp(&self, min: &Self, max: &Self) -> Self;

    fn ones() -> Self;
}

impl VecExt for Vec3 {
    fn all_ge(&self, other: &Self) -> bool {
        self.x >= other.x && self.y >= other.y && self.z >= other.z
    }

    fn all_le(&self, other: &Self) -> bool {
        self.x <= other.x && self.y <= other.y && self.z <= other.z
    }

    fn component_clamp(&self, min: &Self, max: &Self) -> Self {
        Vec3::new(
            self.x.clamp(min.x, max.x),
            self.y.clamp(min.y, max.y),
            self.z.clamp(min.z, max.z),
        )
    }

    fn ones() -> Self {
        Self::from_element(1.)
    }
}

/// Euclidean distance between two points.
pub fn distance(a: &Vec3, b: &Vec3) -> Scalar {
    (a - b).norm()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_clamp() {
        let v = Vec3::new(-1., 0.5, 3.);
        let clamped = v.component_clamp(&Vec3::zeros(), &Vec3::ones());
        assert_eq!(clamped, Vec3::new(0., 0.5, 1.));
        assert!(clamped.all_ge(&Vec3::zeros()));
        assert!(clamped.all_le(&Vec3::ones()));
        assert!(!v.all_ge(&Vec3::zeros()));
    }

    #[test]
    fn test_distance() {
        let a = Vec3::new(1., 2., 3.);
        let b = Vec3::new(4., 6., 3.);
        assert_eq!(distance(&a, &b), 5.);
    }
}
