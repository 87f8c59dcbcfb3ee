use crate::{Interval, Ray, Vec3};

/// Axis-aligned bounding box used for leaf-level ray culling.
///
/// The box is stored as one interval per axis. Consumers expect
/// `min <= max` on each axis, but the constructors tolerate unordered
/// corner input by taking componentwise extrema.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    pub x: Interval,
    pub y: Interval,
    pub z: Interval,
}

impl Aabb {
    /// Create a new AABB from three intervals.
    pub fn new(x: Interval, y: Interval, z: Interval) -> Self {
        let mut aabb = Self { x, y, z };
        aabb.pad_to_minimums();
        aabb
    }

    /// Create an AABB from two corner points, in either order.
    pub fn from_points(a: Vec3, b: Vec3) -> Self {
        let x = Interval::new(a.x.min(b.x), a.x.max(b.x));
        let y = Interval::new(a.y.min(b.y), a.y.max(b.y));
        let z = Interval::new(a.z.min(b.z), a.z.max(b.z));

        let mut aabb = Self { x, y, z };
        aabb.pad_to_minimums();
        aabb
    }

    /// Create an AABB that encloses two other AABBs.
    ///
    /// Per axis this takes the min of minimums and the max of maximums,
    /// so the result always contains both inputs.
    pub fn surrounding(box0: &Aabb, box1: &Aabb) -> Self {
        Self {
            x: Interval::surrounding(&box0.x, &box1.x),
            y: Interval::surrounding(&box0.y, &box1.y),
            z: Interval::surrounding(&box0.z, &box1.z),
        }
    }

    /// Get the interval for a specific axis (0=X, 1=Y, 2=Z).
    pub fn axis_interval(&self, n: usize) -> Interval {
        match n {
            0 => self.x,
            1 => self.y,
            _ => self.z,
        }
    }

    /// Test if a ray intersects this AABB within the given interval.
    ///
    /// Slab method: each axis shrinks the running parameter interval.
    /// A zero direction component produces an infinite reciprocal,
    /// which degenerates that axis's slab to always/never bounded.
    pub fn hit(&self, r: &Ray, mut ray_t: Interval) -> bool {
        let ray_orig = r.origin();
        let ray_dir = r.direction();

        for axis in 0..3 {
            let slab = self.axis_interval(axis);
            let inv_d = 1.0 / ray_dir[axis];

            let mut t0 = (slab.min - ray_orig[axis]) * inv_d;
            let mut t1 = (slab.max - ray_orig[axis]) * inv_d;
            // With a negative direction t1 is the near plane
            if inv_d < 0.0 {
                std::mem::swap(&mut t0, &mut t1);
            }

            ray_t.min = t0.max(ray_t.min);
            ray_t.max = t1.min(ray_t.max);
            if ray_t.max <= ray_t.min {
                return false;
            }
        }

        true
    }

    /// Pad intervals to avoid zero-width AABBs (degenerate cases).
    fn pad_to_minimums(&mut self) {
        let delta = 0.0001;
        if self.x.size() < delta {
            self.x = self.x.expand(delta);
        }
        if self.y.size() < delta {
            self.y = self.y.expand(delta);
        }
        if self.z.size() < delta {
            self.z = self.z.expand(delta);
        }
    }

    pub const EMPTY: Aabb = Aabb {
        x: Interval::EMPTY,
        y: Interval::EMPTY,
        z: Interval::EMPTY,
    };

    pub const UNIVERSE: Aabb = Aabb {
        x: Interval::UNIVERSE,
        y: Interval::UNIVERSE,
        z: Interval::UNIVERSE,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points_unordered() {
        let aabb = Aabb::from_points(Vec3::new(10.0, 0.0, 10.0), Vec3::new(0.0, 10.0, 0.0));

        assert_eq!(aabb.x.min, 0.0);
        assert_eq!(aabb.x.max, 10.0);
        assert_eq!(aabb.y.min, 0.0);
        assert_eq!(aabb.y.max, 10.0);
        assert_eq!(aabb.z.min, 0.0);
        assert_eq!(aabb.z.max, 10.0);
    }

    #[test]
    fn test_surrounding_encloses_both_inputs() {
        let box0 = Aabb::from_points(Vec3::new(-1.0, 2.0, 0.0), Vec3::new(4.0, 5.0, 3.0));
        let box1 = Aabb::from_points(Vec3::new(0.0, -3.0, 1.0), Vec3::new(2.0, 9.0, 7.0));
        let union = Aabb::surrounding(&box0, &box1);

        for (a, b, u) in [
            (box0.x, box1.x, union.x),
            (box0.y, box1.y, union.y),
            (box0.z, box1.z, union.z),
        ] {
            assert!(u.min <= a.min && u.min <= b.min);
            assert!(u.max >= a.max && u.max >= b.max);
        }
    }

    #[test]
    fn test_hit_through_center() {
        let aabb = Aabb::from_points(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0));

        let ray = Ray::new_simple(Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(aabb.hit(&ray, Interval::new(0.0, f64::INFINITY)));

        // Clamping t_max below the entry distance (t = 4) culls the hit
        assert!(!aabb.hit(&ray, Interval::new(0.0, 3.9)));
    }

    #[test]
    fn test_hit_reversed_ray() {
        let aabb = Aabb::from_points(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0));

        // A ray and its reverse see the same box when the parameter
        // interval is symmetric about the origin.
        let forward = Ray::new_simple(Vec3::new(0.0, 0.5, -5.0), Vec3::new(0.0, 0.0, 1.0));
        let backward = Ray::new_simple(Vec3::new(0.0, 0.5, -5.0), Vec3::new(0.0, 0.0, -1.0));
        let symmetric = Interval::new(f64::NEG_INFINITY, f64::INFINITY);

        assert_eq!(aabb.hit(&forward, symmetric), aabb.hit(&backward, symmetric));
    }

    #[test]
    fn test_hit_zero_direction_component() {
        let aabb = Aabb::from_points(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0));

        // Direction has a zero y component; the y slab degenerates via
        // infinite reciprocals rather than failing.
        let inside = Ray::new_simple(Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(aabb.hit(&inside, Interval::new(0.0, f64::INFINITY)));

        // Same direction, but origin outside the y slab: never bounded.
        let outside = Ray::new_simple(Vec3::new(0.0, 2.0, -5.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(!aabb.hit(&outside, Interval::new(0.0, f64::INFINITY)));
    }

    #[test]
    fn test_hit_miss() {
        let aabb = Aabb::from_points(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0));

        // Ray pointing away
        let ray = Ray::new_simple(Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(!aabb.hit(&ray, Interval::new(0.0, 100.0)));

        // Ray missing the box sideways
        let ray = Ray::new_simple(Vec3::new(10.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(!aabb.hit(&ray, Interval::new(0.0, 100.0)));
    }
}
