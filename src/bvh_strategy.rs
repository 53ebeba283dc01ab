use crate::{Axis, Surface, AABB};

/// Where a range of surfaces is cut in two
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MedianSplit {
    /// Axis the surfaces were sorted along
    pub axis: Axis,
    /// Index of the first surface of the right half, relative to the split slice
    pub center: usize,
}

/// Sort surfaces in place by their average position along `axis`, largest coordinate first.
///
/// The sort is stable and uses a total order, so NaN positions can't make it panic.
pub fn sort_by_average_position<S>(surfaces: &mut [S], axis: Axis)
where
    S: Surface,
{
    surfaces.sort_by(|a, b| {
        b.average_position()[axis].total_cmp(&a.average_position()[axis])
    });
}

/// Sort `surfaces` along the widest axis of `bounds` and cut them at the median.
///
/// The left half gets `len / 2` surfaces, the right half the rest.
pub fn median_split<S>(bounds: &AABB, surfaces: &mut [S]) -> MedianSplit
where
    S: Surface,
{
    let axis = Axis::longest(bounds.extent());
    sort_by_average_position(surfaces, axis);
    MedianSplit {
        axis,
        center: surfaces.len() / 2,
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3A;

    use rand::{prelude::SliceRandom, thread_rng};

    use crate::*;

    fn spheres_along(axis: Axis, count: usize) -> Vec<Sphere> {
        (0..count)
            .map(|i| {
                let mut center = Vec3A::ZERO;
                center[axis] = i as f32;
                Sphere::new(center, 0.25)
            })
            .collect()
    }

    #[test]
    fn sort_is_descending() {
        let mut rng = thread_rng();
        let mut spheres = spheres_along(Axis::Y, 16);
        spheres.shuffle(&mut rng);

        sort_by_average_position(&mut spheres, Axis::Y);

        let ys: Vec<f32> = spheres.iter().map(|s| s.center.y).collect();
        let expected: Vec<f32> = (0..16).rev().map(|i| i as f32).collect();
        assert_eq!(ys, expected);
    }

    #[test]
    fn split_uses_widest_axis() {
        let mut rng = thread_rng();
        let mut spheres = spheres_along(Axis::Z, 9);
        spheres.shuffle(&mut rng);

        let bounds = AABB::from_surfaces(&spheres);
        let split = median_split(&bounds, &mut spheres);

        assert_eq!(split.axis, Axis::Z);
        assert_eq!(split.center, 4);
        assert!(spheres[..split.center]
            .iter()
            .all(|s| s.center.z >= spheres[split.center].center.z));
    }

    #[test]
    fn identical_positions_keep_order() {
        let mut spheres: Vec<Sphere> = (0..6)
            .map(|i| Sphere::new(Vec3A::ZERO, i as f32))
            .collect();
        let before = spheres.clone();

        sort_by_average_position(&mut spheres, Axis::X);

        assert_eq!(spheres, before);
    }

    #[test]
    fn nan_positions_do_not_panic() {
        let mut spheres = vec![
            Sphere::new(Vec3A::new(f32::NAN, 0.0, 0.0), 1.0),
            Sphere::new(Vec3A::new(1.0, 0.0, 0.0), 1.0),
            Sphere::new(Vec3A::new(-f32::NAN, 0.0, 0.0), 1.0),
        ];
        sort_by_average_position(&mut spheres, Axis::X);
        assert_eq!(spheres.len(), 3);
    }
}
