use std::collections::HashMap;

use crate::math::Point3;

/// Spatial hash that maps each position to the first vertex seen within
/// `cell_size` of it.
pub(super) struct PositionWelder {
    cell_size: f64,
    map: HashMap<(i64, i64, i64), Vec<(usize, Point3)>>,
}

impl PositionWelder {
    pub(super) fn new(cell_size: f64) -> Self {
        Self {
            cell_size,
            map: HashMap::new(),
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn cell_key(&self, p: &Point3) -> (i64, i64, i64) {
        let inv = 1.0 / self.cell_size;
        (
            (p.x * inv).floor() as i64,
            (p.y * inv).floor() as i64,
            (p.z * inv).floor() as i64,
        )
    }

    /// Returns the representative vertex for `point`, registering `index`
    /// as a new one if no earlier vertex coincides.
    pub(super) fn representative(&mut self, index: usize, point: &Point3) -> usize {
        let key = self.cell_key(point);

        // Neighboring cells catch points straddling a cell boundary.
        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    let neighbor = (key.0 + dx, key.1 + dy, key.2 + dz);
                    if let Some(entries) = self.map.get(&neighbor) {
                        for &(rep, ref existing) in entries {
                            if (point - existing).norm() < self.cell_size {
                                return rep;
                            }
                        }
                    }
                }
            }
        }

        self.map.entry(key).or_default().push((index, *point));
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coincident_points_share_representative() {
        let mut welder = PositionWelder::new(1e-9);
        assert_eq!(welder.representative(0, &Point3::new(0.5, 0.0, 0.5)), 0);
        assert_eq!(welder.representative(1, &Point3::new(0.0, 1.0, 0.0)), 1);
        assert_eq!(welder.representative(2, &Point3::new(0.5, 0.0, 0.5)), 0);
        assert_eq!(welder.representative(3, &Point3::new(0.5, 0.0, 0.500_001)), 3);
    }
}
