use super::DeviceStack;
use nalgebra::RealField;

/// The number of screening lengths each electrode region extends into the metal
const SCREENING_DEPTH: usize = 5;

/// A region of the stack in which the potentials take a single analytical form
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Region {
    /// The bulk of the top electrode, `x <= 0`
    TopContact,
    /// Within five screening lengths of the top interface
    TopScreening,
    /// Insulator
    Insulator,
    /// Ferroelectric
    Ferroelectric,
    /// Dead layer
    DeadLayer,
    /// Bottom screening
    BottomScreening,
    /// The bulk of the bottom electrode, beyond the last boundary
    BottomContact,
}

const ORDER: [Region; 7] = [
    Region::TopContact,
    Region::TopScreening,
    Region::Insulator,
    Region::Ferroelectric,
    Region::DeadLayer,
    Region::BottomScreening,
    Region::BottomContact,
];

/// The region containing a point, and the distance of the point from the region's lower boundary
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Located<T> {
    /// The region
    pub region: Region,
    /// The distance from the lower boundary of the region
    pub offset: T,
}

/// Cumulative upper boundaries of every region but the last
///
/// Region `i` occupies `(boundaries[i - 1], boundaries[i]]`. Boundaries are non-decreasing, so a
/// layer of zero thickness occupies an empty interval and is never returned by `locate`.
#[derive(Clone, Debug, PartialEq)]
pub struct RegionTable<T> {
    boundaries: [T; 6],
}

impl<T: Copy + RealField> RegionTable<T> {
    pub(crate) fn from_stack(stack: &DeviceStack<T>) -> Self {
        let depth = T::from_usize(SCREENING_DEPTH).unwrap();
        let widths = [
            depth * stack.top.screening_length,
            stack.insulator.thickness,
            stack.ferroelectric.thickness,
            stack.dead_layer.thickness,
            depth * stack.bottom.screening_length,
        ];
        let mut boundaries = [T::zero(); 6];
        for (index, width) in widths.into_iter().enumerate() {
            boundaries[index + 1] = boundaries[index] + width;
        }
        Self { boundaries }
    }

    /// Finds the region containing `x` by bisection on the cumulative boundaries
    pub fn locate(&self, x: T) -> Located<T> {
        let index = self.boundaries.partition_point(|&boundary| boundary < x);
        let lower = if index == 0 {
            T::zero()
        } else {
            self.boundaries[index - 1]
        };
        Located {
            region: ORDER[index],
            offset: x - lower,
        }
    }

    /// The position of the interface between the top screening region and the insulator
    pub fn top_interface(&self) -> T {
        self.boundaries[1]
    }

    /// The position of the interface between the dead layer and the bottom screening region
    pub fn bottom_interface(&self) -> T {
        self.boundaries[4]
    }

    /// The outer edge of the bottom screening region
    pub fn length(&self) -> T {
        self.boundaries[5]
    }
}

#[cfg(test)]
mod test {
    use super::{Region, RegionTable};

    fn table() -> RegionTable<f64> {
        // screening 1 + insulator 0 + ferroelectric 10 + dead layer 2 + screening 1
        RegionTable {
            boundaries: [0., 1., 1., 11., 13., 14.],
        }
    }

    #[test]
    fn points_on_a_boundary_belong_to_the_lower_region() {
        let table = table();
        assert_eq!(table.locate(0.).region, Region::TopContact);
        assert_eq!(table.locate(1.).region, Region::TopScreening);
        assert_eq!(table.locate(11.).region, Region::Ferroelectric);
        assert_eq!(table.locate(14.).region, Region::BottomScreening);
    }

    #[test]
    fn empty_layers_are_skipped() {
        let table = table();
        for x in [0.5, 1., 1.0001, 5., 10.99] {
            assert_ne!(table.locate(x).region, Region::Insulator);
        }
        assert_eq!(table.locate(1.0001).region, Region::Ferroelectric);
    }

    #[test]
    fn offsets_are_measured_from_the_lower_boundary() {
        let table = table();
        let located = table.locate(12.5);
        assert_eq!(located.region, Region::DeadLayer);
        assert!((located.offset - 1.5).abs() < 1e-12);
        assert_eq!(table.locate(-3.).offset, -3.);
    }

    #[test]
    fn the_table_is_total_over_the_real_line() {
        let table = table();
        assert_eq!(table.locate(f64::NEG_INFINITY).region, Region::TopContact);
        assert_eq!(table.locate(1e300).region, Region::BottomContact);
        assert_eq!(table.locate(f64::INFINITY).region, Region::BottomContact);
    }
}
