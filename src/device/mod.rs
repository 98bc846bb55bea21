//! Controls the deserialization and storage of the top-level device structure,
//! and the `InfoDesk` traits which yield all the material information necessary
//! to run the simulation

/// The material catalog and the assembled `DeviceStack`
pub mod info_desk;
/// The deserialization and storage of the `Device`
pub mod reader;
/// The ordered table of regions along the stack
mod regions;

pub use info_desk::{BuildInfoDesk, DeviceStack, Electrode, Layer};
pub use reader::Device;
pub use regions::{Located, Region, RegionTable};

/// The five physical components of the diode
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LayerKind {
    /// Top electrode
    TopElectrode,
    /// Insulator
    Insulator,
    /// Ferroelectric
    Ferroelectric,
    /// Dead layer
    DeadLayer,
    /// Bottom electrode
    BottomElectrode,
}

impl std::fmt::Display for LayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            LayerKind::TopElectrode => write!(f, "top electrode"),
            LayerKind::Insulator => write!(f, "insulator"),
            LayerKind::Ferroelectric => write!(f, "ferroelectric layer"),
            LayerKind::DeadLayer => write!(f, "dead layer"),
            LayerKind::BottomElectrode => write!(f, "bottom electrode"),
        }
    }
}
