//! Boot-time device drivers
//!
//! Each driver exports a static [`Driver`] record; [`DRIVERS`] collects the
//! ones enabled by Cargo features so the host driver model can match them
//! against devicetree compatibles.

#![no_std]

pub mod phy;
pub mod pinctrl;

use device::{DeviceId, Driver};

/// All drivers built into this image
pub static DRIVERS: &[&Driver] = &[
    #[cfg(feature = "phy_sun50i_usb3")]
    &phy::sunxi::sun50i_usb3::SUN50I_USB3_PHY_DRIVER,
    #[cfg(feature = "pinctrl_qcom_apq8096")]
    &pinctrl::qcom::apq8096::PINCTRL_APQ8096_DRIVER,
];

/// Find the driver and match table entry for a devicetree `compatible`
pub fn find_driver(compatible: &str) -> Option<(&'static Driver, &'static DeviceId)> {
    DRIVERS
        .iter()
        .find_map(|driver| driver.of_match_device(compatible).map(|id| (*driver, id)))
}
