#[cfg(feature = "phy_sun50i_usb3")]
pub mod sun50i_usb3;
