#[cfg(feature = "sunxi")]
pub mod sunxi;
