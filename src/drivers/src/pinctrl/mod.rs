#[cfg(feature = "qcom")]
pub mod qcom;
