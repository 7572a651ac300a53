use crate::ErrorType;

/// Operations of a driver in the PHY uclass
///
/// `init` and `exit` bracket the PHY's use by its consumer controller.
/// The power hooks are optional and succeed by default.
pub trait PhyOps: ErrorType {
    /// Bring the PHY out of reset and program it for use
    fn init(&mut self) -> Result<(), Self::Error>;
    /// Put the PHY back into reset and release its resources
    fn exit(&mut self) -> Result<(), Self::Error>;
    fn power_on(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
    fn power_off(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
