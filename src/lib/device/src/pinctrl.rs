use heapless::String;

use crate::ErrorType;

/// Longest pin name a pinctrl driver hands back
pub const MAX_PIN_NAME_LEN: usize = 32;

pub type PinName = String<MAX_PIN_NAME_LEN>;

/// Generic pin configuration parameters understood by the pinconfig uclass
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PinConfigParam {
    /// Disable any pull on the pin
    BiasDisable,
    /// Pull the pin up; the argument is controller specific
    BiasPullUp,
    /// Output drive strength in mA
    DriveStrength,
}

/// Maps a devicetree property to a [`PinConfigParam`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PinconfParam {
    pub property: &'static str,
    pub param: PinConfigParam,
    /// Argument used when the property carries no value
    pub default_value: u32,
}

impl PinconfParam {
    pub const fn new(property: &'static str, param: PinConfigParam, default_value: u32) -> Self {
        Self {
            property,
            param,
            default_value,
        }
    }
}

/// Look up the parameter a driver registered for `property`
pub fn find_pinconf_param<'a>(params: &'a [PinconfParam], property: &str) -> Option<&'a PinconfParam> {
    params.iter().find(|p| p.property == property)
}

/// Operations of a driver in the pinctrl uclass
pub trait PinctrlOps: ErrorType {
    fn get_pins_count(&self) -> usize;
    fn get_pin_name(&self, selector: usize) -> Result<PinName, Self::Error>;
    fn get_functions_count(&self) -> usize;
    fn get_function_name(&self, selector: usize) -> Result<&'static str, Self::Error>;
    /// Route function `func_selector` to pin `pin_selector`
    fn pinmux_set(&mut self, pin_selector: usize, func_selector: usize) -> Result<(), Self::Error>;
    /// Apply one configuration parameter to a pin
    fn pinconf_set(
        &mut self,
        pin_selector: usize,
        param: PinConfigParam,
        argument: u32,
    ) -> Result<(), Self::Error>;
    /// Devicetree properties this driver accepts for `pinconf_set`
    fn pinconf_params(&self) -> &'static [PinconfParam] {
        &[]
    }
}
