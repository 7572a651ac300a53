#![no_std]

extern crate alloc;

mod class_id;
mod clk;
mod device;
mod error;
mod phy;
mod pinctrl;
mod reset;

pub use self::{
    class_id::ClassId,
    clk::{Clk, ClkProvider},
    device::{Device, DeviceId, DmFlag, Driver, DriverData, DriverOps},
    error::{Error, ErrorKind, ErrorType},
    phy::PhyOps,
    pinctrl::{
        find_pinconf_param, PinConfigParam, PinName, PinconfParam, PinctrlOps, MAX_PIN_NAME_LEN,
    },
    reset::{ResetCtl, ResetProvider},
};
