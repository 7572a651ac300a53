//! Qualcomm TLMM (top level mode multiplexer) pin controller core
//!
//! Every pin owns a 4 KiB register page; the first word of the page selects
//! the pin's function, pull and drive strength. SoC files only provide the
//! pin count and the name/function tables through [`MsmPinctrlData`].

#[cfg(feature = "pinctrl_qcom_apq8096")]
pub mod apq8096;

use core::ptr::NonNull;

use device::{
    ClassId, Device, DriverData, DriverOps, Driver, ErrorKind, ErrorType, PinConfigParam, PinName,
    PinconfParam, PinctrlOps,
};
use log::{debug, error, warn};
use tock_registers::interfaces::ReadWriteable;
use tock_registers::register_bitfields;
use tock_registers::registers::ReadWrite;

/// Stride between two pins' configuration registers
pub const GPIO_CONFIG_STRIDE: usize = 0x1000;

register_bitfields![u32,
    GPIO_CFG [
        GPIO_DISABLE OFFSET(9) NUMBITS(1) [],
        DRV_STRENGTH OFFSET(6) NUMBITS(3) [],
        FUNC_SEL OFFSET(2) NUMBITS(4) [],
        PULL OFFSET(0) NUMBITS(2) [
            NoPull = 0
        ]
    ]
];

/// Pin layout of a TLMM instance
pub struct MsmPinData {
    pub pin_count: usize,
    /// Extra per-pin offsets added to the register page, for SoCs whose
    /// pages are not contiguous
    pub pin_offsets: Option<&'static [usize]>,
    /// First pin that is not a plain GPIO (SDC and UFS pads). Those pins
    /// are left in the state the boot ROM configured.
    pub special_pins_start: Option<usize>,
}

impl MsmPinData {
    pub fn is_special_pin(&self, pin: usize) -> bool {
        self.special_pins_start.map_or(false, |start| pin >= start)
    }

    /// Offset of `pin`'s configuration register from the TLMM base
    pub fn config_offset(&self, pin: usize) -> usize {
        let extra = self
            .pin_offsets
            .and_then(|offsets| offsets.get(pin).copied())
            .unwrap_or(0);
        pin * GPIO_CONFIG_STRIDE + extra
    }
}

/// Per-SoC table plugged into the TLMM core
pub struct MsmPinctrlData {
    pub pin_data: MsmPinData,
    pub functions_count: usize,
    pub get_function_name: fn(selector: usize) -> Option<&'static str>,
    pub get_function_mux: fn(selector: usize) -> Option<u32>,
    pub get_pin_name: fn(selector: usize) -> Option<PinName>,
}

impl DriverData for MsmPinctrlData {}

static MSM_PINCONF_PARAMS: [PinconfParam; 3] = [
    PinconfParam::new("drive-strength", PinConfigParam::DriveStrength, 2),
    PinconfParam::new("bias-disable", PinConfigParam::BiasDisable, 0),
    PinconfParam::new("bias-pull-up", PinConfigParam::BiasPullUp, 3),
];

/// Driver for the pin controller itself, bound under the SoC match device
pub static MSM_PINCTRL_DRIVER: Driver = Driver::new("pinctrl_qcom", ClassId::Pinctrl, &[]);

/// Driver for the GPIO bank that shares the TLMM node
pub static MSM_GPIO_DRIVER: Driver = Driver::new("gpio_msm", ClassId::Gpio, &[]);

/// Private data of a probed TLMM instance
pub struct MsmPinctrl {
    base: NonNull<u8>,
    data: &'static MsmPinctrlData,
}

// The TLMM window is exclusively owned by this driver instance.
unsafe impl Send for MsmPinctrl {}

impl MsmPinctrl {
    fn config_reg(&self, pin: usize) -> Result<&ReadWrite<u32, GPIO_CFG::Register>, ErrorKind> {
        if pin >= self.data.pin_data.pin_count {
            return Err(ErrorKind::OutOfRange);
        }
        let offset = self.data.pin_data.config_offset(pin);
        // SAFETY: the TLMM window spans one register page per pin, and `pin`
        // was checked against the pin count above.
        Ok(unsafe { &*(self.base.as_ptr().add(offset) as *const ReadWrite<u32, GPIO_CFG::Register>) })
    }
}

impl ErrorType for MsmPinctrl {
    type Error = ErrorKind;
}

impl DriverOps for MsmPinctrl {
    /// Bind the `pinctrl_qcom` device that carries the pinctrl ops, and the
    /// `gpio_msm` bank under it when the node is a gpio-controller
    fn bind(dev: &mut Device) -> Result<(), Self::Error> {
        let data = dev.driver_data_as::<MsmPinctrlData>().ok_or_else(|| {
            error!("{}: no pin controller data for {}", dev.name(), dev.compatible());
            ErrorKind::InvalidArgument
        })?;

        if data.pin_data.special_pins_start.is_none() {
            warn!("{}: special pins start index not defined", dev.name());
        }

        let name = dev.name();
        if name.is_empty() {
            return Err(ErrorKind::InvalidArgument);
        }

        let data: &'static dyn DriverData = data;
        let gpio_controller = dev.has_property("gpio-controller");
        let pinctrl = dev.bind_child(name, &MSM_PINCTRL_DRIVER, Some(data));

        if gpio_controller {
            pinctrl.bind_child(name, &MSM_GPIO_DRIVER, Some(data));
        }

        Ok(())
    }

    fn probe(dev: &Device) -> Result<Self, Self::Error> {
        let base = dev
            .read_addr()
            .and_then(|addr| NonNull::new(addr as *mut u8))
            .ok_or(ErrorKind::InvalidArgument)?;

        let data = dev.driver_data_as::<MsmPinctrlData>().ok_or_else(|| {
            error!("{}: no pin controller data for {}", dev.name(), dev.compatible());
            ErrorKind::InvalidArgument
        })?;

        Ok(Self { base, data })
    }
}

impl PinctrlOps for MsmPinctrl {
    fn get_pins_count(&self) -> usize {
        self.data.pin_data.pin_count
    }

    fn get_pin_name(&self, selector: usize) -> Result<PinName, Self::Error> {
        (self.data.get_pin_name)(selector).ok_or(ErrorKind::OutOfRange)
    }

    fn get_functions_count(&self) -> usize {
        self.data.functions_count
    }

    fn get_function_name(&self, selector: usize) -> Result<&'static str, Self::Error> {
        (self.data.get_function_name)(selector).ok_or(ErrorKind::OutOfRange)
    }

    fn pinmux_set(&mut self, pin_selector: usize, func_selector: usize) -> Result<(), Self::Error> {
        if self.data.pin_data.is_special_pin(pin_selector) {
            return Ok(());
        }

        let func = (self.data.get_function_mux)(func_selector).ok_or(ErrorKind::OutOfRange)?;

        self.config_reg(pin_selector)?
            .modify(GPIO_CFG::FUNC_SEL.val(func) + GPIO_CFG::GPIO_DISABLE::CLEAR);
        debug!("tlmm: pin {} -> function {}", pin_selector, func);

        Ok(())
    }

    fn pinconf_set(
        &mut self,
        pin_selector: usize,
        param: PinConfigParam,
        argument: u32,
    ) -> Result<(), Self::Error> {
        if self.data.pin_data.is_special_pin(pin_selector) {
            return Ok(());
        }

        let reg = self.config_reg(pin_selector)?;
        match param {
            PinConfigParam::DriveStrength => {
                // 2, 4, ... 16 mA map onto 0..=7
                if !(2..=16).contains(&argument) || argument % 2 != 0 {
                    return Err(ErrorKind::InvalidArgument);
                }
                reg.modify(GPIO_CFG::DRV_STRENGTH.val(argument / 2 - 1));
            }
            PinConfigParam::BiasDisable => reg.modify(GPIO_CFG::PULL::NoPull),
            PinConfigParam::BiasPullUp => {
                if argument > 0b11 {
                    return Err(ErrorKind::InvalidArgument);
                }
                reg.modify(GPIO_CFG::PULL.val(argument));
            }
        }

        Ok(())
    }

    fn pinconf_params(&self) -> &'static [PinconfParam] {
        &MSM_PINCONF_PARAMS
    }
}
