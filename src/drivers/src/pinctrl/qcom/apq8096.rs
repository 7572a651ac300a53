//! Qualcomm APQ8096 / MSM8996 pin table

use core::fmt::Write;

use device::{ClassId, DeviceId, Driver, PinName};

use super::{MsmPinData, MsmPinctrlData};

/// Pins below this selector are plain GPIOs named `GPIO_<n>`
pub const GPIO_PIN_COUNT: usize = 150;

static MSM_PINCTRL_PINS: [&str; 7] = [
    "SDC1_CLK",
    "SDC1_CMD",
    "SDC1_DATA",
    "SDC2_CLK",
    "SDC2_CMD",
    "SDC2_DATA",
    "SDC1_RCLK",
];

/// (name, TLMM mux value)
static MSM_PINCTRL_FUNCTIONS: [(&str, u32); 1] = [("blsp_uart8", 2)];

fn apq8096_get_function_name(selector: usize) -> Option<&'static str> {
    MSM_PINCTRL_FUNCTIONS.get(selector).map(|(name, _)| *name)
}

fn apq8096_get_function_mux(selector: usize) -> Option<u32> {
    MSM_PINCTRL_FUNCTIONS.get(selector).map(|(_, val)| *val)
}

fn apq8096_get_pin_name(selector: usize) -> Option<PinName> {
    let mut name = PinName::new();
    if selector < GPIO_PIN_COUNT {
        write!(name, "GPIO_{}", selector).ok()?;
    } else {
        name.push_str(MSM_PINCTRL_PINS.get(selector - GPIO_PIN_COUNT)?).ok()?;
    }
    Some(name)
}

pub static APQ8096_DATA: MsmPinctrlData = MsmPinctrlData {
    pin_data: MsmPinData {
        pin_count: GPIO_PIN_COUNT + MSM_PINCTRL_PINS.len(),
        pin_offsets: None,
        special_pins_start: None,
    },
    functions_count: MSM_PINCTRL_FUNCTIONS.len(),
    get_function_name: apq8096_get_function_name,
    get_function_mux: apq8096_get_function_mux,
    get_pin_name: apq8096_get_pin_name,
};

static MSM_PINCTRL_IDS: [DeviceId; 1] = [DeviceId::with_data("qcom,msm8996-pinctrl", &APQ8096_DATA)];

pub static PINCTRL_APQ8096_DRIVER: Driver =
    Driver::new("pinctrl_apq8096", ClassId::Nop, &MSM_PINCTRL_IDS);
