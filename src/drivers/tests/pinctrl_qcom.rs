use device::{ClassId, Device, DeviceId, Driver, DriverOps, ErrorKind, PinConfigParam, PinName, PinctrlOps};
use drivers::pinctrl::qcom::{MsmPinData, MsmPinctrl, MsmPinctrlData, GPIO_CONFIG_STRIDE};

const PIN_COUNT: usize = 4;
const WORDS_PER_PIN: usize = GPIO_CONFIG_STRIDE / 4;

static FUNCTIONS: [(&str, u32); 2] = [("gpio", 0), ("qup0", 3)];

fn function_name(selector: usize) -> Option<&'static str> {
    FUNCTIONS.get(selector).map(|(name, _)| *name)
}

fn function_mux(selector: usize) -> Option<u32> {
    FUNCTIONS.get(selector).map(|(_, val)| *val)
}

fn pin_name(selector: usize) -> Option<PinName> {
    let mut name = PinName::new();
    name.push_str(["A", "B", "UFS_RESET", "SDC_CLK"].get(selector)?).ok()?;
    Some(name)
}

/// Pins 2 and 3 are pads the boot ROM owns
static SPECIAL_DATA: MsmPinctrlData = MsmPinctrlData {
    pin_data: MsmPinData {
        pin_count: PIN_COUNT,
        pin_offsets: None,
        special_pins_start: Some(2),
    },
    functions_count: FUNCTIONS.len(),
    get_function_name: function_name,
    get_function_mux: function_mux,
    get_pin_name: pin_name,
};

static PIN_OFFSETS: [usize; PIN_COUNT] = [0, 0x10, 0x20, 0x100];

/// Register pages shifted by a per-pin offset
static OFFSET_DATA: MsmPinctrlData = MsmPinctrlData {
    pin_data: MsmPinData {
        pin_count: PIN_COUNT,
        pin_offsets: Some(&PIN_OFFSETS),
        special_pins_start: Some(PIN_COUNT),
    },
    functions_count: FUNCTIONS.len(),
    get_function_name: function_name,
    get_function_mux: function_mux,
    get_pin_name: pin_name,
};

static TEST_IDS: [DeviceId; 2] = [
    DeviceId::with_data("test,special-tlmm", &SPECIAL_DATA),
    DeviceId::with_data("test,offset-tlmm", &OFFSET_DATA),
];

static TEST_TLMM_DRIVER: Driver = Driver::new("pinctrl_test", ClassId::Nop, &TEST_IDS);

/// TLMM window backed by leaked heap memory, with room past the last page
struct Tlmm(*mut u32);

impl Tlmm {
    fn new() -> Self {
        let mem = vec![0u32; (PIN_COUNT + 1) * WORDS_PER_PIN].into_boxed_slice();
        Self(Box::into_raw(mem) as *mut u32)
    }

    fn addr(&self) -> usize {
        self.0 as usize
    }

    fn read_at(&self, byte_offset: usize) -> u32 {
        unsafe { self.0.add(byte_offset / 4).read_volatile() }
    }

    fn write_at(&self, byte_offset: usize, value: u32) {
        unsafe { self.0.add(byte_offset / 4).write_volatile(value) }
    }
}

fn probed(tlmm: &Tlmm, compatible: &'static str) -> MsmPinctrl {
    let mut dev = Device::new("pinctrl@f000000", compatible).with_reg(tlmm.addr());
    let id = TEST_TLMM_DRIVER.of_match_device(compatible).unwrap();
    dev.bind_driver(&TEST_TLMM_DRIVER, id);
    MsmPinctrl::bind(&mut dev).unwrap();
    MsmPinctrl::probe(&dev.children()[0]).unwrap()
}

#[test]
fn special_pins_are_left_alone() {
    let tlmm = Tlmm::new();
    let mut pinctrl = probed(&tlmm, "test,special-tlmm");
    tlmm.write_at(2 * GPIO_CONFIG_STRIDE, 0x0000_02c5);

    pinctrl.pinmux_set(2, 1).unwrap();
    pinctrl.pinconf_set(2, PinConfigParam::DriveStrength, 8).unwrap();
    pinctrl.pinconf_set(3, PinConfigParam::BiasDisable, 0).unwrap();

    assert_eq!(tlmm.read_at(2 * GPIO_CONFIG_STRIDE), 0x0000_02c5);
    assert_eq!(tlmm.read_at(3 * GPIO_CONFIG_STRIDE), 0);
}

#[test]
fn special_pins_ignore_function_selector() {
    let tlmm = Tlmm::new();
    let mut pinctrl = probed(&tlmm, "test,special-tlmm");

    assert_eq!(pinctrl.pinmux_set(3, 5), Ok(()));
    assert_eq!(tlmm.read_at(3 * GPIO_CONFIG_STRIDE), 0);

    // a plain GPIO still validates the function
    assert_eq!(pinctrl.pinmux_set(1, 5), Err(ErrorKind::OutOfRange));
}

#[test]
fn plain_pins_below_special_range_are_programmed() {
    let tlmm = Tlmm::new();
    let mut pinctrl = probed(&tlmm, "test,special-tlmm");

    pinctrl.pinmux_set(1, 1).unwrap();

    assert_eq!(tlmm.read_at(GPIO_CONFIG_STRIDE), 3 << 2);
}

#[test]
fn pin_offsets_shift_the_config_register() {
    let tlmm = Tlmm::new();
    let mut pinctrl = probed(&tlmm, "test,offset-tlmm");

    pinctrl.pinmux_set(1, 1).unwrap();
    pinctrl.pinconf_set(3, PinConfigParam::DriveStrength, 4).unwrap();

    assert_eq!(tlmm.read_at(GPIO_CONFIG_STRIDE + 0x10), 3 << 2);
    assert_eq!(tlmm.read_at(GPIO_CONFIG_STRIDE), 0);
    assert_eq!(tlmm.read_at(3 * GPIO_CONFIG_STRIDE + 0x100), 1 << 6);
    assert_eq!(tlmm.read_at(3 * GPIO_CONFIG_STRIDE), 0);
}

#[test]
fn selectors_past_pin_count_are_rejected() {
    let tlmm = Tlmm::new();
    let mut pinctrl = probed(&tlmm, "test,offset-tlmm");

    assert_eq!(pinctrl.get_pins_count(), PIN_COUNT);
    assert_eq!(pinctrl.get_pin_name(3).unwrap().as_str(), "SDC_CLK");
    assert_eq!(
        pinctrl.pinconf_set(PIN_COUNT, PinConfigParam::BiasPullUp, 1),
        Err(ErrorKind::OutOfRange)
    );
    assert_eq!(pinctrl.pinmux_set(PIN_COUNT, 0), Err(ErrorKind::OutOfRange));
    assert_eq!(tlmm.read_at(PIN_COUNT * GPIO_CONFIG_STRIDE), 0);
}
