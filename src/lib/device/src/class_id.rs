/// Identifies the uclass a driver belongs to
#[repr(C)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClassId {
    /* Used internally by driver model */
    Root = 0,

    /* Driver classes, in alphabetical order */
    Clk,      /* Clock source, e.g. used by peripherals */
    Gpio,     /* Bank of general-purpose I/O pins */
    Nop,      /* No-op devices */
    Phy,      /* Physical Layer (PHY) device */
    Pinconfig, /* Pin configuration node device */
    Pinctrl,  /* Pinctrl (pin muxing/configuration) device */
    Reset,    /* Reset controller device */
    Count,
    Invalid = -1,
}
