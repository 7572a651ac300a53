//! Allwinner sun50i (H6) USB 3.0 PHY
//!
//! The PHY sits behind a small register window next to the DWC3 controller.
//! Bring-up is a fixed sequence: force VBUS, open the PIPE clock, enable
//! spread spectrum, and load the vendor's transmitter tuning values.

use core::ptr::NonNull;

use device::{ClassId, Clk, Device, DeviceId, Driver, DriverOps, ErrorKind, ErrorType, PhyOps, ResetCtl};
use log::{debug, error, warn};
use tock_registers::interfaces::{ReadWriteable, Readable, Writeable};
use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

/// PHY_TUNE_LOW value from the Allwinner BSP USB3 driver
pub const PHY_TUNE_LOW_VALUE: u32 = 0x0047_fc87;

register_bitfields![u32,
    // USB2.0 interface status and control
    ISCR [
        FORCE_VBUS OFFSET(12) NUMBITS(2) [
            Forced = 0b11
        ]
    ],

    PIPE_CLOCK_CONTROL [
        PIPE_CLK_OPEN OFFSET(6) NUMBITS(1) []
    ],

    PHY_TUNE_HIGH [
        TX_DEEMPH_3P5DB OFFSET(19) NUMBITS(6) [],
        TX_DEEMPH_6DB OFFSET(13) NUMBITS(6) [],
        TX_SWING_FULL OFFSET(6) NUMBITS(7) [],
        LOS_BIAS OFFSET(3) NUMBITS(3) [],
        TXVBOOSTLVL OFFSET(0) NUMBITS(3) []
    ],

    PHY_EXTERNAL_CONTROL [
        REF_SSP_EN OFFSET(26) NUMBITS(1) [],
        SSC_EN OFFSET(24) NUMBITS(1) [],
        EXTERN_VBUS OFFSET(1) NUMBITS(2) [
            Enabled = 0b11
        ]
    ]
];

register_structs! {
    /// Interface status and control registers
    pub Sun50iUsb3PhyRegisters {
        (0x00 => iscr: ReadWrite<u32, ISCR::Register>),
        (0x04 => _reserved0),
        (0x14 => pipe_clock_control: ReadWrite<u32, PIPE_CLOCK_CONTROL::Register>),
        (0x18 => phy_tune_low: ReadWrite<u32>),
        (0x1c => phy_tune_high: ReadWrite<u32, PHY_TUNE_HIGH::Register>),
        (0x20 => phy_external_control: ReadWrite<u32, PHY_EXTERNAL_CONTROL::Register>),
        (0x24 => @END),
    }
}

static SUN50I_USB3_PHY_IDS: [DeviceId; 1] = [DeviceId::new("allwinner,sun50i-h6-usb3-phy")];

/// Driver for the H6 USB3 PHY node
pub static SUN50I_USB3_PHY_DRIVER: Driver =
    Driver::new("sun50i-usb3-phy", ClassId::Phy, &SUN50I_USB3_PHY_IDS);

/// Private data of a probed sun50i USB3 PHY
pub struct Sun50iUsb3Phy {
    regs: NonNull<Sun50iUsb3PhyRegisters>,
    reset: ResetCtl,
    clk: Clk,
}

// The register window is exclusively owned by this driver instance.
unsafe impl Send for Sun50iUsb3Phy {}

impl Sun50iUsb3Phy {
    fn regs(&self) -> &Sun50iUsb3PhyRegisters {
        // SAFETY: `regs` came from the device's `reg` property and stays
        // mapped for the lifetime of the device.
        unsafe { self.regs.as_ref() }
    }

    fn open(&self) {
        let regs = self.regs();

        regs.phy_external_control.modify(
            PHY_EXTERNAL_CONTROL::EXTERN_VBUS::Enabled
                + PHY_EXTERNAL_CONTROL::SSC_EN::SET
                + PHY_EXTERNAL_CONTROL::REF_SSP_EN::SET,
        );

        regs.pipe_clock_control
            .modify(PIPE_CLOCK_CONTROL::PIPE_CLK_OPEN::SET);

        regs.iscr.modify(ISCR::FORCE_VBUS::Forced);

        regs.phy_tune_low.set(PHY_TUNE_LOW_VALUE);

        // `modify` clears every named field before or-ing in its value, so
        // bits outside the five fields survive.
        regs.phy_tune_high.modify(
            PHY_TUNE_HIGH::TXVBOOSTLVL.val(0x7)
                + PHY_TUNE_HIGH::LOS_BIAS.val(0x7)
                + PHY_TUNE_HIGH::TX_SWING_FULL.val(0x55)
                + PHY_TUNE_HIGH::TX_DEEMPH_6DB.val(0x20)
                + PHY_TUNE_HIGH::TX_DEEMPH_3P5DB.val(0x15),
        );

        debug!(
            "sun50i-usb3-phy: opened, tune high {:#010x}",
            regs.phy_tune_high.get()
        );
    }
}

impl ErrorType for Sun50iUsb3Phy {
    type Error = ErrorKind;
}

impl DriverOps for Sun50iUsb3Phy {
    fn probe(dev: &Device) -> Result<Self, Self::Error> {
        let clk = dev.clk_by_index(0).map_err(|e| {
            error!("{}: failed to get phy clock", dev.name());
            e
        })?;

        let reset = dev.reset_by_index(0).map_err(|e| {
            error!("{}: failed to get reset control", dev.name());
            e
        })?;

        let regs = dev
            .read_addr()
            .and_then(|addr| NonNull::new(addr as *mut Sun50iUsb3PhyRegisters))
            .ok_or(ErrorKind::InvalidArgument)?;

        Ok(Self { regs, reset, clk })
    }
}

impl PhyOps for Sun50iUsb3Phy {
    fn init(&mut self) -> Result<(), Self::Error> {
        self.clk.prepare_enable()?;

        if let Err(e) = self.reset.deassert() {
            if let Err(clk_err) = self.clk.disable_unprepare() {
                warn!("sun50i-usb3-phy: failed to disable clock: {}", clk_err);
            }
            return Err(e);
        }

        self.open();

        Ok(())
    }

    fn exit(&mut self) -> Result<(), Self::Error> {
        if let Err(e) = self.reset.assert() {
            warn!("sun50i-usb3-phy: failed to assert reset: {}", e);
        }
        if let Err(e) = self.clk.disable_unprepare() {
            warn!("sun50i-usb3-phy: failed to disable clock: {}", e);
        }

        Ok(())
    }
}
