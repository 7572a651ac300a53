use alloc::vec::Vec;
use core::fmt;

use downcast_rs::{impl_downcast, Downcast};
use log::debug;

use crate::{ClassId, Clk, ErrorKind, ErrorType, ResetCtl};

/// Device manager flags
#[repr(u32)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DmFlag {
    /// Device is bound
    Bound = 1 << 6,
}

/// Per-compatible data a driver attaches to its match table
///
/// Implementors are usually SoC descriptor tables. The driver recovers the
/// concrete type with [`Device::driver_data_as`].
pub trait DriverData: Downcast + Sync {}
impl_downcast!(DriverData);

/// An instance of a driver
///
/// This holds information about a device, which is a driver bound to a
/// particular port or peripheral (essentially a driver instance).
///
/// The host driver model creates a `Device` from a devicetree node and fills
/// in the resources it decoded from that node (register base, clocks,
/// resets, boolean properties). A driver only reads them back.
pub struct Device {
    /// Name of device, typically the FDT node name
    name: &'static str,
    /// Compatible string of the node this device was created from
    compatible: &'static str,
    /// The driver used by this device
    driver: Option<&'static Driver>,
    /// Data word for the entry that matched this device with its driver
    driver_data: Option<&'static dyn DriverData>,
    /// First `reg` address of the node, if it has one
    reg: Option<usize>,
    /// Boolean properties present on the node
    properties: Vec<&'static str>,
    /// Clocks listed in the node's `clocks` property, in order
    clocks: Vec<Clk>,
    /// Resets listed in the node's `resets` property, in order
    resets: Vec<ResetCtl>,
    /// List of children of this device
    children: Vec<Device>,
    /// Flags for this device [`DmFlag`] (do not access outside driver model)
    flags: u32,
}

impl Device {
    pub const fn new(name: &'static str, compatible: &'static str) -> Self {
        Self {
            name,
            compatible,
            driver: None,
            driver_data: None,
            reg: None,
            properties: Vec::new(),
            clocks: Vec::new(),
            resets: Vec::new(),
            children: Vec::new(),
            flags: 0,
        }
    }

    pub fn with_reg(mut self, addr: usize) -> Self {
        self.reg = Some(addr);
        self
    }

    pub fn with_property(mut self, property: &'static str) -> Self {
        self.properties.push(property);
        self
    }

    pub fn with_clock(mut self, clk: Clk) -> Self {
        self.clocks.push(clk);
        self
    }

    pub fn with_reset(mut self, reset: ResetCtl) -> Self {
        self.resets.push(reset);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn compatible(&self) -> &'static str {
        self.compatible
    }

    pub fn driver(&self) -> Option<&'static Driver> {
        self.driver
    }

    pub fn driver_data(&self) -> Option<&'static dyn DriverData> {
        self.driver_data
    }

    /// Typed view of the matched driver data
    pub fn driver_data_as<T: DriverData>(&self) -> Option<&'static T> {
        self.driver_data?.downcast_ref::<T>()
    }

    /// Base address of the device's register window, `None` when the node
    /// carries no `reg` property
    pub fn read_addr(&self) -> Option<usize> {
        self.reg
    }

    pub fn has_property(&self, property: &str) -> bool {
        self.properties.iter().any(|p| *p == property)
    }

    pub fn clk_by_index(&self, index: usize) -> Result<Clk, ErrorKind> {
        self.clocks.get(index).cloned().ok_or(ErrorKind::NotFound)
    }

    pub fn reset_by_index(&self, index: usize) -> Result<ResetCtl, ErrorKind> {
        self.resets.get(index).cloned().ok_or(ErrorKind::NotFound)
    }

    pub fn children(&self) -> &[Device] {
        &self.children
    }

    pub fn has_flag(&self, flag: DmFlag) -> bool {
        self.flags & flag as u32 != 0
    }

    pub fn set_flag(&mut self, flag: DmFlag) {
        self.flags |= flag as u32;
    }

    /// Attach `driver` to this device, recording the match table entry that
    /// selected it
    pub fn bind_driver(&mut self, driver: &'static Driver, id: &'static DeviceId) {
        self.driver = Some(driver);
        self.driver_data = id.data();
        self.set_flag(DmFlag::Bound);
        debug!("{}: bound to driver {}", self.name, driver.name());
    }

    /// Bind a child device sharing this device's node
    pub fn bind_child(
        &mut self,
        name: &'static str,
        driver: &'static Driver,
        data: Option<&'static dyn DriverData>,
    ) -> &mut Device {
        let mut child = Device::new(name, self.compatible);
        child.reg = self.reg;
        child.properties = self.properties.clone();
        child.driver = Some(driver);
        child.driver_data = data;
        child.set_flag(DmFlag::Bound);
        debug!("{}: bound child {} to driver {}", self.name, name, driver.name());

        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }
}

impl fmt::Debug for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Device")
            .field("name", &self.name)
            .field("compatible", &self.compatible)
            .field("driver", &self.driver.map(Driver::name))
            .field("reg", &self.reg)
            .field("flags", &self.flags)
            .finish()
    }
}

/// A driver for a feature or peripheral
///
/// This holds methods for setting up a new device, and also removing it.
/// The device needs information to set itself up - this is provided by a
/// device tree node (which we find by looking up matching compatible strings
/// with of_match).
///
/// Drivers all belong to a uclass, representing a class of devices of the
/// same type. Common elements of the drivers can be implemented in the uclass,
/// or the uclass can provide a consistent interface to the drivers within
/// it.
pub struct Driver {
    /// Device name
    name: &'static str,
    /// Identifies the uclass we belong to
    id: ClassId,
    /// List of compatible strings to match, and any identifying data
    /// for each.
    of_match: &'static [DeviceId],
}

impl Driver {
    pub const fn new(name: &'static str, id: ClassId, of_match: &'static [DeviceId]) -> Self {
        Self {
            name,
            id,
            of_match,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn id(&self) -> ClassId {
        self.id
    }

    pub fn of_match(&self) -> &'static [DeviceId] {
        self.of_match
    }

    /// Find the match table entry for `compatible`
    pub fn of_match_device(&self, compatible: &str) -> Option<&'static DeviceId> {
        self.of_match.iter().find(|id| id.compatible() == compatible)
    }
}

impl fmt::Debug for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Driver")
            .field("name", &self.name)
            .field("id", &self.id)
            .finish()
    }
}

/// Lifecycle hooks of a driver
///
/// The implementing type is the driver's private data: `probe` builds it
/// from the device, and the host keeps it alive until `remove`.
pub trait DriverOps: ErrorType + Sized {
    /// Called to bind a device to its driver
    fn bind(_dev: &mut Device) -> Result<(), Self::Error> {
        Ok(())
    }
    /// Called to probe a device, i.e. activate it
    fn probe(dev: &Device) -> Result<Self, Self::Error>;
    /// Called to remove a device, i.e. de-activate it
    fn remove(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Lists the compatible strings supported by a driver
#[derive(Clone, Copy)]
pub struct DeviceId {
    /// Compatible string
    compatible: &'static str,
    /// Data for this compatible string
    data: Option<&'static dyn DriverData>,
}

impl DeviceId {
    pub const fn new(compatible: &'static str) -> Self {
        Self {
            compatible,
            data: None,
        }
    }

    pub const fn with_data(compatible: &'static str, data: &'static dyn DriverData) -> Self {
        Self {
            compatible,
            data: Some(data),
        }
    }

    pub fn compatible(&self) -> &'static str {
        self.compatible
    }

    pub fn data(&self) -> Option<&'static dyn DriverData> {
        self.data
    }
}

impl fmt::Debug for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceId")
            .field("compatible", &self.compatible)
            .field("has_data", &self.data.is_some())
            .finish()
    }
}
