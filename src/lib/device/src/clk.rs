use alloc::sync::Arc;
use core::fmt;

use crate::ErrorKind;

/// A clock controller as seen from a consumer device
///
/// The provider is owned by the clock uclass; consumers only ever reach it
/// through a [`Clk`] handle obtained from their own [`Device`](crate::Device).
pub trait ClkProvider: Send + Sync {
    /// Prepare and ungate clock `id`
    fn enable(&self, id: u64) -> Result<(), ErrorKind>;
    /// Gate and unprepare clock `id`
    fn disable(&self, id: u64) -> Result<(), ErrorKind>;
}

/// A handle to one clock output of a [`ClkProvider`]
#[derive(Clone)]
pub struct Clk {
    provider: Arc<dyn ClkProvider>,
    id: u64,
}

impl Clk {
    pub fn new(provider: Arc<dyn ClkProvider>, id: u64) -> Self {
        Self { provider, id }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn prepare_enable(&self) -> Result<(), ErrorKind> {
        self.provider.enable(self.id)
    }

    pub fn disable_unprepare(&self) -> Result<(), ErrorKind> {
        self.provider.disable(self.id)
    }
}

impl fmt::Debug for Clk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Clk").field("id", &self.id).finish()
    }
}
