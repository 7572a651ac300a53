use alloc::sync::Arc;
use core::fmt;

use crate::ErrorKind;

/// A reset controller as seen from a consumer device
pub trait ResetProvider: Send + Sync {
    /// Put the line `id` into reset
    fn assert(&self, id: u64) -> Result<(), ErrorKind>;
    /// Release the line `id` from reset
    fn deassert(&self, id: u64) -> Result<(), ErrorKind>;
}

/// A handle to one reset line of a [`ResetProvider`]
#[derive(Clone)]
pub struct ResetCtl {
    provider: Arc<dyn ResetProvider>,
    id: u64,
}

impl ResetCtl {
    pub fn new(provider: Arc<dyn ResetProvider>, id: u64) -> Self {
        Self { provider, id }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn assert(&self) -> Result<(), ErrorKind> {
        self.provider.assert(self.id)
    }

    pub fn deassert(&self) -> Result<(), ErrorKind> {
        self.provider.deassert(self.id)
    }
}

impl fmt::Debug for ResetCtl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResetCtl").field("id", &self.id).finish()
    }
}
