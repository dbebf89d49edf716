//! Reconciler options.

use serde::{Deserialize, Serialize};

/// Options of a [`VirtualDom`](crate::VirtualDom).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualDomOptions {
    /// Verify the ownership contract on every call
    ///
    /// When disabled, `append` skips the scan for already-mounted descendants
    /// and `update`/`remove` accept roots the instance did not register, as long
    /// as their position can still be recovered from the host.
    #[serde(default = "default_true")]
    pub check_preconditions: bool,
}

fn default_true() -> bool {
    true
}

impl Default for VirtualDomOptions {
    fn default() -> Self {
        Self {
            check_preconditions: true,
        }
    }
}

impl VirtualDomOptions {
    pub fn with_check_preconditions(mut self, check_preconditions: bool) -> Self {
        self.check_preconditions = check_preconditions;
        self
    }
}
