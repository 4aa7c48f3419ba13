use crate::graph::ActionId;

/// Combo engine constants.
///
/// Everything the resolver needs is fixed at compile time; per-deployment
/// tuning (overflow handling, busy warnings) lives in the runtime crate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ComboConfig;

impl ComboConfig {
    // ===== compile-time constants used as type parameters =====
    /// Input tokens buffered per actor when no capacity is given.
    pub const DEFAULT_INPUT_CAPACITY: usize = 8;
    /// Maximum number of issues a [`GraphReport`](crate::GraphReport) keeps.
    /// Further issues are only counted.
    pub const MAX_REPORTED_ISSUES: usize = 32;

    // ===== graph conventions =====
    /// Index of the idle/neutral node. Always the fallback target.
    pub const IDLE_NODE: usize = 0;
    /// Action reported when no input was examined.
    pub const NO_ACTION: ActionId = ActionId::NONE;
}
