//! Invoice lifecycle state machine.
//!
//! An invoice is created in `Draft`, moves forward through `Sent` to `Paid`,
//! and may independently become `Overdue` through an external time-based
//! process. `Paid` is terminal.
//!
//! The historical behavior of this subsystem applied `Sent` and `Paid`
//! regardless of the current status; that permissiveness is preserved as the
//! default and a strict policy is available as a configuration choice.

pub mod lifecycle;
pub mod types;

pub use lifecycle::{check_transition, LifecycleError, TransitionPolicy};
pub use types::{Invoice, InvoiceStatus, PDF_BASE_URL};
