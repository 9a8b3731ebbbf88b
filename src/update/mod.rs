//! Update planning and execution
//!
//! `plan` holds the pure decision logic; `execute` performs the single
//! pull request update through the platform seam.

mod execute;
mod plan;

pub use execute::execute_update;
pub use plan::{
    FieldDecision, FieldSettings, UpdatePlan, build_payload, decide, plan_field, plan_update,
    run_outputs,
};
