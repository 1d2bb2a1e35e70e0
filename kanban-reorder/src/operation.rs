//! Operation traits implemented by the move commands

use crate::context::ReorderContext;
use crate::error::Result;
use crate::outcome::Reorder;

/// Verb/noun metadata for a command
pub trait Operation {
    fn verb(&self) -> &'static str;

    fn noun(&self) -> &'static str;

    /// Canonical op string, e.g. "move card"
    fn op_string(&self) -> String {
        format!("{} {}", self.verb(), self.noun())
    }
}

/// A command that resolves against a read-only snapshot
pub trait Execute: Operation {
    fn execute(&self, ctx: &ReorderContext<'_>) -> Result<Reorder>;
}
