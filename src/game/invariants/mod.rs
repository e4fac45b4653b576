//! First-class invariants over the replay state.
//!
//! Each invariant is an independently testable property that must hold
//! after every transition. The full set is debug-asserted by the state
//! machine and exercised directly by tests.

pub mod alternating_marks;
pub mod cursor_bounds;
pub mod snapshot_chain;

pub use alternating_marks::AlternatingMarks;
pub use cursor_bounds::CursorBounds;
pub use snapshot_chain::SnapshotChain;

/// A logical property that must hold for a state.
pub trait Invariant<S> {
    /// Checks whether the property holds.
    fn holds(state: &S) -> bool;

    /// Human-readable statement of the property.
    fn description() -> &'static str;
}

/// Record of a violated invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Statement of the violated property.
    pub description: String,
}

/// Several invariants checked as one step.
pub trait InvariantSet<S> {
    /// Checks every invariant, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, A, B, C> InvariantSet<S> for (A, B, C)
where
    A: Invariant<S>,
    B: Invariant<S>,
    C: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let checks = [
            (A::holds(state), A::description()),
            (B::holds(state), B::description()),
            (C::holds(state), C::description()),
        ];
        let violations: Vec<InvariantViolation> = checks
            .into_iter()
            .filter(|(holds, _)| !holds)
            .map(|(_, description)| InvariantViolation {
                description: description.to_string(),
            })
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Every replay invariant as one composable set.
pub type ReplayInvariants = (SnapshotChain, AlternatingMarks, CursorBounds);
