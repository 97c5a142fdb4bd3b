use std::fmt;

/// How a Search ended
///
/// Neither `Timeout` nor `Unsolvable` is an Error: both are regular answers to the question
/// "what is the shortest Path from start to goal?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolverOutcome {
	/// The goal was reached. The Solution holds the shortest Path.
	Solved,
	/// The Timeout ran out before the goal was reached.
	Timeout,
	/// Every Vertex reachable from the start was expanded without reaching the goal.
	Unsolvable,
}

impl SolverOutcome {
	/// `true` for [`SolverOutcome::Solved`]
	pub fn is_solved(self) -> bool {
		self == SolverOutcome::Solved
	}
}

impl fmt::Display for SolverOutcome {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		let name = match self {
			SolverOutcome::Solved => "SOLVED",
			SolverOutcome::Timeout => "TIMEOUT",
			SolverOutcome::Unsolvable => "UNSOLVABLE",
		};
		fmt.write_str(name)
	}
}

#[test]
fn outcome_display() {
	assert_eq!(SolverOutcome::Solved.to_string(), "SOLVED");
	assert_eq!(SolverOutcome::Timeout.to_string(), "TIMEOUT");
	assert_eq!(SolverOutcome::Unsolvable.to_string(), "UNSOLVABLE");
	assert!(SolverOutcome::Solved.is_solved());
	assert!(!SolverOutcome::Timeout.is_solved());
}
