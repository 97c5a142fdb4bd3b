use std::time::Duration;

/// Options for configuring an [`AStarSolver`](crate::AStarSolver)
///
/// Default options:
/// ```
/// # use astar_solver::SolverConfig;
/// # use std::time::Duration;
/// assert_eq!(
/// 	SolverConfig {
/// 		timeout: Duration::from_secs(30),
/// 		size_hint: 0,
/// 	},
/// 	Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolverConfig {
	/// How long a Search may run before it gives up with
	/// [`SolverOutcome::Timeout`](crate::SolverOutcome::Timeout) (defaults to 30 seconds).
	///
	/// The time is measured from the moment the Solver is created. It is checked once per
	/// expanded Vertex, before that Vertex is expanded, so a Search may overshoot the Timeout by
	/// the time it takes to relax the Edges of a single Vertex.
	pub timeout: Duration,
	/// The expected number of Vertices the Search will touch (defaults to `0`).
	///
	/// Only used to pre-allocate the internal tables. A good guess saves a few reallocations,
	/// a bad one costs nothing but memory.
	pub size_hint: usize,
}

impl SolverConfig {
	/// a SolverConfig that never times out
	///
	/// Values:
	/// ```
	/// # use astar_solver::SolverConfig;
	/// # use std::time::Duration;
	/// assert_eq!(
	/// 	SolverConfig {
	/// 		timeout: Duration::MAX,
	/// 		size_hint: 0,
	/// 	},
	/// 	SolverConfig::UNBOUNDED
	/// );
	/// ```
	pub const UNBOUNDED: SolverConfig = SolverConfig {
		timeout: Duration::MAX,
		size_hint: 0,
	};

	/// The default config with a different Timeout
	/// ## Examples
	/// ```
	/// # use astar_solver::SolverConfig;
	/// # use std::time::Duration;
	/// let config = SolverConfig::with_timeout(Duration::from_millis(50));
	/// assert_eq!(config.timeout, Duration::from_millis(50));
	/// assert_eq!(config.size_hint, 0);
	/// ```
	pub fn with_timeout(timeout: Duration) -> SolverConfig {
		SolverConfig {
			timeout,
			..Default::default()
		}
	}

	/// The default config with a Timeout given in seconds.
	///
	/// Negative, NaN or otherwise unrepresentable values are clamped: anything not above 0 means
	/// "time out immediately", anything too large means "never time out".
	/// ## Examples
	/// ```
	/// # use astar_solver::SolverConfig;
	/// # use std::time::Duration;
	/// assert_eq!(SolverConfig::with_timeout_secs(1.5).timeout, Duration::from_millis(1500));
	/// assert_eq!(SolverConfig::with_timeout_secs(-3.0).timeout, Duration::ZERO);
	/// assert_eq!(SolverConfig::with_timeout_secs(f64::INFINITY).timeout, Duration::MAX);
	/// ```
	pub fn with_timeout_secs(seconds: f64) -> SolverConfig {
		let timeout = if seconds.is_nan() || seconds <= 0.0 {
			Duration::ZERO
		} else {
			Duration::try_from_secs_f64(seconds).unwrap_or(Duration::MAX)
		};
		SolverConfig::with_timeout(timeout)
	}

	/// Sets the `size_hint`
	/// ## Examples
	/// ```
	/// # use astar_solver::SolverConfig;
	/// # use std::time::Duration;
	/// let config = SolverConfig::with_timeout(Duration::from_secs(2)).size_hint(1024);
	/// assert_eq!(config.timeout, Duration::from_secs(2));
	/// assert_eq!(config.size_hint, 1024);
	/// ```
	pub fn size_hint(mut self, size_hint: usize) -> SolverConfig {
		self.size_hint = size_hint;
		self
	}
}

impl Default for SolverConfig {
	fn default() -> SolverConfig {
		SolverConfig {
			timeout: Duration::from_secs(30),
			size_hint: 0,
		}
	}
}

/// A Timeout alone is enough to configure a Search
///
/// ```
/// # use astar_solver::SolverConfig;
/// # use std::time::Duration;
/// let config: SolverConfig = Duration::from_millis(250).into();
/// assert_eq!(config, SolverConfig::with_timeout(Duration::from_millis(250)));
/// ```
impl From<Duration> for SolverConfig {
	fn from(timeout: Duration) -> SolverConfig {
		SolverConfig::with_timeout(timeout)
	}
}
