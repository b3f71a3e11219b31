//! Search limits and difficulty presets.
//!
//! A search is bounded by a ply depth and a wall-clock budget. Both are
//! validated once, up front, so the recursion never has to deal with bad input.
//!
//! # Difficulty Levels
//!
//! - **Easy**: Depth 2
//! - **Medium**: Depth 3 (default)
//! - **Hard**: Depth 4
//! - **Expert**: Depth 5
//!
//! Every level shares the same 5 second budget.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

use crate::error::SearchError;

/// Wall-clock budget used by the difficulty presets.
pub const DEFAULT_TIME_BUDGET_MS: u64 = 5000;

/// Validated depth and time budget for one search call.
#[derive(Debug, Clone)]
pub struct SearchLimits {
    depth: u32,
    time_budget: Duration,
    cancel: Option<Arc<AtomicBool>>,
}

impl SearchLimits {
    /// Fails with [`SearchError::InvalidSearchParameters`] unless
    /// `depth >= 1` and `time_budget_ms >= 0`.
    pub fn new(depth: i32, time_budget_ms: i64) -> Result<Self, SearchError> {
        if depth < 1 || time_budget_ms < 0 {
            return Err(SearchError::InvalidSearchParameters {
                depth,
                time_budget_ms,
            });
        }

        Ok(Self {
            depth: depth as u32,
            time_budget: Duration::from_millis(time_budget_ms as u64),
            cancel: None,
        })
    }

    /// Attach a flag that stops the search as soon as it is set, exactly as if
    /// the budget had run out.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn time_budget(&self) -> Duration {
        self.time_budget
    }

    pub fn cancel_flag(&self) -> Option<&AtomicBool> {
        self.cancel.as_deref()
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Difficulty::default().limits()
    }
}

/// Preset search strengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    pub fn all() -> &'static [Difficulty] {
        &[
            Difficulty::Easy,
            Difficulty::Medium,
            Difficulty::Hard,
            Difficulty::Expert,
        ]
    }

    /// Search depth in plies
    pub fn max_depth(&self) -> u32 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 3,
            Difficulty::Hard => 4,
            Difficulty::Expert => 5,
        }
    }

    pub fn time_limit_ms(&self) -> u64 {
        DEFAULT_TIME_BUDGET_MS
    }

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        }
    }

    pub fn limits(&self) -> SearchLimits {
        SearchLimits {
            depth: self.max_depth(),
            time_budget: Duration::from_millis(self.time_limit_ms()),
            cancel: None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::all()
            .iter()
            .copied()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown difficulty {:?} (expected easy, medium, hard or expert)", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_limits() {
        let limits = SearchLimits::new(3, 250).unwrap();
        assert_eq!(limits.depth(), 3);
        assert_eq!(limits.time_budget(), Duration::from_millis(250));
        assert!(limits.cancel_flag().is_none());
    }

    #[test]
    fn test_zero_budget_is_valid() {
        assert!(SearchLimits::new(1, 0).is_ok());
    }

    #[test]
    fn test_rejects_bad_depth_and_budget() {
        assert_eq!(
            SearchLimits::new(0, 100).unwrap_err(),
            SearchError::InvalidSearchParameters {
                depth: 0,
                time_budget_ms: 100
            }
        );
        assert!(SearchLimits::new(-2, 100).is_err());
        assert!(SearchLimits::new(2, -1).is_err());
    }

    #[test]
    fn test_difficulty_depths_increase() {
        let depths: Vec<u32> = Difficulty::all().iter().map(|d| d.max_depth()).collect();
        assert!(depths.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(Difficulty::default(), Difficulty::Medium);
        assert_eq!(SearchLimits::default().depth(), 3);
        assert_eq!(
            SearchLimits::default().time_budget(),
            Duration::from_millis(DEFAULT_TIME_BUDGET_MS)
        );
    }

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!("hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!("Expert".parse::<Difficulty>(), Ok(Difficulty::Expert));
        assert!("impossible".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_cancel_flag_is_shared() {
        let flag = Arc::new(AtomicBool::new(false));
        let limits = SearchLimits::new(2, 100).unwrap().with_cancel_flag(flag.clone());
        flag.store(true, std::sync::atomic::Ordering::SeqCst);
        assert!(limits
            .cancel_flag()
            .unwrap()
            .load(std::sync::atomic::Ordering::SeqCst));
    }
}
