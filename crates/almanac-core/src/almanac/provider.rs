use super::calculator::{DailyAlmanac, DailyAlmanacCalculator};
use crate::birth::BirthProfile;
use crate::error::Result;

/// Source of daily almanacs.
///
/// The built-in [`DailyAlmanacCalculator`] is always available. An external
/// implementation reports its own failures as
/// [`CoreError::OracleUnavailable`](crate::CoreError::OracleUnavailable);
/// callers surface that error instead of falling back to the calculator.
pub trait AlmanacProvider: Send + Sync {
    /// Short identifier used in error messages and logs.
    fn name(&self) -> &str;

    /// Almanac for an ISO `YYYY-MM-DD` date, optionally personalized.
    fn daily(&self, date: &str, birth: Option<&BirthProfile>) -> Result<DailyAlmanac>;
}

impl AlmanacProvider for DailyAlmanacCalculator {
    fn name(&self) -> &str {
        "builtin"
    }

    fn daily(&self, date: &str, birth: Option<&BirthProfile>) -> Result<DailyAlmanac> {
        self.compute(date, birth)
    }
}

impl<P: AlmanacProvider + ?Sized> AlmanacProvider for &P {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn daily(&self, date: &str, birth: Option<&BirthProfile>) -> Result<DailyAlmanac> {
        (**self).daily(date, birth)
    }
}

impl<P: AlmanacProvider + ?Sized> AlmanacProvider for Box<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn daily(&self, date: &str, birth: Option<&BirthProfile>) -> Result<DailyAlmanac> {
        (**self).daily(date, birth)
    }
}
