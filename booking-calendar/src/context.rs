use calendar_utils::GridPolicy;

use crate::clock::{Clock, SystemClock};

/// All the context attached to a calendar that can alter how it is rendered
/// and which inputs it accepts.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Context<C = SystemClock> {
    pub clock: C,
    pub grid_policy: GridPolicy,
}

impl<C> Context<C> {
    /// Attach a new clock to this context.
    ///
    /// ```
    /// use booking_calendar::{Clock, Context, FixedClock};
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2021, 6, 15).unwrap();
    /// let ctx = Context::default().with_clock(FixedClock(date));
    /// assert_eq!(ctx.clock.today(), date);
    /// ```
    pub fn with_clock<C2: Clock>(self, clock: C2) -> Context<C2> {
        Context { clock, grid_policy: self.grid_policy }
    }

    /// Choose which days are laid out in the grid of a month.
    pub fn with_grid_policy(self, grid_policy: GridPolicy) -> Self {
        Self { grid_policy, ..self }
    }
}

impl Default for Context<SystemClock> {
    fn default() -> Self {
        Self { clock: SystemClock, grid_policy: GridPolicy::default() }
    }
}
