//! Battery run time estimation.

use ledcalc_common::error::{CalcError, CalcResult};
use serde::Serialize;
use std::fmt;

/// Expected battery life split into whole hours and leftover minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunTime {
    pub hours: u64,
    pub minutes: u32,
}

impl fmt::Display for RunTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}hours and {} minutes", self.hours, self.minutes)
    }
}

/// Run time of a `capacity_mah` battery under a constant `draw_ma` load.
///
/// Hours are truncated, the fractional hour is floored to whole minutes.
///
/// # Errors
///
/// `CalcError::InvalidDraw` if `draw_ma` is zero, negative or not finite.
pub fn estimate_runtime(capacity_mah: u32, draw_ma: f64) -> CalcResult<RunTime> {
    if !(draw_ma.is_finite() && draw_ma > 0.0) {
        return Err(CalcError::InvalidDraw(draw_ma));
    }

    let total_hours = f64::from(capacity_mah) / draw_ma;
    let minutes = (total_hours.fract() * 60.0).floor() as u32;
    Ok(RunTime {
        hours: total_hours.trunc() as u64,
        minutes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_hours() {
        let rt = estimate_runtime(2300, 20.0).unwrap();
        assert_eq!(rt, RunTime { hours: 115, minutes: 0 });
    }

    #[test]
    fn fractional_hour_is_floored_to_minutes() {
        // 2300 / 60 = 38.33 h
        assert_eq!(
            estimate_runtime(2300, 60.0).unwrap(),
            RunTime { hours: 38, minutes: 20 }
        );
        // 2500 / 140 = 17.857 h -> 51.4 min
        assert_eq!(
            estimate_runtime(2500, 140.0).unwrap(),
            RunTime { hours: 17, minutes: 51 }
        );
    }

    #[test]
    fn draw_above_capacity() {
        assert_eq!(
            estimate_runtime(100, 400.0).unwrap(),
            RunTime { hours: 0, minutes: 15 }
        );
        assert_eq!(estimate_runtime(0, 20.0).unwrap(), RunTime { hours: 0, minutes: 0 });
    }

    #[test]
    fn zero_or_negative_draw_is_rejected() {
        assert_eq!(estimate_runtime(2300, 0.0), Err(CalcError::InvalidDraw(0.0)));
        assert!(estimate_runtime(2300, -1.0).is_err());
        assert!(estimate_runtime(2300, f64::INFINITY).is_err());
    }

    #[test]
    fn display_matches_report_wording() {
        let rt = RunTime { hours: 28, minutes: 45 };
        assert_eq!(rt.to_string(), "28hours and 45 minutes");
    }
}
