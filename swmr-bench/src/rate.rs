use std::fmt::Display;
use std::fmt::Formatter;
use std::time::Duration;

/// Operations per second.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Rate(pub f64);

impl Rate {
    pub fn hz(&self) -> f64 {
        self.0
    }

    pub fn khz(&self) -> f64 {
        self.0 / 1_000.0
    }

    pub fn mhz(&self) -> f64 {
        self.0 / 1_000_000.0
    }

    /// A zero duration yields a zero rate rather than an infinite one.
    pub fn rate(duration: Duration, ops: u64) -> Rate {
        if duration.is_zero() {
            Rate(0.0)
        } else {
            Rate(ops as f64 / duration.as_secs_f64())
        }
    }

    pub fn maybe_rate(duration: Duration, ops: Option<u64>) -> Option<Rate> {
        ops.map(|ops| Self::rate(duration, ops))
    }
}

impl Display for Rate {
    /// The alternate form (`{:#}`) always prints kHz; otherwise, the unit scales with
    /// the magnitude. Honours a minimum width by right-aligning.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let unaligned = if f.alternate() {
            format!("{:.3} kHz", self.khz())
        } else {
            match self.0 {
                val if val > 1_000_000.0 => format!("{:.3} MHz", self.mhz()),
                val if val > 1_000.0 => format!("{:.3} kHz", self.khz()),
                _ => format!("{:.3} Hz", self.hz()),
            }
        };

        match f.width() {
            Some(width) => write!(f, "{unaligned:>width$}"),
            None => f.write_str(&unaligned),
        }
    }
}
