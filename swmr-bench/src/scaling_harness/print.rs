//! Printing of options and results for the benchmark.

use crate::scaling_harness::{BenchmarkResult, Options};
use std::fmt::{Display, Formatter};

impl Display for Options {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "|{:>55}|{:>15}|{:15}|{:>15}|{:>15}|{:>15}|",
            "threads",
            self.threads,
            "",
            "duration",
            format!("{:?}", self.duration),
            ""
        )
    }
}

impl Display for BenchmarkResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let read_rate = self.maybe_rate(self.reads);
        let write_rate = self.maybe_rate(self.writes);
        let total_rate = self.rate(self.total());
        write!(
            f,
            "{:>15}|{:>15}|{:>15}|{:>15}|{:>15}|",
            self.threads,
            read_rate.map_or(String::from("-"), |rate| format!("{:.3}", rate.khz())),
            write_rate.map_or(String::from("-"), |rate| format!("{:.3}", rate.khz())),
            format!("{:.3}", total_rate.khz()),
            self.peak_readers.map_or(String::from("-"), |peak| peak.to_string()),
        )
    }
}

pub struct Separator();

impl Display for Separator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "|{:->55}|{:->15}|{:->15}|{:->15}|{:->15}|{:->15}|",
            "", "", "", "", "", ""
        )
    }
}

pub struct Header();

impl Display for Header {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "|{:55}|{:>15}|{:>15}|{:>15}|{:>15}|{:>15}|",
            "", "threads", "reads (kHz)", "writes (kHz)", "total (kHz)", "peak readers"
        )
    }
}
