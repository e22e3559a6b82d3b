//! Shared fixtures for text extractor testing
//!
//! Content snippets mirror the four known equipment dialects, including
//! the header/footer noise real logs intermix with data lines.

mod extractor_tests;

/// Hierarchical (VIO1008 style) log with two labels on two channels
pub fn hierarchical_content() -> &'static str {
    "\
[-] 12:30:01.123   MeasureTask
      |  Voltage_Ch01       -2.498169   V          ok
      |  MeanVoltage_Ch01   -2.498347   V          ok
      |  Voltage_Ch02        2.501833   V          ok
      |  MeanVoltage_Ch02    2.501901   V          ok
[-] 12:30:02.123   MeasureTask
      |  Voltage_Ch01       -2.498170   V          ok
      |  MeanVoltage_Ch01   -2.498351   V          ok
"
}

/// Flat labeled (VT2816A style) log with a header line
pub fn flat_labeled_content() -> &'static str {
    "\
Time        Name                        Data
66.001210   VT2816_1_Ch1::CurVoltage    10.011883
66.101210   VT2816_1_Ch2::CurVoltage    10.012001
66.201210   VT2816_1_Ch1::CurVoltage    10.011790
"
}

/// Flat label-less (VN1630A style) log
pub fn flat_plain_content() -> &'static str {
    "\
Time        Name            Data
15.001821   VN1600_1::AIN   0.686400
15.101821   VN1600_1::AIN   0.686100
15.201821   VN1600_1::AIN   0.686350
"
}

/// Content with no recognizable data lines
pub fn noise_content() -> &'static str {
    "\
Session started
Operator: bench 4
--- end of preamble ---
"
}
