/// Reserved name of the label feature.
pub const LABEL_FEATURE: &str = "Ans";
/// Gains closer than this are treated as equal during split selection.
pub const EPSILON: f64 = 1e-10;
/// Indentation added per tree level when printing.
pub const INDENT: &str = "   ";
/// Printed in place of a label for leaves no training example reached.
pub const NO_DATA_LABEL: &str = "None";
/// Decimal places used when rendering gains in diagnostics.
pub const GAIN_PRECISION: i32 = 4;
