/// Alias to a scalar floating type.
///
/// NOTE: fitness values mix large performance totals with a scaled cost headroom, so `f64`
/// is used to keep whole units distinguishable.
pub type Float = f64;
