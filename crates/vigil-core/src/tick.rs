/// Per-cycle timing passed to every tick by an external driver loop.
///
/// `time_seconds` is a monotonic clock used for wall-clock throttling; the
/// kernel never reads a system clock itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickContext {
    pub tick: u64,
    pub dt_seconds: f32,
    pub time_seconds: f64,
}
