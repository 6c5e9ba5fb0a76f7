/// Application events
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum AppEvent {
    /// Any key other than the quit key.
    Input,
    Quit,
    /// A frame elapsed, in seconds.
    Tick(f32),
}
