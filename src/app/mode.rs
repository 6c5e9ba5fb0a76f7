#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// The script is being revealed or waits for input.
    Playing,
    /// The script completed; the last text stays on screen.
    Finished,
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appmode_is_copy() {
        let mode = AppMode::Finished;
        let copy = mode;
        assert_eq!(mode, copy);
        assert_ne!(AppMode::Playing, AppMode::Quit);
    }
}
