use std::time::Instant;

pub struct TimeEstimation;

impl TimeEstimation {
    /// Run an action and report how long it took in whole milliseconds.
    pub fn estimate<T, F: FnOnce() -> T>(action: F) -> (T, u64) {
        let start = Instant::now();
        let result = action();

        (result, start.elapsed().as_millis() as u64)
    }
}
