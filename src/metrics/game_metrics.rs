use std::time::{Duration, Instant};

/// In-session stats shown in the header; nothing here is persisted
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub longest_snake: usize,
    pub resets: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            longest_snake: 1,
            resets: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    pub fn observe_length(&mut self, length: usize) {
        if length > self.longest_snake {
            self.longest_snake = length;
        }
    }

    pub fn on_reset(&mut self) {
        self.resets += 1;
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
