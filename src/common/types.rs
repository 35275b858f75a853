/// Processing statistics
#[derive(Debug, Default)]
pub struct ProcessingStats {
    pub successful: usize,
    pub failed: usize,
    pub total: usize,
}

impl ProcessingStats {
    pub fn record(&mut self, ok: bool) {
        self.total += 1;
        if ok {
            self.successful += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.successful as f64 / self.total as f64 * 100.0
        }
    }
}
