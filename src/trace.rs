use ndarray::Array1;

/// Uniformly time-stamped signal trace, the final parse product.
///
/// `time` and `samples` are co-indexed and always the same length;
/// `time[i] = i / sample_rate_hz`, so `time[0]` is always zero.
#[derive(Clone, Debug)]
pub struct PhysioTrace {
    pub time: Array1<f64>,
    pub samples: Array1<f64>,
    pub sample_rate_hz: f64,
}

impl PhysioTrace {
    pub fn from_samples(samples: Vec<f64>, sample_rate_hz: f64) -> Self {
        let time = time_axis(samples.len(), sample_rate_hz);
        Self {
            time,
            samples: Array1::from_vec(samples),
            sample_rate_hz,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn duration_seconds(&self) -> f64 {
        self.len() as f64 / self.sample_rate_hz
    }
}

/// `t[i] = i / fs` for i in 0..n, seconds.
pub fn time_axis(n: usize, sample_rate_hz: f64) -> Array1<f64> {
    Array1::from_iter((0..n).map(|i| i as f64 / sample_rate_hz))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_axis_starts_at_zero_with_uniform_spacing() {
        let t = time_axis(3, 50.0);
        assert_eq!(t.len(), 3);
        assert_eq!(t[0], 0.0);
        assert!((t[1] - 0.02).abs() < 1e-12);
        assert!((t[2] - 0.04).abs() < 1e-12);
    }

    #[test]
    fn trace_arrays_are_equal_length() {
        let trace = PhysioTrace::from_samples(vec![1.0, 2.0, 3.0, 4.0], 400.0);
        assert_eq!(trace.time.len(), trace.samples.len());
        assert_eq!(trace.len(), 4);
        assert!((trace.duration_seconds() - 0.01).abs() < 1e-12);
    }

    #[test]
    fn empty_trace_is_valid() {
        let trace = PhysioTrace::from_samples(vec![], 50.0);
        assert!(trace.is_empty());
        assert_eq!(trace.time.len(), 0);
    }
}
