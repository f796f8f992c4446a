/// Running arithmetic mean that ignores missing samples.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MeanAccumulator {
    sum: f64,
    count: usize,
}

impl MeanAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: Option<f64>) {
        if let Some(v) = value.filter(|v| !v.is_nan()) {
            self.sum += v;
            self.count += 1;
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// `None` when no sample was pushed
    pub fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum / self.count as f64)
        }
    }
}

impl FromIterator<Option<f64>> for MeanAccumulator {
    fn from_iter<I: IntoIterator<Item = Option<f64>>>(iter: I) -> Self {
        let mut acc = Self::new();
        for value in iter {
            acc.push(value);
        }
        acc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_ignores_missing() {
        let acc: MeanAccumulator = [Some(10.0), None, Some(12.0), Some(f64::NAN)]
            .into_iter()
            .collect();

        assert_eq!(acc.count(), 2);
        assert_eq!(acc.mean(), Some(11.0));
    }

    #[test]
    fn test_empty_mean_is_none_not_zero() {
        let acc: MeanAccumulator = [None, None].into_iter().collect();
        assert_eq!(acc.mean(), None);
        assert_eq!(MeanAccumulator::new().mean(), None);
    }
}
