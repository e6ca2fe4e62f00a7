//! Edge-independent constant values.

use super::StatisticsProvider;

/// A single value shared by every edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantProvider {
    value: f32,
}

impl ConstantProvider {
    pub fn new(value: f32) -> Self {
        Self { value }
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }
}

impl StatisticsProvider for ConstantProvider {}
