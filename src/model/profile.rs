#[derive(Debug, Clone)]
pub struct ScoringProfile {
    pub normalization: NormalizationMode,
    pub coercion: CoercionPolicy,
    pub band_excellent: f64,
    pub band_good: f64,
    pub band_fair: f64,
    pub max_input_bytes: u64,
}

/// How radar values are scaled to 0..100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizationMode {
    /// Each axis is scaled by the largest of its three rater values.
    PerAxis,
    /// One maximum across every axis and rater.
    Global,
}

/// How non-numeric score fields are treated at the input boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoercionPolicy {
    /// Malformed fields become 0.
    Lenient,
    /// Malformed fields are rejected with an input error.
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationBand {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
}

impl EvaluationBand {
    pub fn label(self) -> &'static str {
        match self {
            EvaluationBand::Excellent => "excellent",
            EvaluationBand::Good => "good",
            EvaluationBand::Fair => "fair",
            EvaluationBand::NeedsImprovement => "needs improvement",
        }
    }
}

impl ScoringProfile {
    pub fn default_v1() -> Self {
        Self {
            normalization: NormalizationMode::PerAxis,
            coercion: CoercionPolicy::Lenient,
            band_excellent: 85.0,
            band_good: 75.0,
            band_fair: 60.0,
            max_input_bytes: 10 * 1024 * 1024,
        }
    }

    pub fn strict_v1() -> Self {
        let mut base = Self::default_v1();
        base.coercion = CoercionPolicy::Strict;
        base
    }

    pub fn band_for(&self, average: f64) -> EvaluationBand {
        if average >= self.band_excellent {
            EvaluationBand::Excellent
        } else if average >= self.band_good {
            EvaluationBand::Good
        } else if average >= self.band_fair {
            EvaluationBand::Fair
        } else {
            EvaluationBand::NeedsImprovement
        }
    }
}
