//! Performance classification against market benchmarks

use crate::funnel::{
    market::{Benchmarks, CostBenchmarks, RateBenchmarks},
    types::{CostRating, PerformanceRating, Rating},
};

/// Minimum ROI percentage for the excellent, good and average tiers.
pub const ROI_THRESHOLDS: [i64; 3] = [200, 100, 50];

/// Minimum average score for the excellent, good and average overall tiers.
const OVERALL_THRESHOLDS: [f64; 3] = [3.5, 2.5, 1.5];

/// Rates a funnel's metrics against one benchmark table
#[derive(Debug, Clone, Copy)]
pub struct PerformanceClassifier {
    benchmarks: Benchmarks,
}

impl PerformanceClassifier {
    pub fn new(benchmarks: Benchmarks) -> Self {
        Self { benchmarks }
    }

    pub fn classify(
        &self,
        click_rate: f64,
        conversion_rate: f64,
        cost_per_lead: u64,
        roi: i64,
    ) -> PerformanceRating {
        let click_rate = rate_tier(click_rate, &self.benchmarks.click_rate);
        let conversion = rate_tier(conversion_rate, &self.benchmarks.conversion_rate);
        let cost = cost_tier(cost_per_lead as f64, &self.benchmarks.cost_per_lead);
        let roi = roi_tier(roi);

        PerformanceRating {
            click_rate,
            conversion,
            cost,
            roi,
            overall: overall_rating(click_rate, conversion, cost, roi),
        }
    }
}

/// Classify with an explicit benchmark table.
pub fn classify(
    benchmarks: &Benchmarks,
    click_rate: f64,
    conversion_rate: f64,
    cost_per_lead: u64,
    roi: i64,
) -> PerformanceRating {
    PerformanceClassifier::new(*benchmarks).classify(click_rate, conversion_rate, cost_per_lead, roi)
}

fn rate_tier(value: f64, table: &RateBenchmarks) -> Rating {
    if value >= table.excellent {
        Rating::Excellent
    } else if value >= table.good {
        Rating::Good
    } else if value >= table.average {
        Rating::Average
    } else {
        Rating::Poor
    }
}

fn cost_tier(cost: f64, table: &CostBenchmarks) -> CostRating {
    if cost <= table.excellent {
        CostRating::Excellent
    } else if cost <= table.good {
        CostRating::Good
    } else if cost <= table.acceptable {
        CostRating::Acceptable
    } else {
        CostRating::Expensive
    }
}

pub fn roi_tier(roi: i64) -> Rating {
    let [excellent, good, average] = ROI_THRESHOLDS;
    if roi >= excellent {
        Rating::Excellent
    } else if roi >= good {
        Rating::Good
    } else if roi >= average {
        Rating::Average
    } else {
        Rating::Poor
    }
}

/// Average the four category scores and map the mean back onto a tier.
pub fn overall_rating(click_rate: Rating, conversion: Rating, cost: CostRating, roi: Rating) -> Rating {
    let total = click_rate.score() + conversion.score() + cost.score() + roi.score();
    let average = f64::from(total) / 4.0;

    let [excellent, good, fair] = OVERALL_THRESHOLDS;
    if average >= excellent {
        Rating::Excellent
    } else if average >= good {
        Rating::Good
    } else if average >= fair {
        Rating::Average
    } else {
        Rating::Poor
    }
}
