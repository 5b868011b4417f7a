//! "Best of" queries: which bucket earns the most per hour and by how much
//! it beats the others.

use crate::core::calculator::grouping::BucketStats;

#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub key: String,
    pub rate: i64,
    /// Percentage over the average of the other non-zero buckets.
    pub improvement: Option<f64>,
}

/// Highest hourly rate, ignoring zero-rate buckets. Ties keep the first
/// bucket in canonical order.
pub fn best_bucket(rates: &[(String, i64)]) -> Option<&(String, i64)> {
    rates
        .iter()
        .filter(|(_, r)| *r != 0)
        .fold(None, |best: Option<&(String, i64)>, cur| match best {
            Some(b) if b.1 >= cur.1 => Some(b),
            _ => Some(cur),
        })
}

/// `((best − avg) / ((best + avg) / 2)) × 100` over the other valid buckets.
pub fn improvement_over_others(best: i64, others: &[i64]) -> Option<f64> {
    if others.is_empty() {
        return None;
    }

    let avg = others.iter().sum::<i64>() as f64 / others.len() as f64;
    let denominator = (best as f64 + avg) / 2.0;
    if denominator == 0.0 {
        return None;
    }

    Some((best as f64 - avg) / denominator * 100.0)
}

pub fn compare(rates: &[(String, i64)]) -> Option<Comparison> {
    let (key, rate) = best_bucket(rates)?;

    let others: Vec<i64> = rates
        .iter()
        .filter(|(k, r)| *r != 0 && k != key)
        .map(|(_, r)| *r)
        .collect();

    Some(Comparison {
        key: key.clone(),
        rate: *rate,
        improvement: improvement_over_others(*rate, &others),
    })
}

pub fn compare_buckets(stats: &[BucketStats]) -> Option<Comparison> {
    let rates: Vec<(String, i64)> = stats
        .iter()
        .map(|b| (b.key.clone(), b.hourly_rate))
        .collect();
    compare(&rates)
}
