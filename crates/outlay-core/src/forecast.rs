//! Next-month spending forecast
//!
//! Buckets expenses into monthly totals, fits an ordinary least-squares
//! line over (month index, total), and extrapolates one month ahead. This
//! is a naive trend line, not a learned model; the thresholds below are
//! product behavior.

use crate::aggregate::{aggregate_by_month, round_cents};
use crate::models::{Confidence, Expense, Forecast, Trend};

/// Minimum number of distinct months required to fit a line
const MIN_MONTHS: usize = 2;

/// Slope magnitude (currency units per month) below which spending is
/// reported as stable
const STABLE_SLOPE: f64 = 100.0;

/// Number of trailing months echoed back as history
const HISTORY_MONTHS: usize = 3;

/// Predict the next month's total spend from historical expenses.
///
/// With fewer than two distinct months of data the forecast is returned
/// with `success == false` and an explanatory message rather than an error;
/// a thin history is an expected state for new users, not a failure.
pub fn forecast_next_month(expenses: &[Expense]) -> Forecast {
    let monthly = aggregate_by_month(expenses);

    if monthly.len() < MIN_MONTHS {
        return Forecast::insufficient(
            "Insufficient data. Need at least 2 months of expense history.",
        );
    }

    let totals: Vec<f64> = monthly.iter().map(|m| m.total).collect();
    let (slope, intercept) = least_squares(&totals);

    // Predict at the first index past the observed range, floored at zero
    let predicted = (slope * totals.len() as f64 + intercept).max(0.0);

    let trend = if slope > STABLE_SLOPE {
        Trend::Increasing
    } else if slope < -STABLE_SLOPE {
        Trend::Decreasing
    } else {
        Trend::Stable
    };

    let data_points = totals.len();
    let confidence = if data_points >= 6 {
        Confidence::High
    } else if data_points >= 4 {
        Confidence::Medium
    } else {
        Confidence::Low
    };

    let average = totals.iter().sum::<f64>() / data_points as f64;
    let last = totals[data_points - 1];
    let tail = monthly.len().saturating_sub(HISTORY_MONTHS);

    Forecast {
        success: true,
        message: None,
        prediction: round_cents(predicted),
        confidence,
        trend: Some(trend),
        slope: Some(round_cents(slope)),
        average_monthly: Some(round_cents(average)),
        last_month: Some(round_cents(last)),
        data_points: Some(data_points),
        historical_months: Some(monthly[tail..].iter().map(|m| m.month.clone()).collect()),
        historical_totals: Some(totals[tail..].to_vec()),
    }
}

/// Ordinary least-squares fit of `ys` over x = 0..n, returning
/// (slope, intercept)
fn least_squares(ys: &[f64]) -> (f64, f64) {
    let n = ys.len() as f64;
    let mean_x = (n - 1.0) / 2.0;
    let mean_y = ys.iter().sum::<f64>() / n;

    let mut ss_xy = 0.0;
    let mut ss_xx = 0.0;
    for (i, y) in ys.iter().enumerate() {
        let dx = i as f64 - mean_x;
        ss_xy += dx * (y - mean_y);
        ss_xx += dx * dx;
    }

    let slope = if ss_xx == 0.0 { 0.0 } else { ss_xy / ss_xx };
    (slope, mean_y - slope * mean_x)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(amount: f64, date: &str) -> Expense {
        Expense {
            id: String::new(),
            title: "x".to_string(),
            amount,
            category: "Misc".to_string(),
            date: date.to_string(),
            description: String::new(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_insufficient_history_reports_failure_shape() {
        let forecast = forecast_next_month(&[expense(100.0, "2026-01-10")]);
        assert!(!forecast.success);
        assert_eq!(forecast.prediction, 0.0);
        assert_eq!(forecast.confidence, Confidence::Low);
        assert!(forecast.message.unwrap().contains("at least 2 months"));
        assert!(forecast.trend.is_none());
    }

    #[test]
    fn test_empty_history_reports_failure_shape() {
        assert!(!forecast_next_month(&[]).success);
    }

    #[test]
    fn test_linear_history_extrapolates_exactly() {
        // 1000, 2000, 3000 -> slope 1000, next point 4000
        let expenses = vec![
            expense(1000.0, "2026-01-05"),
            expense(2000.0, "2026-02-05"),
            expense(3000.0, "2026-03-05"),
        ];

        let forecast = forecast_next_month(&expenses);
        assert!(forecast.success);
        assert_eq!(forecast.prediction, 4000.0);
        assert_eq!(forecast.slope, Some(1000.0));
        assert_eq!(forecast.trend, Some(Trend::Increasing));
        assert_eq!(forecast.confidence, Confidence::Low);
        assert_eq!(forecast.data_points, Some(3));
        assert_eq!(forecast.average_monthly, Some(2000.0));
        assert_eq!(forecast.last_month, Some(3000.0));
    }

    #[test]
    fn test_prediction_never_negative() {
        let expenses = vec![
            expense(900.0, "2026-01-05"),
            expense(300.0, "2026-02-05"),
            // steep decline would cross zero at the next index
        ];

        let forecast = forecast_next_month(&expenses);
        assert!(forecast.success);
        assert_eq!(forecast.prediction, 0.0);
        assert_eq!(forecast.trend, Some(Trend::Decreasing));
    }

    #[test]
    fn test_flat_history_is_stable() {
        let expenses = vec![
            expense(1500.0, "2026-01-05"),
            expense(1520.0, "2026-02-05"),
            expense(1480.0, "2026-03-05"),
        ];

        let forecast = forecast_next_month(&expenses);
        assert_eq!(forecast.trend, Some(Trend::Stable));
    }

    #[test]
    fn test_confidence_tiers_follow_month_count() {
        let four_months: Vec<Expense> = (1..=4)
            .map(|m| expense(1000.0, &format!("2026-{:02}-10", m)))
            .collect();
        assert_eq!(
            forecast_next_month(&four_months).confidence,
            Confidence::Medium
        );

        let six_months: Vec<Expense> = (1..=6)
            .map(|m| expense(1000.0, &format!("2026-{:02}-10", m)))
            .collect();
        assert_eq!(
            forecast_next_month(&six_months).confidence,
            Confidence::High
        );
    }

    #[test]
    fn test_history_tail_is_last_three_months() {
        let expenses: Vec<Expense> = (1..=5)
            .map(|m| expense(100.0 * m as f64, &format!("2026-{:02}-10", m)))
            .collect();

        let forecast = forecast_next_month(&expenses);
        assert_eq!(
            forecast.historical_months,
            Some(vec![
                "2026-03".to_string(),
                "2026-04".to_string(),
                "2026-05".to_string()
            ])
        );
        assert_eq!(
            forecast.historical_totals,
            Some(vec![300.0, 400.0, 500.0])
        );
    }

    #[test]
    fn test_multiple_expenses_in_a_month_are_summed_before_fitting() {
        let expenses = vec![
            expense(400.0, "2026-01-02"),
            expense(600.0, "2026-01-20"),
            expense(2000.0, "2026-02-11"),
        ];

        let forecast = forecast_next_month(&expenses);
        // Months: 1000, 2000 -> slope 1000, predict 3000
        assert_eq!(forecast.prediction, 3000.0);
    }
}
