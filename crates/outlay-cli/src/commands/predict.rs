//! Forecast command implementation

use anyhow::Result;

use outlay_core::{forecast_next_month, Expense};

pub fn cmd_predict(expenses: &[Expense]) -> Result<()> {
    let forecast = forecast_next_month(expenses);

    println!();
    println!("🔮 Next Month Forecast");
    println!("   ───────────────────────────────");

    if !forecast.success {
        println!("   {}", forecast.message.unwrap_or_default());
        return Ok(());
    }

    println!("   Prediction: {:.2}", forecast.prediction);
    if let Some(trend) = forecast.trend {
        println!("   Trend:      {}", trend);
    }
    println!("   Confidence: {}", forecast.confidence);
    if let Some(average) = forecast.average_monthly {
        println!("   Average:    {:.2}/month", average);
    }
    if let Some(last) = forecast.last_month {
        println!("   Last month: {:.2}", last);
    }
    if let Some(points) = forecast.data_points {
        println!("   Based on {} month(s) of history", points);
    }

    if let (Some(months), Some(totals)) = (&forecast.historical_months, &forecast.historical_totals)
    {
        println!();
        println!("   Recent months:");
        for (month, total) in months.iter().zip(totals) {
            println!("   {:7} │ {:>10.2}", month, total);
        }
    }

    Ok(())
}
