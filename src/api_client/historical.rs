use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api_client::{self, ApiError};

/// One dated price record. Wire keys are capitalized the way the backend's
/// dataframe export produces them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    #[serde(rename = "Date")]
    pub date: NaiveDate,

    #[serde(rename = "Price")]
    pub price: f64,

    #[serde(rename = "Volume", default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<u64>,

    /// Signed day-over-day change, in percent.
    #[serde(rename = "Change", default, skip_serializing_if = "Option::is_none")]
    pub change: Option<f64>,
}

/// Fetch the full historical price series, oldest first.
pub async fn fetch_historical() -> Result<Vec<Observation>, ApiError> {
    log::trace!("Fetching historical price series");

    let result = api_client::get::<Vec<Observation>>("/historical").await;

    match &result {
        Ok(observations) => log::info!("Fetched {} historical observations", observations.len()),
        Err(e) => log::error!("Failed to fetch historical data: {}", e),
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_capitalized_wire_keys() {
        let row: Observation =
            serde_json::from_str(r#"{"Date":"2024-01-02","Price":81.5,"Volume":120000,"Change":1.88}"#)
                .unwrap();

        assert_eq!(row.date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(row.price, 81.5);
        assert_eq!(row.volume, Some(120_000));
        assert_eq!(row.change, Some(1.88));
    }

    #[test]
    fn volume_and_change_are_optional() {
        let row: Observation =
            serde_json::from_str(r#"{"Date":"2024-01-01","Price":80.0}"#).unwrap();

        assert_eq!(row.volume, None);
        assert_eq!(row.change, None);
    }
}
