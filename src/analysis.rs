use crate::api_client::historical::Observation;

/// Rolling mean of `price` over a trailing `window`, index-aligned with the
/// input. The first `window - 1` entries are `None` since there is not enough
/// history to fill the window yet.
///
/// Maintains a running sum instead of rescanning the window per index.
pub fn moving_average(observations: &[Observation], window: usize) -> Vec<Option<f64>> {
    if window == 0 {
        return vec![None; observations.len()];
    }

    let mut averages = Vec::with_capacity(observations.len());
    let mut sum = 0.0;

    for (i, observation) in observations.iter().enumerate() {
        sum += observation.price;
        if i + 1 > window {
            sum -= observations[i - window].price;
        }

        if i + 1 >= window {
            averages.push(Some(sum / window as f64));
        } else {
            averages.push(None);
        }
    }

    averages
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn series(prices: &[f64]) -> Vec<Observation> {
        prices
            .iter()
            .enumerate()
            .map(|(i, &price)| Observation {
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Duration::days(i as i64),
                price,
                volume: None,
                change: None,
            })
            .collect()
    }

    #[test]
    fn matches_input_length_and_leaves_warmup_absent() {
        let observations = series(&[10.0, 20.0, 30.0, 40.0, 50.0]);
        let averages = moving_average(&observations, 3);

        assert_eq!(averages.len(), observations.len());
        assert_eq!(averages[0], None);
        assert_eq!(averages[1], None);
        assert_eq!(averages[2], Some(20.0));
        assert_eq!(averages[3], Some(30.0));
        assert_eq!(averages[4], Some(40.0));
    }

    #[test]
    fn two_day_window_example() {
        let observations = series(&[80.0, 81.5]);
        assert_eq!(moving_average(&observations, 2), vec![None, Some(80.75)]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(moving_average(&[], 30), Vec::<Option<f64>>::new());
    }

    #[test]
    fn window_longer_than_series_is_all_absent() {
        let observations = series(&[80.0, 81.5, 79.25]);
        assert_eq!(moving_average(&observations, 4), vec![None, None, None]);
    }

    #[test]
    fn window_of_one_echoes_prices() {
        let observations = series(&[80.0, 81.5]);
        assert_eq!(moving_average(&observations, 1), vec![Some(80.0), Some(81.5)]);
    }
}
