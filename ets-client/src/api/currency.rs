//! Central bank exchange rates.

use chrono::NaiveDate;

use crate::client::EtsClient;
use crate::envelope::{decode_data, decode_list};
use crate::error::EtsError;
use crate::models::ExchangeRate;
use crate::transport::Transport;

fn rate_path(currency: &str, date: Option<NaiveDate>) -> String {
    let mut path = format!("/currency/rate?currency={}", urlencoding::encode(currency));
    if let Some(date) = date {
        path.push_str(&format!("&date={}", date.format("%Y-%m-%d")));
    }
    path
}

fn rates_path(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => format!("/currency/rates?date={}", date.format("%Y-%m-%d")),
        None => "/currency/rates".to_string(),
    }
}

impl<T: Transport> EtsClient<T> {
    /// Rate of `currency` (e.g. `USD`) on `date`, or the latest when `date` is `None`.
    pub async fn get_exchange_rate(
        &self,
        currency: &str,
        date: Option<NaiveDate>,
    ) -> Result<ExchangeRate, EtsError> {
        let data = self.get(&rate_path(currency, date)).await?;
        Ok(decode_data(data, "get_exchange_rate"))
    }

    pub async fn get_all_exchange_rates(
        &self,
        date: Option<NaiveDate>,
    ) -> Result<Vec<ExchangeRate>, EtsError> {
        let data = self.get(&rates_path(date)).await?;
        Ok(decode_list(data, "get_all_exchange_rates"))
    }
}
