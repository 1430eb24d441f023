//! Column conversions shared by the repositories.
//!
//! Ids are stored as hyphenated UUID text, money as decimal text and
//! timestamps as RFC 3339 text. Decoding failures surface as
//! [`sqlx::Error::Decode`].

use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use servery_domain::money::Money;
use servery_domain::time::Timestamp;

pub(crate) fn decode<T>(value: &str) -> Result<T, sqlx::Error>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    T::from_str(value).map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

pub(crate) fn encode_money(money: Money) -> String {
    money.amount().to_string()
}

pub(crate) fn decode_money(value: &str) -> Result<Money, sqlx::Error> {
    let amount: Decimal = decode(value)?;
    Money::new(amount).map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

pub(crate) fn encode_timestamp(value: Timestamp) -> String {
    value.to_rfc3339()
}

pub(crate) fn decode_timestamp(value: &str) -> Result<Timestamp, sqlx::Error> {
    DateTime::parse_from_rfc3339(value)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

pub(crate) fn encode_count(value: u64) -> Result<i64, sqlx::Error> {
    i64::try_from(value).map_err(|err| sqlx::Error::Encode(Box::new(err)))
}

pub(crate) fn decode_count<T: TryFrom<i64>>(value: i64) -> Result<T, sqlx::Error>
where
    T::Error: std::error::Error + Send + Sync + 'static,
{
    T::try_from(value).map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_decimal_scale_through_text() {
        let money = Money::new(Decimal::new(1650, 2)).unwrap();
        let stored = encode_money(money);
        assert_eq!(stored, "16.50");
        assert_eq!(decode_money(&stored).unwrap(), money);
    }

    #[test]
    fn should_reject_negative_stored_price() {
        assert!(matches!(decode_money("-1"), Err(sqlx::Error::Decode(_))));
    }

    #[test]
    fn should_parse_rfc3339_timestamp() {
        let now = servery_domain::time::now();
        assert_eq!(decode_timestamp(&encode_timestamp(now)).unwrap(), now);
    }

    #[test]
    fn should_reject_negative_count() {
        assert!(decode_count::<u64>(-1).is_err());
        assert_eq!(decode_count::<u32>(4).unwrap(), 4);
    }
}
