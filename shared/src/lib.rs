//! Wire and storage model shared by the wealth tracker backend and its clients.
//!
//! Field names follow the JSON the frontend sends (`camelCase`, `type` for the
//! transaction kind). Absent optional fields are written back as `null`.

use serde::{Deserialize, Serialize};

/// Kind of money movement a transaction records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Income,
    Expense,
    /// Money received that has to be paid back
    Borrow,
    /// Money given out that is expected back
    Lend,
}

/// Account the money moved through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountSource {
    Cash,
    Bank,
    /// Mobile financial service wallet
    Mfs,
}

/// Repayment state of a borrow/lend transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DebtStatus {
    Pending,
    PartiallyRepaid,
    Settled,
    BadDebt,
}

/// A person money is owed to or lent to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Beneficiary {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Epoch timestamp supplied by the caller
    #[serde(deserialize_with = "epoch::deserialize")]
    pub created_at: i64,
}

/// Partial repayment embedded in a borrow/lend transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repayment {
    pub id: String,
    pub amount: f64,
    #[serde(deserialize_with = "epoch::deserialize")]
    pub date: i64,
    pub source: AccountSource,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// No sign or range constraint; direction comes from `transaction_type`
    pub amount: f64,
    pub category: String,
    pub source: AccountSource,
    #[serde(deserialize_with = "epoch::deserialize")]
    pub date: i64,
    pub notes: Option<String>,
    /// Logical reference to `Beneficiary::id`, not checked
    pub beneficiary_id: Option<String>,
    #[serde(default, deserialize_with = "epoch::deserialize_opt")]
    pub repay_date: Option<i64>,
    pub status: Option<DebtStatus>,
    pub repayments: Option<Vec<Repayment>>,
}

/// Body returned by every successful mutation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn success() -> Self {
        Self {
            status: "success".to_string(),
        }
    }
}

/// Body returned by every failed API call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Epoch timestamp deserializers.
///
/// Timestamps arrive as JSON integers, but browsers and older stored documents
/// sometimes carry them as floats (`1700000000.0`). Floats are accepted only
/// when they have no fractional part.
pub mod epoch {
    use serde::de::{self, Deserializer, Unexpected, Visitor};
    use std::fmt;

    struct EpochVisitor;

    impl<'de> Visitor<'de> for EpochVisitor {
        type Value = i64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer epoch timestamp")
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<i64, E> {
            Ok(value)
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<i64, E> {
            i64::try_from(value).map_err(|_| E::invalid_value(Unexpected::Unsigned(value), &self))
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<i64, E> {
            let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
            if value.is_finite() && value.fract() == 0.0 && in_range {
                Ok(value as i64)
            } else {
                Err(E::invalid_value(Unexpected::Float(value), &self))
            }
        }
    }

    struct OptionalEpochVisitor;

    impl<'de> Visitor<'de> for OptionalEpochVisitor {
        type Value = Option<i64>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer epoch timestamp or null")
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
            deserialize(deserializer).map(Some)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        deserializer.deserialize_any(EpochVisitor)
    }

    pub fn deserialize_opt<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<i64>, D::Error> {
        deserializer.deserialize_option(OptionalEpochVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_beneficiary_missing_optionals_serialize_as_null() {
        let beneficiary: Beneficiary = serde_json::from_value(json!({
            "id": "b1",
            "name": "Alice",
            "createdAt": 1700000000
        }))
        .unwrap();

        assert_eq!(beneficiary.email, None);
        assert_eq!(
            serde_json::to_value(&beneficiary).unwrap(),
            json!({
                "id": "b1",
                "name": "Alice",
                "email": null,
                "phone": null,
                "createdAt": 1700000000
            })
        );
    }

    #[test]
    fn test_beneficiary_requires_name() {
        let result = serde_json::from_value::<Beneficiary>(json!({
            "id": "b1",
            "createdAt": 1700000000
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_transaction_with_repayments() {
        let transaction: Transaction = serde_json::from_value(json!({
            "id": "t1",
            "type": "LEND",
            "amount": 500,
            "category": "loan",
            "source": "CASH",
            "date": 1700000000,
            "beneficiaryId": "b1",
            "repayDate": 1710000000,
            "status": "PARTIALLY_REPAID",
            "repayments": [
                { "id": "r1", "amount": 200.5, "date": 1705000000, "source": "MFS" }
            ]
        }))
        .unwrap();

        assert_eq!(transaction.transaction_type, TransactionType::Lend);
        assert_eq!(transaction.amount, 500.0);
        assert_eq!(transaction.status, Some(DebtStatus::PartiallyRepaid));
        assert_eq!(transaction.repay_date, Some(1710000000));
        let repayments = transaction.repayments.unwrap();
        assert_eq!(repayments.len(), 1);
        assert_eq!(repayments[0].source, AccountSource::Mfs);
        assert_eq!(repayments[0].notes, None);
    }

    #[test]
    fn test_transaction_rejects_unknown_type() {
        let result = serde_json::from_value::<Transaction>(json!({
            "id": "t1",
            "type": "GIFT",
            "amount": 10,
            "category": "misc",
            "source": "CASH",
            "date": 1700000000
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_transaction_rejects_non_numeric_amount() {
        let result = serde_json::from_value::<Transaction>(json!({
            "id": "t1",
            "type": "INCOME",
            "amount": "ten",
            "category": "salary",
            "source": "BANK",
            "date": 1700000000
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(serde_json::to_value(DebtStatus::BadDebt).unwrap(), json!("BAD_DEBT"));
        assert_eq!(serde_json::to_value(AccountSource::Mfs).unwrap(), json!("MFS"));
        assert_eq!(serde_json::to_value(TransactionType::Borrow).unwrap(), json!("BORROW"));
    }

    #[test]
    fn test_unknown_fields_are_dropped() {
        let beneficiary: Beneficiary = serde_json::from_value(json!({
            "id": "b1",
            "name": "Alice",
            "createdAt": 1700000000,
            "nickname": "Al"
        }))
        .unwrap();

        let value = serde_json::to_value(&beneficiary).unwrap();
        assert!(value.get("nickname").is_none());
    }

    #[test]
    fn test_epoch_accepts_integral_float() {
        let beneficiary: Beneficiary = serde_json::from_value(json!({
            "id": "b1",
            "name": "Alice",
            "createdAt": 1700000000.0
        }))
        .unwrap();
        assert_eq!(beneficiary.created_at, 1700000000);
    }

    #[test]
    fn test_epoch_rejects_fractional_float() {
        let result = serde_json::from_value::<Beneficiary>(json!({
            "id": "b1",
            "name": "Alice",
            "createdAt": 1700000000.5
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_optional_epoch_accepts_null() {
        let transaction: Transaction = serde_json::from_value(json!({
            "id": "t1",
            "type": "BORROW",
            "amount": 20,
            "category": "loan",
            "source": "BANK",
            "date": 1700000000,
            "repayDate": null
        }))
        .unwrap();
        assert_eq!(transaction.repay_date, None);
    }

    #[test]
    fn test_status_response_shape() {
        assert_eq!(
            serde_json::to_value(StatusResponse::success()).unwrap(),
            json!({ "status": "success" })
        );
    }
}
