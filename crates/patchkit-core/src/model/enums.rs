use serde::{Deserialize, Serialize};

use crate::coerce_by_name;

/// Type of the values a data element collects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValueType {
    Text,
    LongText,
    Letter,
    Boolean,
    TrueOnly,
    Date,
    Datetime,
    Number,
    Integer,
    IntegerPositive,
    IntegerNegative,
    IntegerZeroOrPositive,
    Percentage,
    UnitInterval,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataElementDomain {
    Aggregate,
    Tracker,
}

/// How values are combined across periods and organisation units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AggregationType {
    Sum,
    Average,
    AverageSumOrgUnit,
    Count,
    Stddev,
    Variance,
    Min,
    Max,
    None,
}

coerce_by_name!(ValueType, DataElementDomain, AggregationType);
