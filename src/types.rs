//! # Common Types
//!
//! This module contains the data model shared by the aggregators, the chart
//! renderers and the host layer: XP transactions as decoded from the GraphQL
//! API, monthly buckets, project totals and category partitions.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Name substituted for a transaction whose object has no name.
pub const UNKNOWN_NAME: &str = "Unknown";

/// One XP-award ledger entry.
///
/// Deserializes from the transaction rows returned by the GraphQL endpoint:
///
/// ```json
/// { "amount": 1200, "createdAt": "2024-03-01T10:00:00+00:00",
///   "path": "/bahrain/bh-module/go-reloaded", "type": "xp",
///   "object": { "name": "go-reloaded", "type": "project" } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawTransaction")]
pub struct Transaction {
    /// XP points awarded
    pub amount: i64,
    /// When the XP was awarded
    pub created_at: DateTime<Utc>,
    /// Slash-delimited project path
    pub path: String,
    /// Name of the object the XP was awarded for, if the API returned one
    pub object_name: Option<String>,
}

impl Transaction {
    pub fn new(
        amount: i64,
        created_at: DateTime<Utc>,
        path: impl Into<String>,
        object_name: Option<String>,
    ) -> Self {
        Self {
            amount,
            created_at,
            path: path.into(),
            object_name,
        }
    }

    /// The object name, or [`UNKNOWN_NAME`] when absent.
    pub fn name(&self) -> &str {
        self.object_name.as_deref().unwrap_or(UNKNOWN_NAME)
    }

    /// The calendar month this transaction falls in (UTC).
    pub fn month(&self) -> MonthKey {
        MonthKey::from_datetime(&self.created_at)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTransaction {
    #[serde(default)]
    amount: Option<i64>,
    created_at: DateTime<Utc>,
    #[serde(default)]
    path: Option<String>,
    #[serde(default)]
    object: Option<RawObject>,
}

#[derive(Deserialize)]
struct RawObject {
    #[serde(default)]
    name: Option<String>,
}

impl From<RawTransaction> for Transaction {
    fn from(raw: RawTransaction) -> Self {
        Self {
            amount: raw.amount.unwrap_or(0),
            created_at: raw.created_at,
            path: raw.path.unwrap_or_default(),
            object_name: raw.object.and_then(|o| o.name),
        }
    }
}

/// A calendar month. Orders by year, then month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct MonthKey {
    pub year: i32,
    /// 1-based month (1 = January)
    pub month: u32,
}

impl MonthKey {
    /// Returns `None` when `month` is outside `1..=12`.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn from_datetime(dt: &DateTime<Utc>) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
        }
    }

    /// The following month, rolling December over into January of the next year.
    pub fn succ(self) -> Self {
        if self.month >= 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Signed number of months from `self` to `other`.
    pub fn months_until(self, other: MonthKey) -> i64 {
        (other.year as i64 - self.year as i64) * 12 + other.month as i64 - self.month as i64
    }

    fn first_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// Human readable label, e.g. "January 2024".
    pub fn display_label(self) -> String {
        self.first_day()
            .map(|d| d.format("%B %Y").to_string())
            .unwrap_or_else(|| self.to_string())
    }

    /// Axis label, e.g. "Jan 24".
    pub fn short_label(self) -> String {
        self.first_day()
            .map(|d| d.format("%b %y").to_string())
            .unwrap_or_else(|| self.to_string())
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

/// Total XP earned in one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthBucket {
    pub key: MonthKey,
    /// "Month Year" label, e.g. "March 2024"
    pub label: String,
    pub total_xp: i64,
}

impl MonthBucket {
    pub fn new(key: MonthKey, total_xp: i64) -> Self {
        Self {
            key,
            label: key.display_label(),
            total_xp,
        }
    }
}

/// Summed XP for one project name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectTotal {
    pub name: String,
    pub xp: i64,
}

impl ProjectTotal {
    pub fn new(name: impl Into<String>, xp: i64) -> Self {
        Self {
            name: name.into(),
            xp,
        }
    }
}

/// The three overlapping transaction categories, matched on the transaction path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Category {
    /// The primary bootcamp track (`bh-piscine`)
    #[serde(rename = "bh-piscine")]
    Piscine,
    /// The JS track (`piscine-js`), including when nested under the module
    #[serde(rename = "piscine-js")]
    PiscineJs,
    /// The advanced module (`bh-module`), excluding JS track items and checkpoints
    #[serde(rename = "bh-module")]
    Module,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Piscine, Category::PiscineJs, Category::Module];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Piscine => "bh-piscine",
            Category::PiscineJs => "piscine-js",
            Category::Module => "bh-module",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transactions grouped by [`Category`].
///
/// Membership is rule based, so one transaction may be present in several
/// categories or in none.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryPartition {
    groups: BTreeMap<Category, Vec<Transaction>>,
}

impl CategoryPartition {
    /// A partition with every category present and empty.
    pub fn new() -> Self {
        Self {
            groups: Category::ALL.iter().map(|c| (*c, Vec::new())).collect(),
        }
    }

    pub fn push(&mut self, category: Category, tx: Transaction) {
        self.groups.entry(category).or_default().push(tx);
    }

    pub fn get(&self, category: Category) -> &[Transaction] {
        self.groups.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Categories in their fixed order with their members.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[Transaction])> {
        self.groups.iter().map(|(c, txs)| (*c, txs.as_slice()))
    }
}

impl Default for CategoryPartition {
    fn default() -> Self {
        Self::new()
    }
}

/// Audit totals for a user: XP given through audits versus XP received.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "RawAuditRatio")]
pub struct AuditRatio {
    pub ratio: f64,
    pub total_up: f64,
    pub total_down: f64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAuditRatio {
    #[serde(default)]
    audit_ratio: Option<f64>,
    #[serde(default)]
    total_up: Option<f64>,
    #[serde(default)]
    total_down: Option<f64>,
}

impl From<RawAuditRatio> for AuditRatio {
    fn from(raw: RawAuditRatio) -> Self {
        Self {
            ratio: raw.audit_ratio.unwrap_or(0.0),
            total_up: raw.total_up.unwrap_or(0.0),
            total_down: raw.total_down.unwrap_or(0.0),
        }
    }
}

/// Profile fields shown in the dashboard header.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawUser")]
pub struct UserProfile {
    pub id: i64,
    pub login: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub cpr_number: String,
    pub phone: String,
}

impl UserProfile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[derive(Deserialize)]
struct RawUser {
    id: i64,
    #[serde(default)]
    login: Option<String>,
    #[serde(default)]
    attrs: Option<RawUserAttrs>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct RawUserAttrs {
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    last_name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default, rename = "CPRnumber")]
    cpr_number: Option<String>,
    #[serde(default, rename = "PhoneNumber")]
    phone: Option<String>,
}

impl From<RawUser> for UserProfile {
    fn from(raw: RawUser) -> Self {
        let attrs = raw.attrs.unwrap_or_default();
        Self {
            id: raw.id,
            login: raw.login.unwrap_or_default(),
            first_name: attrs.first_name.unwrap_or_default(),
            last_name: attrs.last_name.unwrap_or_default(),
            email: attrs.email.unwrap_or_default(),
            cpr_number: attrs.cpr_number.unwrap_or_default(),
            phone: attrs.phone.unwrap_or_default(),
        }
    }
}
