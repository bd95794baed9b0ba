use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit JSON `null` the same as an absent field.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Identifier wrapper for registered deals.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DealId(pub String);

/// Opaque stakeholder identity assigned at creation time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StakeholderId(pub String);

/// Point-in-time view of everything the seller has captured about a deal.
///
/// Every field deserializes to its zero value when absent or null, so a
/// partially filled snapshot scores instead of failing. Selection lists may
/// contain duplicates; the scorer tolerates them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DealSnapshot {
    #[serde(default, deserialize_with = "null_default")]
    pub industries: Vec<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub process_domains: Vec<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub value_drivers: Vec<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub capabilities: Vec<String>,
    /// Free-form context notes written by the seller.
    #[serde(default, deserialize_with = "null_default")]
    pub free_text: String,
    /// A named transformation program is on the table.
    #[serde(default, deserialize_with = "null_default")]
    pub rise_opportunity: bool,
    #[serde(default, deserialize_with = "null_default")]
    pub erp_landscape: ErpLandscape,
    #[serde(default, deserialize_with = "null_default")]
    pub stakeholders: Vec<Stakeholder>,
    /// Concatenation of AI-generated coaching and brief text, scanned for
    /// keyword signals only.
    #[serde(default, deserialize_with = "null_default")]
    pub generated_text: String,
}

/// Which ERP systems are present at the account. Not mutually exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErpLandscape {
    #[serde(default, deserialize_with = "null_default")]
    pub modern: bool,
    #[serde(default, deserialize_with = "null_default")]
    pub legacy: bool,
    #[serde(default, deserialize_with = "null_default")]
    pub third_party: bool,
}

impl ErpLandscape {
    pub fn any(self) -> bool {
        self.modern || self.legacy || self.third_party
    }
}

/// A person mapped into the deal. Records are replaced wholesale on edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stakeholder {
    #[serde(default, deserialize_with = "null_default")]
    pub id: StakeholderId,
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub title: String,
    pub role: StakeholderRole,
    #[serde(default, deserialize_with = "null_default")]
    pub access: AccessLevel,
    #[serde(default, deserialize_with = "null_default")]
    pub budget_confirmed: bool,
}

/// Stakeholder role classifications used by the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StakeholderRole {
    EconomicBuyer,
    Champion,
    DecisionMaker,
    Influencer,
    Blocker,
}

/// How much access the selling team has to a stakeholder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessLevel {
    Direct,
    Indirect,
    None,
    #[default]
    Unknown,
}

/// The six MEDDIC qualification axes, in fixed declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Metrics,
    EconomicBuyer,
    DecisionCriteria,
    DecisionProcess,
    IdentifyPain,
    Champion,
}

impl Dimension {
    pub const ALL: [Dimension; 6] = [
        Dimension::Metrics,
        Dimension::EconomicBuyer,
        Dimension::DecisionCriteria,
        Dimension::DecisionProcess,
        Dimension::IdentifyPain,
        Dimension::Champion,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Dimension::Metrics => "Metrics",
            Dimension::EconomicBuyer => "Economic Buyer",
            Dimension::DecisionCriteria => "Decision Criteria",
            Dimension::DecisionProcess => "Decision Process",
            Dimension::IdentifyPain => "Identify Pain",
            Dimension::Champion => "Champion",
        }
    }
}

/// High level status tracked for a registered deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DealStatus {
    Captured,
    Exploring,
    Building,
    Confirmed,
}

impl DealStatus {
    pub const fn label(self) -> &'static str {
        match self {
            DealStatus::Captured => "captured",
            DealStatus::Exploring => "exploring",
            DealStatus::Building => "building",
            DealStatus::Confirmed => "confirmed",
        }
    }
}
