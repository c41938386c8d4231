//! Household insight types returned inside person enrichment.

use serde::Deserialize;

/// Household insights for an enriched person.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Household {
    /// Home ownership and dwelling data.
    pub home_info: Option<HomeInfo>,
    /// Household composition flags.
    pub presence: Option<Presence>,
    /// Financial estimates.
    pub finance: Option<Finance>,
    /// Geographic classification.
    pub location_info: Option<LocationInfo>,
    /// Family size data.
    pub family_info: Option<FamilyInfo>,
}

/// Home ownership and dwelling data.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HomeInfo {
    /// Estimated home value.
    pub home_value_estimate: Option<i64>,
    /// Estimated loan-to-value ratio.
    pub loan_to_value_estimate: Option<i64>,
    /// Years at the current address.
    pub years_in_home: Option<i64>,
    /// Dwelling type.
    pub dwelling_type: Option<String>,
}

/// Household composition flags.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Presence {
    /// Children in the household.
    pub presence_of_children: Option<String>,
    /// Multiple generations in the household.
    pub multigenerational_resident: Option<String>,
}

/// Financial estimates.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Finance {
    /// Household income band.
    pub household_income_estimate: Option<String>,
    /// Discretionary spending band.
    pub discretionary_spending_income: Option<String>,
    /// First mortgage amount, in thousands.
    pub first_mortgage_amount_in_thousands: Option<String>,
    /// Home market value from tax records.
    pub home_market_value_tax_record: Option<String>,
    /// Short-term liability band.
    pub short_term_liability: Option<String>,
    /// Net worth band.
    pub net_worth_range: Option<String>,
    /// Wealth resources band.
    pub wealth_resources: Option<String>,
    /// Pays by credit card.
    pub payment_method_credit_card: Option<String>,
}

/// Geographic classification.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocationInfo {
    /// Postal carrier route.
    pub carrier_route: Option<String>,
    /// Designated market area.
    pub designated_market_area: Option<String>,
    /// Core based statistical area.
    pub core_based_statistical_area: Option<String>,
    /// Nielsen county size.
    pub nielsen_county_size: Option<String>,
    /// Congressional district.
    pub congressional_district: Option<String>,
    /// Numeric county code.
    pub numeric_county_code: Option<i64>,
    /// Seasonal address flag.
    pub seasonal_address: Option<bool>,
}

/// Family size data.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FamilyInfo {
    /// Adults in the household.
    pub total_adults: Option<i64>,
    /// Number of children.
    pub number_of_children: Option<String>,
    /// Total people in the household.
    pub total_people_in_household: Option<i64>,
}
