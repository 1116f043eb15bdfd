//! Response bodies as returned by IDT Express.
//!
//! Fields missing from a response decode to their default (`""`, `0`, `false`,
//! empty list) or `None`.

use serde::{Deserialize, Serialize};

use crate::domain::value::{ErrorCode, OrderItemStatus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Pagination metadata. `page`/`page_size` are absent on non-paginated lists.
pub struct Meta {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub page_size: Option<u32>,
    pub total: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountryCoverageResponse {
    pub countries: Vec<CountryCoverage>,
    pub meta: Option<Meta>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountryCoverage {
    pub name: String,
    pub iso: String,
    pub has_regions: bool,
    pub supports_toll_free: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionsResponse {
    pub regions: Vec<Region>,
    pub meta: Option<Meta>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Region {
    pub name: String,
    pub code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DidGroupsResponse {
    pub did_groups: Vec<DidGroup>,
    pub meta: Option<Meta>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// A vendor pool of numbers sharing area code, NXX, country, region and pricing.
///
/// `id` is what [`crate::OrderItem`] and
/// [`crate::IdtExpressClient::browse_available_numbers`] expect.
pub struct DidGroup {
    pub id: u64,
    pub name: String,
    pub country_calling_code: String,
    pub area_code: String,
    pub nxx: String,
    pub toll_free: bool,
    pub supports_browse: bool,
    pub country: Option<DidGroupCountry>,
    pub region: Option<DidGroupRegion>,
    pub fees: Option<DidGroupFees>,
    pub quantity: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DidGroupCountry {
    pub name: String,
    pub iso: String,
    pub has_regions: bool,
    pub supports_toll_free: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DidGroupRegion {
    pub name: String,
    pub code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Decimal amounts are kept as the strings sent by the API.
pub struct DidGroupFees {
    pub setup_fee: String,
    pub monthly_fee: String,
    pub per_minute_rate: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowseAvailableNumbersResponse {
    pub numbers: Vec<OrderedNumber>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderedNumber {
    pub number: String,
    pub sku: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderResponse {
    pub order: Order,
    pub meta: Option<Meta>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrdersResponse {
    pub orders: Vec<Order>,
    pub meta: Option<Meta>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Order {
    pub id: String,
    pub created_at: String,
    pub status: Option<OrderItemStatus>,
    pub ordered: OrderQuantity,
    pub fulfilled: OrderQuantity,
    pub order_items: Vec<OrderItemResponse>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderQuantity {
    pub quantity: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderItemResponse {
    pub id: u64,
    pub status: Option<OrderItemStatus>,
    pub order_item_type: String,
    pub ordered: OrderItemDetail,
    pub fulfilled: OrderQuantity,
    pub cancelable: bool,
    pub did_group: Option<DidGroup>,
    pub numbers: Vec<OrderedNumber>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderItemDetail {
    pub quantity: u32,
    pub numbers: Vec<OrderedNumber>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberResponse {
    pub numbers: Vec<Number>,
    pub meta: Option<Meta>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// A number held by the account. Timestamps are kept as sent by the API.
pub struct Number {
    pub number: String,
    pub status: String,
    pub added_at: String,
    pub removed_at: Option<String>,
    pub did_group: Option<DidGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteNumberResponse {
    pub number: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Error body returned with non-2xx responses.
pub struct ErrorEnvelope {
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub api_request_id: String,
    pub errors: Vec<ErrorDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: ErrorCode,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub detail: String,
    #[serde(default)]
    pub field: Option<String>,
    /// Pointer into the request body that caused the error.
    #[serde(default)]
    pub source: Option<String>,
}

impl ErrorEnvelope {
    /// Detail of the first error entry, if any.
    pub fn first_detail(&self) -> Option<&str> {
        self.errors.first().map(|error| error.detail.as_str())
    }
}
