use serde::{Deserialize, Serialize};

use crate::domain::validation::ValidationError;
use crate::domain::value::{CountryIso, OrderItemStatus};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Filters for `dids/coverage/did_groups`.
///
/// `region_code` and `toll_free` are only sent when set; `toll_free(false)` is sent
/// as an explicit `toll_free=false`.
pub struct DidGroupsQuery {
    country_iso: CountryIso,
    region_code: Option<String>,
    toll_free: Option<bool>,
}

impl DidGroupsQuery {
    pub fn new(country_iso: CountryIso) -> Self {
        Self {
            country_iso,
            region_code: None,
            toll_free: None,
        }
    }

    /// Restrict to a region. Empty or whitespace-only codes are treated as absent.
    pub fn region_code(mut self, region_code: impl Into<String>) -> Self {
        let region_code = region_code.into();
        let trimmed = region_code.trim();
        self.region_code = (!trimmed.is_empty()).then(|| trimmed.to_owned());
        self
    }

    pub fn toll_free(mut self, toll_free: bool) -> Self {
        self.toll_free = Some(toll_free);
        self
    }

    pub fn country_iso(&self) -> &CountryIso {
        &self.country_iso
    }

    pub fn region(&self) -> Option<&str> {
        self.region_code.as_deref()
    }

    pub fn is_toll_free(&self) -> Option<bool> {
        self.toll_free
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Pagination and filtering for `dids/orders`.
pub struct ListOrders {
    pub page: u32,
    pub page_size: u32,
    pub filter_by_status: Option<OrderItemStatus>,
}

impl Default for ListOrders {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            filter_by_status: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Pagination for `dids/numbers`.
pub struct ListNumbers {
    pub page: u32,
    pub page_size: u32,
}

impl Default for ListNumbers {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Body of `POST dids/orders`.
///
/// Invariant (when built through [`CreateOrder::new`]): at least one order item.
pub struct CreateOrder {
    preview: bool,
    order_items: Vec<OrderItem>,
}

impl CreateOrder {
    pub fn new(order_items: Vec<OrderItem>) -> Result<Self, ValidationError> {
        if order_items.is_empty() {
            return Err(ValidationError::NoOrderItems);
        }
        Ok(Self {
            preview: false,
            order_items,
        })
    }

    /// Ask the API to price the order without placing it.
    pub fn preview(mut self, preview: bool) -> Self {
        self.preview = preview;
        self
    }

    pub fn is_preview(&self) -> bool {
        self.preview
    }

    pub fn order_items(&self) -> &[OrderItem] {
        &self.order_items
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One line of an order: a DID group plus either a quantity or explicit SKUs.
pub struct OrderItem {
    did_group_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    quantity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    did_skus: Option<Vec<String>>,
}

impl OrderItem {
    pub const SKUS_FIELD: &'static str = "did_skus";

    /// Order `quantity` numbers from a DID group. A quantity of 0 is sent as-is.
    pub fn by_quantity(did_group_id: u64, quantity: u32) -> Self {
        Self {
            did_group_id,
            quantity: Some(quantity),
            did_skus: None,
        }
    }

    /// Order specific numbers (as returned by browse) from a DID group.
    pub fn by_skus(did_group_id: u64, did_skus: Vec<String>) -> Result<Self, ValidationError> {
        let did_skus = did_skus
            .into_iter()
            .map(|sku| sku.trim().to_owned())
            .filter(|sku| !sku.is_empty())
            .collect::<Vec<_>>();
        if did_skus.is_empty() {
            return Err(ValidationError::Empty {
                field: Self::SKUS_FIELD,
            });
        }
        Ok(Self {
            did_group_id,
            quantity: None,
            did_skus: Some(did_skus),
        })
    }

    pub fn did_group_id(&self) -> u64 {
        self.did_group_id
    }

    pub fn quantity(&self) -> Option<u32> {
        self.quantity
    }

    pub fn did_skus(&self) -> Option<&[String]> {
        self.did_skus.as_deref()
    }
}
