//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{
    CreateOrder, DEFAULT_PAGE, DEFAULT_PAGE_SIZE, DidGroupsQuery, ListNumbers, ListOrders,
    OrderItem,
};
pub use response::{
    BrowseAvailableNumbersResponse, CountryCoverage, CountryCoverageResponse, DeleteNumberResponse,
    DidGroup, DidGroupCountry, DidGroupFees, DidGroupRegion, DidGroupsResponse, ErrorDetail,
    ErrorEnvelope, Meta, Number, NumberResponse, Order, OrderItemDetail, OrderItemResponse,
    OrderQuantity, OrderResponse, OrderedNumber, OrdersResponse, Region, RegionsResponse,
};
pub use validation::ValidationError;
pub use value::{
    ApiKey, ApiSecret, CountryIso, DidNumber, ErrorCode, KnownErrorCode, OrderId, OrderItemStatus,
};
