use super::{encode_path_segment, with_query};
use crate::domain::{ListOrders, OrderId};

const ORDERS_PATH: &str = "dids/orders";

pub fn encode_create_order_path() -> String {
    ORDERS_PATH.to_owned()
}

pub fn encode_get_order_path(order_id: &OrderId) -> String {
    format!("{ORDERS_PATH}/{}", encode_path_segment(order_id.as_str()))
}

pub fn encode_list_orders_path(request: &ListOrders) -> String {
    let mut params = vec![
        ("page", request.page.to_string()),
        ("page_size", request.page_size.to_string()),
    ];
    if let Some(status) = request.filter_by_status {
        params.push(("filter_by_status", status.as_str().to_owned()));
    }
    with_query(ORDERS_PATH, &params)
}
