use super::{encode_path_segment, with_query};
use crate::domain::{DidNumber, ListNumbers};

const NUMBERS_PATH: &str = "dids/numbers";

pub fn encode_list_numbers_path(request: &ListNumbers) -> String {
    with_query(
        NUMBERS_PATH,
        &[
            ("page", request.page.to_string()),
            ("page_size", request.page_size.to_string()),
        ],
    )
}

pub fn encode_delete_number_path(number: &DidNumber) -> String {
    format!("{NUMBERS_PATH}/{}", encode_path_segment(number.raw()))
}
