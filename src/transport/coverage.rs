use super::{encode_path_segment, with_query};
use crate::domain::{CountryIso, DidGroupsQuery};

const COUNTRIES_PATH: &str = "dids/coverage/countries";
const DID_GROUPS_PATH: &str = "dids/coverage/did_groups";

pub fn encode_country_coverage_path() -> String {
    COUNTRIES_PATH.to_owned()
}

pub fn encode_regions_path(country_iso: &CountryIso) -> String {
    format!(
        "{COUNTRIES_PATH}/{}/regions",
        encode_path_segment(country_iso.as_str())
    )
}

pub fn encode_did_groups_path(query: &DidGroupsQuery) -> String {
    let mut params = vec![(CountryIso::FIELD, query.country_iso().as_str().to_owned())];
    if let Some(region_code) = query.region() {
        params.push(("region_code", region_code.to_owned()));
    }
    if let Some(toll_free) = query.is_toll_free() {
        params.push(("toll_free", toll_free.to_string()));
    }
    with_query(DID_GROUPS_PATH, &params)
}

pub fn encode_browse_numbers_path(did_group_id: u64) -> String {
    format!("{DID_GROUPS_PATH}/{did_group_id}/browse_numbers")
}
