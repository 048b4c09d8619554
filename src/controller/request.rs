use std::collections::HashMap;
use std::hash::BuildHasher;

use crate::args::Args;
use crate::view::table::OrderPolicy;

/// Which lower area X01 and Gotcha render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Layout {
    #[default]
    Table,
    Cards,
}

/// Per-render display options, decoded from query parameters with the CLI
/// flags as defaults.
#[derive(Clone, Copy, Debug, Default)]
pub struct DisplayRequest {
    pub order: OrderPolicy,
    pub layout: Layout,
}

/// Decode query parameters into a display request.
///
/// `rn` forces the server-provided player order, `rs` forces the stable
/// display order; `rn` wins when both are present. `xt` forces the table
/// layout, `xc` the card layout; `xt` wins when both are present.
#[must_use]
pub fn parse_display_request<S: BuildHasher>(
    query: &HashMap<String, String, S>,
    args: &Args,
) -> DisplayRequest {
    let order = if query.contains_key("rn") {
        OrderPolicy::ServerOrder
    } else if query.contains_key("rs") {
        OrderPolicy::ForceStable
    } else if args.server_order {
        OrderPolicy::ServerOrder
    } else {
        OrderPolicy::Stable
    };

    let layout = if query.contains_key("xt") {
        Layout::Table
    } else if query.contains_key("xc") {
        Layout::Cards
    } else if args.card_view {
        Layout::Cards
    } else {
        Layout::Table
    };

    DisplayRequest { order, layout }
}
