//! Demographic filtering of the response set.

use tracing::debug;

use survey_model::{Facet, FilterState, Response, is_placeholder};

/// Responses that satisfy every constrained facet.
///
/// With no active facet the input comes back unchanged, same elements in the
/// same order. A response with no answer for a constrained facet is dropped.
pub fn apply_filters<'a>(responses: &'a [Response], filters: &FilterState) -> Vec<&'a Response> {
    if !filters.has_active_filters() {
        return responses.iter().collect();
    }
    let kept: Vec<&Response> = responses
        .iter()
        .filter(|response| matches_filters(response, filters))
        .collect();
    debug!(
        total = responses.len(),
        kept = kept.len(),
        facets = filters.active_facets().count(),
        "applied filters"
    );
    kept
}

pub fn matches_filters(response: &Response, filters: &FilterState) -> bool {
    filters.active_facets().all(|facet| {
        response
            .value(facet.field())
            .is_some_and(|value| filters.accepted(facet).contains(value))
    })
}

/// Labels a facet can be filtered on, taken from the unfiltered responses.
///
/// Facets with a reference order list the labels that occur in that order,
/// followed by any other label in first-seen order.
pub fn facet_options(responses: &[Response], facet: Facet) -> Vec<String> {
    let mut options: Vec<String> = Vec::new();
    for value in responses.iter().filter_map(|response| response.value(facet.field())) {
        if !is_placeholder(value) && !options.iter().any(|option| option == value) {
            options.push(value.to_string());
        }
    }
    if let Some(order) = facet.reference_order() {
        options.sort_by_key(|option| {
            order
                .iter()
                .position(|candidate| candidate == option)
                .unwrap_or(usize::MAX)
        });
    }
    options
}
