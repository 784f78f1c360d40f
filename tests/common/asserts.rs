#![allow(dead_code)]

use bedrock_edge_proxy::{EdgeOutcome, InboundRequest, RejectionResponse};

pub fn assert_forwarded(outcome: EdgeOutcome) -> InboundRequest {
    match outcome {
        EdgeOutcome::Forward(request) => request,
        other => panic!("expected forwarded request, got {:?}", other),
    }
}

pub fn assert_rejected(outcome: EdgeOutcome) -> RejectionResponse {
    match outcome {
        EdgeOutcome::Reject(response) => response,
        other => panic!("expected rejection, got {:?}", other),
    }
}

pub fn origin_domain(request: &InboundRequest) -> Option<&str> {
    request
        .origin
        .as_ref()
        .and_then(|origin| origin.domain_name())
}
