use crate::admission::ParsedAllowList;
use crate::constants::header;
use crate::credential::CredentialScope;
use crate::event::EdgeEvent;
use crate::header_policy::CleanupScope;
use crate::options::{RewriterOptions, ValidationError};
use crate::region::Region;
use crate::request::InboundRequest;
use crate::result::{
    EdgeOutcome, HandlerError, PassThroughReason, RejectionResponse, RewriteDecision, RewritePlan,
    StructuralError,
};
use log::{debug, error, info};

/// Origin-request rewriter that routes SigV4-signed requests to the backend
/// of their signing region.
///
/// Holds only validated policy data; one instance can serve any number of
/// invocations from any number of threads.
pub struct EdgeRewriter {
    options: RewriterOptions,
    allow_list: ParsedAllowList,
}

impl EdgeRewriter {
    pub fn new(options: RewriterOptions) -> Result<Self, ValidationError> {
        options.validate()?;
        let allow_list = options
            .allowed_ips
            .parse()
            .map_err(|(literal, source)| ValidationError::InvalidIpLiteral { literal, source })?
            .requiring_address(options.require_client_address);

        Ok(Self {
            options,
            allow_list,
        })
    }

    pub fn options(&self) -> &RewriterOptions {
        &self.options
    }

    /// Classifies `request` without modifying it.
    pub fn evaluate(&self, request: &InboundRequest) -> RewriteDecision {
        let address = self.options.admission_source.client_address(request);
        if !self.allow_list.admits(address) {
            info!("Forbidden IP: {}", address.unwrap_or("<none>"));
            return RewriteDecision::Deny(RejectionResponse::ip_restricted());
        }
        if address.is_none() && self.allow_list.is_enabled() {
            debug!("No client address, IP restriction not applied");
        }

        let Some(authorization) = request.authorization() else {
            debug!("No authorization header, forwarding request unchanged");
            return RewriteDecision::PassThrough(PassThroughReason::MissingAuthorization);
        };

        let Some(scope) =
            CredentialScope::parse(authorization).filter(|scope| !scope.region.is_empty())
        else {
            info!("No region found in Authorization header");
            return RewriteDecision::PassThrough(PassThroughReason::NoRegionInCredential);
        };

        if !self.options.valid_regions.allows(scope.region) {
            info!("Invalid region: {}", scope.region);
            return RewriteDecision::PassThrough(PassThroughReason::RegionNotAllowed(
                scope.region.to_string(),
            ));
        }

        let region = Region::new(scope.region);
        let origin = self.options.backend.origin_for(&region);
        RewriteDecision::Rewrite(RewritePlan { region, origin })
    }

    /// Evaluates `request` and applies the outcome. Header cleanup, the
    /// user-agent override and the origin swap happen together or not at all.
    pub fn apply(&self, mut request: InboundRequest) -> EdgeOutcome {
        match self.evaluate(&request) {
            RewriteDecision::Deny(response) => EdgeOutcome::Reject(response),
            RewriteDecision::PassThrough(_) => {
                if self.options.cleanup_scope == CleanupScope::Always {
                    self.clean_headers(&mut request);
                }
                EdgeOutcome::Forward(request)
            }
            RewriteDecision::Rewrite(plan) => {
                self.clean_headers(&mut request);
                if let Some(agent) = &self.options.user_agent {
                    request.headers.set_single(
                        header::USER_AGENT,
                        header::USER_AGENT_KEY,
                        agent.as_str(),
                    );
                }

                debug!(
                    "Routing {} {} to {}",
                    request.method,
                    request.uri,
                    plan.origin.domain_name().unwrap_or_default()
                );
                request.origin = Some(plan.origin);
                EdgeOutcome::Forward(request)
            }
        }
    }

    fn clean_headers(&self, request: &mut InboundRequest) {
        for name in self.options.header_cleanup.apply(&mut request.headers) {
            info!("Removing {} header", name);
        }
    }

    pub fn handle(&self, event: EdgeEvent) -> Result<EdgeOutcome, StructuralError> {
        let request = event
            .into_request()
            .inspect_err(|err| error!("Error in handler: {}", err))?;
        Ok(self.apply(request))
    }

    /// JSON in, JSON out: the shape the edge runtime exchanges with a handler.
    pub fn handle_json(&self, raw: &str) -> Result<String, HandlerError> {
        let event = EdgeEvent::from_json(raw)
            .inspect_err(|err| error!("Error in handler: {}", err))?;
        let outcome = self.handle(event)?;
        serde_json::to_string(&outcome).map_err(HandlerError::Encode)
    }
}

#[cfg(test)]
#[path = "rewriter_test.rs"]
mod rewriter_test;
