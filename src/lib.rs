mod admission;
pub mod constants;
mod credential;
mod event;
mod header_policy;
mod headers;
mod options;
mod origin;
mod region;
mod request;
mod result;
mod rewriter;
mod util;

pub use admission::{AdmissionSource, AllowedIps};
pub use credential::CredentialScope;
pub use event::{CloudFrontPayload, EdgeEvent, EdgeRecord};
pub use header_policy::{CleanupScope, HeaderCleanup};
pub use headers::{HeaderEntry, Headers};
pub use options::{RewriterOptions, ValidationError};
pub use origin::{BackendTemplate, CustomOrigin, OriginProtocol, RequestOrigin};
pub use region::{AllowedRegions, Region};
pub use request::InboundRequest;
pub use result::{
    EdgeOutcome, HandlerError, PassThroughReason, RejectionResponse, RewriteDecision, RewritePlan,
    StructuralError,
};
pub use rewriter::EdgeRewriter;
pub use util::{equals_ignore_case, normalize_lower};
