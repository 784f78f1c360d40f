pub mod header {
    pub const AUTHORIZATION: &str = "authorization";
    pub const CONTENT_TYPE: &str = "content-type";
    pub const HOST: &str = "host";
    pub const USER_AGENT: &str = "user-agent";
    pub const X_AMZ_DATE: &str = "x-amz-date";
    pub const X_AMZ_SECURITY_TOKEN: &str = "x-amz-security-token";
    pub const X_FORWARDED_FOR: &str = "x-forwarded-for";

    /// Canonical casing emitted in the `key` field of a rewritten `user-agent`.
    pub const USER_AGENT_KEY: &str = "User-Agent";
}

pub mod region {
    pub const US_EAST_1: &str = "us-east-1";
    pub const US_WEST_2: &str = "us-west-2";
    pub const AP_NORTHEAST_1: &str = "ap-northeast-1";
    pub const EU_WEST_1: &str = "eu-west-1";
}

pub mod backend {
    pub const REGION_PLACEHOLDER: &str = "{region}";
    pub const HOST_TEMPLATE: &str = "bedrock-runtime.{region}.amazonaws.com";
    pub const HTTPS_PORT: u16 = 443;
    pub const TLS_V1_2: &str = "TLSv1.2";
    pub const READ_TIMEOUT_SECS: u32 = 60;
    pub const KEEPALIVE_TIMEOUT_SECS: u32 = 5;
    pub const MIN_TIMEOUT_SECS: u32 = 1;
    pub const MAX_TIMEOUT_SECS: u32 = 60;
}

pub mod denial {
    pub const STATUS: &str = "403";
    pub const STATUS_DESCRIPTION: &str = "Forbidden";
    pub const CONTENT_TYPE: &str = "text/plain";
    pub const BODY: &str = "Access denied due to IP restriction.";
}

pub const DEFAULT_USER_AGENT: &str = "cloudfront";
