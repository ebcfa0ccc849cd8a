/// Default base URL of the ServiceTrade REST API
pub const DEFAULT_BASE_URL: &str = "https://api.servicetrade.com/api";
/// Path of the login endpoint, relative to the base URL
pub const AUTH_PATH: &str = "auth";
/// Name of the cookie carrying the session token
pub const SESSION_COOKIE: &str = "PHPSESSID";
/// Default timeout in seconds for REST requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// First page of every paginated collection
pub const DEFAULT_PAGE: u32 = 1;
/// Default number of items requested per page
pub const DEFAULT_PER_PAGE: u32 = 100;
/// User agent string used in HTTP requests to identify this client to the ServiceTrade API
pub const USER_AGENT: &str = concat!("servicetrade-client/", env!("CARGO_PKG_VERSION"));
/// Segment of the external identifier sub-API
pub const EXTERNAL_ID_SEGMENT: &str = "externalid";
