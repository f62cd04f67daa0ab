//! Application constants
//!
//! Centralized location for dashboard defaults and the cosmetic metadata
//! (labels, icons, colors) attached to dashboard responses.

// Request defaults
pub const DEFAULT_FEED_LIMIT: usize = 20;
pub const DEFAULT_CHART_MONTHS: u32 = 6;
pub const FEED_SOURCE_COUNT: usize = 4;

// Window spans in days
pub const WEEK_SPAN_DAYS: i64 = 7;
pub const MONTH_SPAN_DAYS: i64 = 30;
pub const YEAR_SPAN_DAYS: i64 = 365;
pub const WEEKLY_ACTIVITY_DAYS: i64 = 7;

// Zone filter value meaning "no filter"
pub const ALL_ZONES: &str = "all";

// Quick metric placeholders
pub const AVG_RESPONSE_TIME_PLACEHOLDER: &str = "12 min";
pub const NOT_AVAILABLE: &str = "N/A";

// Status breakdown label used when a report has no status
pub const MISSING_STATUS_LABEL: &str = "PENDING";

pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

// Palette
pub const COLOR_CORAL: &str = "#FFA69E";
pub const COLOR_MINT: &str = "#9FD8CB";
pub const COLOR_LAVENDER: &str = "#B4A7D6";
pub const COLOR_PEACH: &str = "#FFDAC1";

// Stat cards
pub const TOTAL_REPORTS_LABEL: &str = "Dogs Reported";
pub const TOTAL_REPORTS_SUBTITLE: &str = "This month";
pub const TOTAL_REPORTS_ICON: &str = "Dog";

pub const UNDER_CARE_LABEL: &str = "Under Care";
pub const UNDER_CARE_SUBTITLE: &str = "Active cases";
pub const UNDER_CARE_ICON: &str = "Heart";
pub const UNDER_CARE_CHANGE: &str = "+8%";

pub const ADOPTIONS_LABEL: &str = "Successfully Adopted";
pub const ADOPTIONS_SUBTITLE: &str = "Total adoptions";
pub const ADOPTIONS_ICON: &str = "Home";
pub const ADOPTIONS_CHANGE: &str = "+15%";

pub const VOLUNTEERS_LABEL: &str = "Active Volunteers";
pub const VOLUNTEERS_SUBTITLE: &str = "Community members";
pub const VOLUNTEERS_ICON: &str = "Users";
pub const VOLUNTEERS_CHANGE: &str = "+5%";

// Quick metrics
pub const AVG_RESPONSE_TIME_LABEL: &str = "Avg Response Time";
pub const AVG_RESPONSE_TIME_ICON: &str = "Activity";
pub const SUCCESS_RATE_LABEL: &str = "Success Rate";
pub const SUCCESS_RATE_ICON: &str = "Award";
pub const ACTIVE_ZONES_LABEL: &str = "Active Zones";
pub const ACTIVE_ZONES_ICON: &str = "MapPin";

// Activity feed
pub const RESCUE_ICON: &str = "MapPin";
pub const ADOPTION_ICON: &str = "Heart";
pub const VOLUNTEER_ICON: &str = "Users";
pub const ADOPTION_DESCRIPTION: &str = "Adoption application approved";
pub const ADOPTION_LOCATION: &str = "Adoption Center";
