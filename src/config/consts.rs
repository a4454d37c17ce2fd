// src/config/consts.rs

// Net config
pub const ROOT: &str = "https://my.schedulemaster.com/";
pub const ROOT_ENV: &str = "SM_SCRAPE_ROOT";
pub const USER_AGENT: &str = "sm_scrape (rust, experimental)";
pub const TIMEOUT_SECS: u64 = 31;
pub const LOGIN_PAGENAME: &str = "my.schedulemaster.com";

/// Present in any page body once the server has dropped our session.
pub const SESSION_INVALID_MARKER: &str =
    "Schedule Master could not validate your user or session information.";

// Pages
pub const LOGIN_PAGE: &str = "login.asp";
pub const MY_SCHEDULE_PAGE: &str = "SchedList.aspx";
pub const SCHEDULE_PAGE: &str = "Schedule3.aspx";
pub const SCHED_DATA_PAGE: &str = "SchedData.aspx";
pub const USER_INFO_PAGE: &str = "UserInfo.aspx";
pub const SCHED_DATA_VERSION: &str = "sch_0.0.1";

// Scrape
pub const RESOURCES_INPUT_ID: &str = "ctl00_CPL1_h_jsonRes";
pub const PROFILE_NAME_CLASS: &str = "headerleft middle";
pub const SCHEDULE_CELL_CLASSES: &[&str] = &["Item", "AltItem"];
pub const SCHEDULE_CELL_DIVS: usize = 7;
pub const MY_SCHEDULE_OWNER: &str = "you";

// Local state
pub const DEFAULT_STATE_FILE: &str = ".schedulemaster-api.json";

// Status badges, e.g. "warn_yel.jpg" -> "yel"
pub const BADGE_PREFIXES: &[&str] = &["warn_"];
pub const BADGE_SUFFIXES: &[&str] = &[".jpg", ".png", ".gif"];
pub const DEFAULT_STATUSES: &str = "yel,grn,gry,None";
pub const UNKNOWN_STATUS: &str = "unk";
/// `--statuses` token for the null status.
pub const NULL_STATUS_TOKEN: &str = "None";

// Logging
pub const LOG_ENV: &str = "SM_SCRAPE_LOG";
