// src/config/consts.rs

// Net config
pub const LANDING_URL: &str = "https://shop.kaspi.kz/ords/f?p=104:1";
pub const AJAX_URL: &str = "https://shop.kaspi.kz/ords/wwv_flow.ajax";
pub const USER_AGENT: &str = concat!("kaspi_track/", env!("CARGO_PKG_VERSION"));

// Landing page
pub const INSTANCE_INPUT_ID: &str = "pInstance";
pub const SALT_INPUT_ID: &str = "pSalt";
pub const PAGE_ITEMS_PROTECTED_INPUT_ID: &str = "pPageItemsProtected";
pub const SCRIPT_MIME: &str = "text/javascript";
pub const PLUGIN_SCRIPT_INDEX: usize = 1; // zero-based, among SCRIPT_MIME scripts

// APEX application
pub const FLOW_ID: &str = "104";
pub const FLOW_STEP_ID: &str = "1";
pub const WIDGET_NAME: &str = "worksheet";
pub const WIDGET_MODE: &str = "PULL";
pub const WIDGET_NUM_RETURN: &str = "500";
pub const TRACE_PAGE_ITEM: &str = "P1_EXT_GUID";

// Worksheets (interactive reports on page 1)
pub const PROGRESS_WORKSHEET_ID: &str = "2138914960542907";
pub const ROUTES_WORKSHEET_ID: &str = "2139302434542911";
pub const ITEMS_WORKSHEET_ID: &str = "2139718512542915";
