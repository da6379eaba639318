// src/config/options.rs
use super::consts::*;

/// Where and how to talk to the portal.
///
/// Defaults point at the live portal. The URLs are only ever overridden to
/// aim at a local server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub landing_url: String,
    pub ajax_url: String,
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            landing_url: s!(LANDING_URL),
            ajax_url: s!(AJAX_URL),
            user_agent: s!(USER_AGENT),
        }
    }
}

impl FetchOptions {
    /// Same portal layout, different origin: `<base>/ords/f?p=104:1` and
    /// `<base>/ords/wwv_flow.ajax`.
    pub fn with_base_url(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            landing_url: join!(base, "/ords/f?p=", FLOW_ID, ":", FLOW_STEP_ID),
            ajax_url: join!(base, "/ords/wwv_flow.ajax"),
            ..Self::default()
        }
    }
}
