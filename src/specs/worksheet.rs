// src/specs/worksheet.rs
//! Form body of an APEX worksheet `PULL` request.
//!
//! The request asks the plugin behind one interactive report to render its
//! rows for the order number submitted as page item `P1_EXT_GUID`.
use reqwest::multipart::Form;
use serde::Serialize;

use crate::config::consts::{
    FLOW_ID, FLOW_STEP_ID, TRACE_PAGE_ITEM, WIDGET_MODE, WIDGET_NAME, WIDGET_NUM_RETURN,
};
use crate::dataset::DatasetKind;
use crate::error::FetchError;
use crate::scrape::SessionContext;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Payload<'a> {
    page_items: PageItems<'a>,
    salt: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PageItems<'a> {
    items_to_submit: [PageItem<'a>; 1],
    protected: &'a str,
    row_version: &'a str,
    form_region_checksums: &'a [String],
}

#[derive(Serialize)]
struct PageItem<'a> {
    n: &'a str,
    v: &'a str,
}

/// Ordered multipart fields for one worksheet request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorksheetForm {
    fields: Vec<(&'static str, String)>,
}

impl WorksheetForm {
    /// Fails with `NoPlugin` when the session has no plugin id for `dataset`;
    /// nothing should be sent in that case.
    pub fn build(
        session: &SessionContext,
        trace_id: &str,
        dataset: DatasetKind,
    ) -> Result<Self, FetchError> {
        let plugin_id = session
            .plugin_id(dataset)
            .ok_or(FetchError::NoPlugin { dataset })?;

        let p_json = serde_json::to_string(&Payload {
            page_items: PageItems {
                items_to_submit: [PageItem {
                    n: TRACE_PAGE_ITEM,
                    v: trace_id,
                }],
                protected: session.protected_page_items(),
                row_version: "",
                form_region_checksums: &[],
            },
            salt: session.salt(),
        })?;

        let fields = vec![
            ("p_flow_id", s!(FLOW_ID)),
            ("p_flow_step_id", s!(FLOW_STEP_ID)),
            ("p_instance", s!(session.instance_id())),
            ("p_debug", s!()),
            ("p_request", join!("PLUGIN=", plugin_id)),
            ("p_widget_name", s!(WIDGET_NAME)),
            ("p_widget_mod", s!(WIDGET_MODE)),
            ("p_widget_num_return", s!(WIDGET_NUM_RETURN)),
            ("x01", s!(dataset.worksheet_id())),
            ("p_json", p_json),
        ];
        Ok(Self { fields })
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn fields(&self) -> &[(&'static str, String)] {
        &self.fields
    }

    pub fn into_multipart(self) -> Form {
        self.fields
            .into_iter()
            .fold(Form::new(), |form, (name, value)| form.text(name, value))
    }
}
