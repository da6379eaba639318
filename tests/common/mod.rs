// tests/common/mod.rs
//
// In-process stand-in for the portal: landing page + worksheet endpoint.
//
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    Router,
    extract::{Multipart, State},
    http::{
        HeaderMap, StatusCode,
        header::{COOKIE, SET_COOKIE},
    },
    response::{AppendHeaders, Html, IntoResponse, Response},
    routing::{get, post},
};
use kaspi_track::DatasetKind;
use kaspi_track::config::options::FetchOptions;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Landing {
    Ok,
    Unavailable,
    NoCookies,
    NoScript,
    /// Plugin script without the widget for this dataset.
    WithoutWidget(DatasetKind),
}

#[derive(Clone, Debug)]
pub struct SeenRequest {
    pub cookie: Option<String>,
    pub fields: HashMap<String, String>,
}

#[derive(Clone)]
struct PortalState {
    landing: Landing,
    failing: Option<DatasetKind>,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

pub struct MockPortal {
    pub opts: FetchOptions,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

impl MockPortal {
    pub fn seen(&self) -> Vec<SeenRequest> {
        self.seen.lock().unwrap().clone()
    }
}

pub fn plugin_id(dataset: DatasetKind) -> &'static str {
    match dataset {
        DatasetKind::Progress => "p1",
        DatasetKind::Routes => "p2",
        DatasetKind::Items => "p3",
    }
}

pub async fn start(landing: Landing, failing: Option<DatasetKind>) -> MockPortal {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let state = PortalState {
        landing,
        failing,
        seen: Arc::clone(&seen),
    };
    let app = Router::new()
        .route("/ords/f", get(landing_page))
        .route("/ords/wwv_flow.ajax", post(worksheet))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockPortal {
        opts: FetchOptions::with_base_url(&format!("http://{addr}")),
        seen,
    }
}

fn landing_html(with_plugin_script: bool, skip: Option<DatasetKind>) -> String {
    let widgets: Vec<String> = DatasetKind::ALL
        .into_iter()
        .filter(|d| skip != Some(*d))
        .map(|d| {
            format!(
                r#"apex.widget.interactiveReport("R{id}",{{"toolbar":"f?p=104:1:0::NO::p_worksheet_id={id}","ajaxIdentifier":"{plugin}"}});"#,
                id = d.worksheet_id(),
                plugin = plugin_id(d)
            )
        })
        .collect();
    let plugin_script = if with_plugin_script {
        format!(r#"<script type="text/javascript">{}</script>"#, widgets.join("\n"))
    } else {
        String::new()
    };

    format!(
        r#"<!DOCTYPE html><html><head>
             <script type="text/javascript">var apex_img_dir = "/i/";</script>
             {plugin_script}
           </head><body>
             <form action="wwv_flow.accept" method="post">
               <input type="hidden" name="p_instance" value="5" id="pInstance" />
               <input type="hidden" value="xyz" id="pSalt" />
               <input type="hidden" value="prot" id="pPageItemsProtected" />
             </form>
           </body></html>"#
    )
}

pub fn fragment(dataset: DatasetKind) -> String {
    let rows = match dataset {
        DatasetKind::Progress => {
            "<tr><th>Дата</th><th>Статус</th><th>Курьер</th><th>Город</th></tr>\
             <tr><td>10.01.2024 09:12</td><td>Принят</td><td>Иван</td><td>Алматы</td></tr>\
             <tr><td>11.01.2024 14:40</td><td>Передан курьеру</td><td>Асхат</td><td>Алматы</td></tr>"
        }
        DatasetKind::Routes => {
            "<tr><td>ALA-01</td><td>T-77</td><td>Выдан курьеру</td><td>Асхат</td><td>11.01.2024 14:40</td></tr>"
        }
        DatasetKind::Items => {
            "<tr><td>Смартфон</td></tr><tr><td>Чехол</td></tr><tr><td>Кабель</td></tr>"
        }
    };
    format!(
        r#"<div class="a-IRR-tableContainer"><table class="a-IRR-table" id="{}">{rows}</table></div>"#,
        dataset.worksheet_id()
    )
}

async fn landing_page(State(st): State<PortalState>) -> Response {
    match st.landing {
        Landing::Unavailable => StatusCode::SERVICE_UNAVAILABLE.into_response(),
        Landing::NoCookies => Html(landing_html(true, None)).into_response(),
        Landing::NoScript => (
            AppendHeaders([(SET_COOKIE, "SESSION=abc; Path=/")]),
            Html(landing_html(false, None)),
        )
            .into_response(),
        Landing::WithoutWidget(dataset) => (
            AppendHeaders([(SET_COOKIE, "SESSION=abc; Path=/")]),
            Html(landing_html(true, Some(dataset))),
        )
            .into_response(),
        Landing::Ok => (
            AppendHeaders([
                (SET_COOKIE, "SESSION=abc; Path=/"),
                (SET_COOKIE, "LANG=ru; Path=/"),
            ]),
            Html(landing_html(true, None)),
        )
            .into_response(),
    }
}

async fn worksheet(
    State(st): State<PortalState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Response {
    let mut fields = HashMap::new();
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        let value = field.text().await.unwrap();
        fields.insert(name, value);
    }
    let cookie = headers
        .get(COOKIE)
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    let dataset = fields
        .get("x01")
        .and_then(|id| DatasetKind::from_worksheet_id(id));

    st.seen.lock().unwrap().push(SeenRequest { cookie, fields });

    match dataset {
        Some(d) if st.failing == Some(d) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        Some(d) => Html(fragment(d)).into_response(),
        None => StatusCode::BAD_REQUEST.into_response(),
    }
}
