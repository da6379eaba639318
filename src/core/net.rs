// src/core/net.rs
// HTTP over reqwest. One client per tracking fetch, no cookie store: the
// portal session cookie is captured from the landing page and carried by hand.

use std::time::Instant;

use reqwest::{
    Client,
    header::{COOKIE, SET_COOKIE},
    multipart::Form,
};

use crate::config::options::FetchOptions;

/// Body and raw `Set-Cookie` values of a successful GET.
pub struct Page {
    pub set_cookies: Vec<String>,
    pub body: String,
}

pub fn client(opts: &FetchOptions) -> reqwest::Result<Client> {
    Client::builder().user_agent(opts.user_agent.as_str()).build()
}

/// GET `url`; non-2xx is an error.
pub async fn http_get(client: &Client, url: &str) -> reqwest::Result<Page> {
    let t = Instant::now();
    let resp = client.get(url).send().await?.error_for_status()?;

    let set_cookies = resp
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .map(String::from)
        .collect();
    let body = resp.text().await?;

    logd!("GET {url} in {:?} ({} bytes)", t.elapsed(), body.len());
    Ok(Page { set_cookies, body })
}

/// POST a multipart form with an explicit `Cookie` header; non-2xx is an error.
/// The client sets the multipart `Content-Type` and boundary.
pub async fn http_post_multipart(
    client: &Client,
    url: &str,
    cookie: &str,
    form: Form,
) -> reqwest::Result<String> {
    let t = Instant::now();
    let body = client
        .post(url)
        .header(COOKIE, cookie)
        .multipart(form)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    logd!("POST {url} in {:?} ({} bytes)", t.elapsed(), body.len());
    Ok(body)
}
