// src/core/net.rs

// Blocking HTTP GET. No status check, no retry: a non-200 body is returned as-is.

use reqwest::blocking::Client;

use crate::config::options::FetchOptions;
use crate::error::Result;

pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(opts: &FetchOptions) -> Result<Self> {
        let mut builder = Client::builder().user_agent(opts.user_agent.as_str());
        // reqwest's blocking client defaults to 30s; keep "no timeout" when unset
        builder = builder.timeout(opts.timeout);
        Ok(Self { client: builder.build()? })
    }

    pub fn get_text(&self, url: &str) -> Result<String> {
        let resp = self.client.get(url).send()?;
        logd!("Net: GET {} -> {}", url, resp.status());
        Ok(resp.text()?)
    }

    pub fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let resp = self.client.get(url).send()?;
        logd!("Net: GET {} -> {}", url, resp.status());
        Ok(resp.bytes()?.to_vec())
    }
}
