use crate::constants::ROSTER_URL;
use crate::core::Roster;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

async fn fetch_text(url: &str) -> anyhow::Result<String> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("fetch {url}: {:?}", e))?
        .dyn_into::<web::Response>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    if !resp.ok() {
        anyhow::bail!("fetch {url}: HTTP {}", resp.status());
    }
    let text = JsFuture::from(resp.text().map_err(|e| anyhow::anyhow!("{:?}", e))?)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    text.as_string()
        .ok_or_else(|| anyhow::anyhow!("fetch {url}: body is not text"))
}

/// Load the roster JSON, falling back to the bundled list on any failure.
pub async fn load_roster() -> Roster {
    match fetch_text(ROSTER_URL).await {
        Ok(json) => Roster::from_json_or_fallback(&json),
        Err(e) => {
            log::error!("[roster] {e:?}; using bundled roster");
            Roster::fallback()
        }
    }
}
