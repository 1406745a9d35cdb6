pub mod chrome;
pub mod designer;
pub mod graduates;

use crate::core::Roster;
use crate::{constants::GRADUATES_GRID_ID, fetch};
use web_sys as web;

/// Populate roster-driven pages. Pages without roster content skip the fetch.
pub async fn populate(document: web::Document) -> anyhow::Result<()> {
    let wants_roster = designer::is_designer_page(&document)
        || document.get_element_by_id(GRADUATES_GRID_ID).is_some();
    if designer::is_designer_page(&document) {
        designer::wire_gallery(&document);
    }
    if !wants_roster {
        return Ok(());
    }
    let roster: Roster = fetch::load_roster().await;
    graduates::render(&document, &roster)?;
    if designer::is_designer_page(&document) {
        designer::render(&document, &roster)?;
    }
    Ok(())
}
