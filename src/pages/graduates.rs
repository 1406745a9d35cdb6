use crate::constants::GRADUATES_GRID_ID;
use crate::core::{Graduate, Roster};
use crate::dom;
use wasm_bindgen::JsValue;
use web_sys as web;

fn graduate_card(document: &web::Document, graduate: &Graduate) -> Result<web::Element, JsValue> {
    let card = document.create_element("a")?;
    card.set_attribute("href", &dom::designer_href(&graduate.full_name))?;
    card.set_class_name("graduate-card");

    let photo = document.create_element("div")?;
    photo.set_class_name("graduate-photo-placeholder");
    let label = document.create_element("span")?;
    label.set_text_content(Some("PHOTO"));
    photo.append_child(&label)?;

    let info = document.create_element("div")?;
    info.set_class_name("graduate-info");
    let name = document.create_element("span")?;
    name.set_class_name("graduate-name");
    name.set_text_content(Some(&graduate.full_name));
    info.append_child(&name)?;

    card.append_child(&photo)?;
    card.append_child(&info)?;
    Ok(card)
}

/// Fill `#graduatesGrid` with one card per graduate. No-op on other pages.
pub fn render(document: &web::Document, roster: &Roster) -> anyhow::Result<()> {
    let Some(grid) = document.get_element_by_id(GRADUATES_GRID_ID) else {
        return Ok(());
    };
    grid.set_inner_html("");
    for graduate in roster.iter() {
        let card = graduate_card(document, graduate).map_err(|e| anyhow::anyhow!("{:?}", e))?;
        grid.append_child(&card)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    }
    log::info!("[graduates] rendered {} cards", roster.len());
    Ok(())
}
