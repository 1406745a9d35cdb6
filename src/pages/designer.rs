use crate::constants::*;
use crate::core::gallery::{GalleryState, PreviewStyle};
use crate::core::{DesignerView, Roster};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn is_designer_page(document: &web::Document) -> bool {
    document.get_element_by_id(DESIGNER_NAME_ID).is_some()
}

/// Populate name, bio, title and the other-designers list.
pub fn render(document: &web::Document, roster: &Roster) -> anyhow::Result<()> {
    let requested = dom::query_param("name");
    let view = DesignerView::select(roster, requested.as_deref());

    dom::set_text(document, DESIGNER_NAME_ID, &view.display_name);
    dom::set_text(document, DESIGNER_BIO_ID, &view.bio);
    document.set_title(&view.title);

    if let Some(list) = document.get_element_by_id(OTHER_DESIGNERS_ID) {
        list.set_inner_html("");
        for (i, graduate) in roster.iter().enumerate() {
            let link = document
                .create_element("a")
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            _ = link.set_attribute("href", &dom::designer_href(&graduate.full_name));
            link.set_class_name("other-designer-link");
            if view.is_current(i) {
                _ = link.class_list().add_1("current");
            }
            link.set_text_content(Some(&graduate.display_name()));
            _ = list.append_child(&link);
        }
    }
    log::info!("[designer] showing {:?} ({:?})", view.display_name, view.current);
    Ok(())
}

fn apply_preview(preview: &web::Element, style: PreviewStyle) {
    if let Some(color) = style.color {
        dom::set_style(preview, "background-color", color);
    }
    dom::set_style(preview, "opacity", &style.opacity.to_string());
}

/// Wire click/hover on `.project-thumbnail` elements.
pub fn wire_gallery(document: &web::Document) {
    let Ok(nodes) = document.query_selector_all(".project-thumbnail") else {
        return;
    };
    let thumbs: Rc<Vec<web::Element>> = Rc::new(
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|n| n.dyn_into::<web::Element>().ok())
            .collect(),
    );
    if thumbs.is_empty() {
        return;
    }
    let preview = document.get_element_by_id(PROJECT_PREVIEW_ID);
    let initial = thumbs.iter().position(|t| t.class_list().contains("active"));
    let state = Rc::new(RefCell::new(GalleryState::new(initial)));

    for (index, thumb) in thumbs.iter().enumerate() {
        {
            let state = state.clone();
            let thumbs = thumbs.clone();
            let preview = preview.clone();
            dom::add_click_listener(thumb, move || {
                for t in thumbs.iter() {
                    _ = t.class_list().remove_1("active");
                }
                _ = thumbs[index].class_list().add_1("active");
                let style = state.borrow_mut().click(index);
                if let Some(p) = &preview {
                    apply_preview(p, style);
                }
            });
        }
        for (event, entering) in [("mouseenter", true), ("mouseleave", false)] {
            let state = state.clone();
            let preview = preview.clone();
            dom::listen(thumb, event, move |_: web::Event| {
                let gallery = state.borrow();
                let style = if entering {
                    gallery.enter(index)
                } else {
                    gallery.leave(index)
                };
                if let (Some(p), Some(style)) = (&preview, style) {
                    apply_preview(p, style);
                }
            });
        }
    }
}
