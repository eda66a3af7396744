use crate::constants::*;
use crate::dom::{self, Listener};
use folio_core::content::{ProjectCategory, ProjectFilter};
use web_sys as web;

/// Cards carry their category label, e.g. `data-project-category="AI/Data"`.
fn card_matches(filter: ProjectFilter, card: &web::Element) -> bool {
    card.get_attribute(PROJECT_CATEGORY_ATTR)
        .and_then(|label| ProjectCategory::from_label(&label))
        .map(|category| filter.matches_category(category))
        .unwrap_or(filter == ProjectFilter::All)
}

pub fn apply(document: &web::Document, filter: ProjectFilter) {
    for card in dom::query_all(document, &format!("[{}]", PROJECT_CATEGORY_ATTR)) {
        dom::set_hidden(&card, !card_matches(filter, &card));
    }
    for button in dom::query_all(document, &format!("[{}]", PROJECT_FILTER_ATTR)) {
        let selected = button.get_attribute(PROJECT_FILTER_ATTR).as_deref() == Some(filter.label());
        dom::set_class(&button, FILTER_SELECTED_CLASS, selected);
    }
}

/// Filter buttons carry the filter label, e.g. `data-project-filter="AI/Data"`.
pub fn wire_filters(document: &web::Document) -> Vec<Listener> {
    apply(document, ProjectFilter::default());
    let mut listeners = Vec::new();
    for button in dom::query_all(document, &format!("[{}]", PROJECT_FILTER_ATTR)) {
        let label = button.get_attribute(PROJECT_FILTER_ATTR).unwrap_or_default();
        let Some(filter) = ProjectFilter::from_label(&label) else {
            log::warn!("[projects] unknown filter {:?}", label);
            continue;
        };
        let doc = document.clone();
        listeners.extend(Listener::new(&button, "click", move |_| apply(&doc, filter)));
    }
    listeners
}
