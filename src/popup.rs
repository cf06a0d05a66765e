use crate::constants::{
    CLASS_HIDDEN, CLASS_VISIBLE, POPUP_CLOSE_ID, POPUP_ID, POPUP_TEXT_ID, POPUP_TITLE_ID,
};
use crate::dom::{self, Listener};
use web_sys as web;

/// The story popup: a root panel with a title, body text and close button.
pub struct StoryPopup {
    root: web::Element,
    title: web::Element,
    text: web::Element,
    _close: Listener,
}

impl StoryPopup {
    /// Every popup element is required; a page without them cannot tell the story.
    pub fn lookup(document: &web::Document) -> anyhow::Result<Self> {
        let root = dom::required_element(document, POPUP_ID)?;
        let title = dom::required_element(document, POPUP_TITLE_ID)?;
        let text = dom::required_element(document, POPUP_TEXT_ID)?;
        let close = dom::required_element(document, POPUP_CLOSE_ID)?;
        let root_for_close = root.clone();
        let close_listener = Listener::attach(&close, "click", move |_ev: web::MouseEvent| {
            hide_element(&root_for_close);
        });
        Ok(Self {
            root,
            title,
            text,
            _close: close_listener,
        })
    }

    pub fn show(&self, title: &str, body: &str) {
        self.title.set_text_content(Some(title));
        self.text.set_text_content(Some(body));
        let cl = self.root.class_list();
        _ = cl.remove_1(CLASS_HIDDEN);
        _ = cl.add_1(CLASS_VISIBLE);
        log::info!("[popup] {}", title);
    }

    pub fn hide(&self) {
        hide_element(&self.root);
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.root.class_list().contains(CLASS_VISIBLE)
    }
}

fn hide_element(root: &web::Element) {
    let cl = root.class_list();
    _ = cl.remove_1(CLASS_VISIBLE);
    _ = cl.add_1(CLASS_HIDDEN);
}
