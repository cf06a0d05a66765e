//! Browser tests for the story popup; run with `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys as web;

wasm_bindgen_test_configure!(run_in_browser);

fn mount_popup_markup(document: &web::Document) -> web::HtmlElement {
    let body = document.body().expect("body");
    let root = document.create_element("div").expect("div");
    root.set_id("story-popup");
    root.set_class_name("hidden");
    for (tag, id) in [("h2", "popup-title"), ("p", "popup-text"), ("button", "close-popup")] {
        let el = document.create_element(tag).expect("element");
        el.set_id(id);
        root.append_child(&el).expect("append");
    }
    body.append_child(&root).expect("append root");
    document
        .get_element_by_id("close-popup")
        .expect("close button")
        .dyn_into::<web::HtmlElement>()
        .expect("html element")
}

#[wasm_bindgen_test]
fn popup_shown_before_start_still_closes() {
    let document = web::window().expect("window").document().expect("document");
    let close = mount_popup_markup(&document);
    let root = document.get_element_by_id("story-popup").expect("root");

    desk_web::show_story_popup("A Note", "Meet me at the docks.").expect("show");
    assert!(root.class_list().contains("visible"));
    assert_eq!(
        document
            .get_element_by_id("popup-title")
            .and_then(|t| t.text_content())
            .as_deref(),
        Some("A Note")
    );

    close.click();
    assert!(root.class_list().contains("hidden"));
    assert!(!root.class_list().contains("visible"));

    // A second call reuses the same wiring.
    desk_web::show_story_popup("Again", "Still here.").expect("show again");
    assert!(root.class_list().contains("visible"));
    close.click();
    assert!(root.class_list().contains("hidden"));
}
