//! Closes the sidebar when a pointer press lands outside of it
//!
//! A document-level `mousedown` listener is attached while the layout is
//! mounted and removed when it unmounts. Native targets have no document;
//! there the overlay click is the only way to close the sidebar.

#[cfg(target_arch = "wasm32")]
use dioxus::prelude::*;

use crate::shared::hooks::DashboardShell;

#[cfg(target_arch = "wasm32")]
pub fn use_outside_click(shell: DashboardShell) {
    use std::rc::Rc;

    let mut shell = shell;
    let listener = use_hook(move || {
        Rc::new(browser::DocumentListener::attach("mousedown", move |event| {
            if let Some(target) = browser::classify_target(&event) {
                shell.handle_pointer_down(target);
            }
        }))
    });

    use_drop(move || listener.detach());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn use_outside_click(_shell: DashboardShell) {}

#[cfg(target_arch = "wasm32")]
mod browser {
    use std::cell::RefCell;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    use crate::shared::constants::{SIDEBAR_ID, SIDEBAR_TOGGLE_ID};
    use crate::shared::logging::log_listener_error;
    use crate::shared::state::PointerTarget;

    type Callback = Closure<dyn FnMut(web_sys::Event)>;

    fn document() -> Option<web_sys::Document> {
        web_sys::window().and_then(|window| window.document())
    }

    /// Event listener registered on `document`, removed on `detach` or drop
    pub struct DocumentListener {
        event: &'static str,
        callback: RefCell<Option<Callback>>,
    }

    impl DocumentListener {
        pub fn attach(event: &'static str, handler: impl FnMut(web_sys::Event) + 'static) -> Self {
            let callback = Closure::<dyn FnMut(web_sys::Event)>::new(handler);

            if let Some(document) = document() {
                if let Err(e) = document.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
                    log_listener_error(event, &format!("{:?}", e));
                }
            }

            Self {
                event,
                callback: RefCell::new(Some(callback)),
            }
        }

        pub fn detach(&self) {
            let Some(callback) = self.callback.borrow_mut().take() else {
                return;
            };
            if let Some(document) = document() {
                if let Err(e) = document.remove_event_listener_with_callback(self.event, callback.as_ref().unchecked_ref()) {
                    log_listener_error(self.event, &format!("{:?}", e));
                }
            }
        }
    }

    impl Drop for DocumentListener {
        fn drop(&mut self) {
            self.detach();
        }
    }

    /// Locates the event target relative to the sidebar and its toggle button.
    /// `None` while either element is not in the DOM.
    pub fn classify_target(event: &web_sys::Event) -> Option<PointerTarget> {
        let document = document()?;
        let sidebar = document.get_element_by_id(SIDEBAR_ID)?;
        let toggle = document.get_element_by_id(SIDEBAR_TOGGLE_ID)?;
        let node = event
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Node>().ok());

        let target = if sidebar.contains(node.as_ref()) {
            PointerTarget::Sidebar
        } else if toggle.contains(node.as_ref()) {
            PointerTarget::ToggleButton
        } else {
            PointerTarget::Outside
        };
        Some(target)
    }
}
