use super::History;
use crate::router::{Router, RouterError};

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, Window};

const POPSTATE: &str = "popstate";

fn js_error(e: JsValue) -> RouterError {
    RouterError::History(format!("{:?}", e))
}

fn window() -> Result<Window, RouterError> {
    web_sys::window().ok_or_else(|| RouterError::History("no window".into()))
}

/// `window.location` and `window.history` of the current page.
#[derive(Debug, Clone)]
pub struct BrowserHistory {
    window: Window,
}

impl BrowserHistory {
    pub fn new() -> Result<Self, RouterError> {
        Ok(Self { window: window()? })
    }
}

impl History for BrowserHistory {
    fn path(&self) -> String {
        self.window.location().pathname().unwrap_or_default()
    }

    fn query(&self) -> String {
        self.window.location().search().unwrap_or_default()
    }

    fn push(&mut self, url: &str) -> Result<(), RouterError> {
        self.window
            .history()
            .and_then(|h| h.push_state_with_url(&JsValue::NULL, "", Some(url)))
            .map_err(js_error)
    }

    fn replace(&mut self, url: &str) -> Result<(), RouterError> {
        self.window
            .history()
            .and_then(|h| h.replace_state_with_url(&JsValue::NULL, "", Some(url)))
            .map_err(js_error)
    }
}

/// Forwards `popstate` events to a shared router.
///
/// The listener is removed when this value is dropped.
pub struct PopStateListener {
    window: Window,
    closure: Closure<dyn FnMut(Event)>,
}

impl PopStateListener {
    pub fn attach(router: Rc<RefCell<Router<BrowserHistory>>>) -> Result<Self, RouterError> {
        let window = window()?;
        let closure = Closure::wrap(Box::new(move |_: Event| match router.try_borrow_mut() {
            Ok(mut router) => router.location_changed(),
            Err(_) => tracing::warn!("router is busy, popstate dropped"),
        }) as Box<dyn FnMut(Event)>);
        window
            .add_event_listener_with_callback(POPSTATE, closure.as_ref().unchecked_ref())
            .map_err(js_error)?;
        Ok(Self { window, closure })
    }
}

impl Drop for PopStateListener {
    fn drop(&mut self) {
        let ret = self
            .window
            .remove_event_listener_with_callback(POPSTATE, self.closure.as_ref().unchecked_ref());
        if let Err(e) = ret {
            tracing::warn!(error = ?e, "failed to remove popstate listener");
        }
    }
}
