use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A registered DOM listener. Dropping it removes the listener, so every
/// exit path of the owner releases it.
pub struct ListenerGuard {
    target: web::EventTarget,
    event: &'static str,
    callback: js_sys::Function,
    // Keeps the Rust closure alive exactly as long as the registration.
    _closure: Box<dyn std::any::Any>,
}

impl ListenerGuard {
    pub fn event(&self) -> &'static str {
        self.event
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, &self.callback);
    }
}

/// Register `handler` for `event` on `target`.
///
/// `passive: false` is required for handlers that call `prevent_default`
/// on wheel and touch events.
pub fn listen<E>(
    target: &web::EventTarget,
    event: &'static str,
    passive: bool,
    handler: impl FnMut(E) + 'static,
) -> anyhow::Result<ListenerGuard>
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let callback: js_sys::Function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(passive);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(event, &callback, &opts)
        .map_err(|e| anyhow::anyhow!("listen {event}: {:?}", e))?;
    Ok(ListenerGuard {
        target: target.clone(),
        event,
        callback,
        _closure: Box::new(closure),
    })
}
