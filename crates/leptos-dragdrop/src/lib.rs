//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag. The crate only
//! tracks the gesture; what a drop means is up to the caller's callbacks.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// DnD state signals, keyed by the caller's item id type
pub struct DndSignals<K: 'static> {
    pub dragging_id_read: ReadSignal<Option<K>>,
    pub dragging_id_write: WriteSignal<Option<K>>,
    /// Item currently hovered while dragging
    pub drop_target_read: ReadSignal<Option<K>>,
    pub drop_target_write: WriteSignal<Option<K>>,
    /// Pending item id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<K>>,
    pub pending_id_write: WriteSignal<Option<K>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
    /// Movement threshold in pixels to start dragging
    pub threshold_px: i32,
}

// Manual impls: derive would require K: Copy
impl<K: 'static> Clone for DndSignals<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: 'static> Copy for DndSignals<K> {}

pub fn create_dnd_signals<K>(threshold_px: i32) -> DndSignals<K>
where
    K: Clone + PartialEq + Send + Sync + 'static,
{
    let (dragging_id_read, dragging_id_write) = signal(None::<K>);
    let (drop_target_read, drop_target_write) = signal(None::<K>);
    let (pending_id_read, pending_id_write) = signal(None::<K>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        drop_target_read,
        drop_target_write,
        pending_id_read,
        pending_id_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
        threshold_px,
    }
}

/// True once the pointer moved more than `threshold` on either axis
pub fn exceeds_threshold(start: (i32, i32), now: (i32, i32), threshold: i32) -> bool {
    (now.0 - start.0).abs() > threshold || (now.1 - start.1).abs() > threshold
}

impl<K> DndSignals<K>
where
    K: Clone + PartialEq + Send + Sync + 'static,
{
    pub fn is_dragging(&self, id: &K) -> bool {
        self.dragging_id_read.with(|d| d.as_ref() == Some(id))
    }

    pub fn is_drop_target(&self, id: &K) -> bool {
        self.drop_target_read.with(|t| t.as_ref() == Some(id))
    }

    pub fn any_dragging(&self) -> bool {
        self.dragging_id_read.with(|d| d.is_some())
    }

    fn any_dragging_untracked(&self) -> bool {
        self.dragging_id_read.with_untracked(|d| d.is_some())
    }
}

/// End drag operation
pub fn end_drag<K>(dnd: &DndSignals<K>)
where
    K: Clone + PartialEq + Send + Sync + 'static,
{
    dnd.dragging_id_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_id_write.set(None);
}

/// Create mousedown handler for draggable items
/// Records pending drag with start position
pub fn make_on_mousedown<K>(dnd: DndSignals<K>, item_id: K) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    K: Clone + PartialEq + Send + Sync + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is a form control
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlSelectElement>().is_some() { return; }
            }
            // Record pending drag with position
            dnd.pending_id_write.set(Some(item_id.clone()));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Whether hovering `item_id` should become the drop target.
/// `accepts` is the caller's rule (self, stale ids, ...).
pub fn accepts_hover<K, A>(dragging: Option<&K>, item_id: &K, accepts: A) -> bool
where
    A: Fn(&K) -> bool,
{
    dragging.is_some() && accepts(item_id)
}

/// Create mouseenter handler for items
pub fn make_on_item_mouseenter<K, A>(dnd: DndSignals<K>, item_id: K, accepts: A) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    K: Clone + PartialEq + Send + Sync + 'static,
    A: Fn(&K) -> bool + Clone + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_id_read.get_untracked();
        if accepts_hover(dragging.as_ref(), &item_id, &accepts) {
            dnd.drop_target_write.set(Some(item_id.clone()));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave<K>(dnd: DndSignals<K>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    K: Clone + PartialEq + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.any_dragging_untracked() {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Bind global mousemove handler - starts drag if moved enough
fn bind_global_mousemove<K, S>(dnd: DndSignals<K>, on_start: S)
where
    K: Clone + PartialEq + Send + Sync + 'static,
    S: Fn(K) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        // If we have a pending drag and haven't started dragging yet
        let Some(pending) = dnd.pending_id_read.get_untracked() else { return };
        if dnd.any_dragging_untracked() { return; }

        let start = (dnd.start_x_read.get_untracked(), dnd.start_y_read.get_untracked());
        if exceeds_threshold(start, (ev.client_x(), ev.client_y()), dnd.threshold_px) {
            dnd.dragging_id_write.set(Some(pending.clone()));
            on_start(pending);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Bind global mouse handlers for the whole gesture.
///
/// `on_start` fires when a pending press turns into a drag, `on_drop` when
/// the button is released over a target, and `on_end` after every drag
/// (dropped or not).
pub fn bind_global_handlers<K, S, D, E>(dnd: DndSignals<K>, on_start: S, on_drop: D, on_end: E)
where
    K: Clone + PartialEq + Send + Sync + 'static,
    S: Fn(K) + 'static,
    D: Fn(K, K) + 'static,
    E: Fn() + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging_id = dnd.dragging_id_read.get_untracked();
        let drop_target = dnd.drop_target_read.get_untracked();

        end_drag(&dnd);

        // Plain click: nothing was dragged
        let Some(dragged) = dragging_id else { return };
        if let Some(target) = drop_target {
            on_drop(dragged, target);
        }
        on_end();
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    bind_global_mousemove(dnd, on_start);
}
