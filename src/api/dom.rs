//! DOM wiring - mouse painting on the canvas and the three control buttons
//!
//! Every listener holds only a `Weak` to the simulation. Bindings remove
//! their listener when dropped, so dropping the app detaches the page.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlCanvasElement, MouseEvent};

use crate::domain::config::ElementIds;
use crate::domain::input::{CellEdit, PointerPainter};
use crate::simulation::Simulation;

use super::js_error;

type Listener = Closure<dyn FnMut(Event)>;

/// A registered listener, removed again on drop.
pub struct Binding {
    target: EventTarget,
    event: &'static str,
    listener: Listener,
}

impl Binding {
    pub fn listen(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, String> {
        let listener: Listener = Closure::new(handler);
        target
            .add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())
            .map_err(js_error)?;
        Ok(Self {
            target: target.clone(),
            event,
            listener,
        })
    }
}

impl Drop for Binding {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.listener.as_ref().unchecked_ref());
    }
}

pub fn element_by_id(document: &Document, id: &str) -> Result<Element, String> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| format!("no element with id '{id}'"))
}

pub fn canvas_by_id(document: &Document, id: &str) -> Result<HtmlCanvasElement, String> {
    element_by_id(document, id)?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| format!("element '{id}' is not a canvas"))
}

/// Run `f` against the simulation if it is still alive and not busy.
fn with_sim(sim: &Weak<RefCell<Simulation>>, f: impl FnOnce(&mut Simulation)) {
    let Some(sim) = sim.upgrade() else {
        return;
    };
    match sim.try_borrow_mut() {
        Ok(mut sim) => f(&mut sim),
        Err(_) => log::warn!("simulation busy, dropping input event"),
    };
}

fn apply_edit(sim: &Weak<RefCell<Simulation>>, edit: Option<CellEdit>) {
    if let Some(edit) = edit {
        with_sim(sim, |sim| {
            sim.edit_cell(edit.row, edit.col, edit.alive);
        });
    }
}

/// Canvas-relative position and button mask of a mouse event.
fn pointer(canvas: &HtmlCanvasElement, event: &Event) -> Option<(f64, f64, u16)> {
    let mouse = event.dyn_ref::<MouseEvent>()?;
    let rect = canvas.get_bounding_client_rect();
    let x = mouse.client_x() as f64 - rect.left();
    let y = mouse.client_y() as f64 - rect.top();
    Some((x, y, mouse.buttons()))
}

/// Primary button paints, secondary erases, dragging keeps going until the
/// button is released or the pointer leaves the canvas.
pub fn bind_canvas(
    canvas: &HtmlCanvasElement,
    sim: &Rc<RefCell<Simulation>>,
    cell_size: u32,
) -> Result<Vec<Binding>, String> {
    let painter = Rc::new(RefCell::new(PointerPainter::new(cell_size)));
    let target: &EventTarget = canvas.as_ref();
    let mut bindings = Vec::with_capacity(5);

    bindings.push(Binding::listen(target, "contextmenu", |event: Event| {
        event.prevent_default();
    })?);

    {
        let painter = Rc::clone(&painter);
        let sim = Rc::downgrade(sim);
        let canvas = canvas.clone();
        bindings.push(Binding::listen(target, "mousedown", move |event: Event| {
            if let Some((x, y, buttons)) = pointer(&canvas, &event) {
                let edit = painter.borrow_mut().press(x, y, buttons);
                apply_edit(&sim, edit);
            }
        })?);
    }

    {
        let painter = Rc::clone(&painter);
        let sim = Rc::downgrade(sim);
        let canvas = canvas.clone();
        bindings.push(Binding::listen(target, "mousemove", move |event: Event| {
            if let Some((x, y, buttons)) = pointer(&canvas, &event) {
                let edit = painter.borrow_mut().drag(x, y, buttons);
                apply_edit(&sim, edit);
            }
        })?);
    }

    for event in ["mouseup", "mouseleave"] {
        let painter = Rc::clone(&painter);
        bindings.push(Binding::listen(target, event, move |_: Event| {
            painter.borrow_mut().release();
        })?);
    }

    Ok(bindings)
}

/// Start/stop, clear and randomize buttons, one controller call each.
pub fn bind_controls(
    document: &Document,
    ids: &ElementIds,
    sim: &Rc<RefCell<Simulation>>,
) -> Result<Vec<Binding>, String> {
    let controls: [(&str, fn(&mut Simulation)); 3] = [
        (ids.start_stop_button.as_str(), Simulation::toggle as fn(&mut Simulation)),
        (ids.clear_button.as_str(), Simulation::clear),
        (ids.random_button.as_str(), Simulation::randomize_and_reset),
    ];

    let mut bindings = Vec::with_capacity(controls.len());
    for (id, action) in controls {
        let element = element_by_id(document, id)?;
        let sim = Rc::downgrade(sim);
        bindings.push(Binding::listen(element.as_ref(), "click", move |_: Event| {
            with_sim(&sim, action);
        })?);
    }
    Ok(bindings)
}
