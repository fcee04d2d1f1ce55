//! Pointer-driven editing session.
//!
//! Gesture model (mirrors a hover-then-press viewer):
//! - `hover` updates the highlight: the topmost shape under the cursor, else
//!   the nearest vertex within the pick radius.
//! - Left `press` grabs the highlighted shape (drag translates it), else the
//!   highlighted vertex (drag applies its shape's `DragRule`), else starts a pan.
//! - Right `press` on empty space starts a zoom; right `release` over a shape
//!   toggles it in the editing set.
//! - `release` clears highlight, selection and pan/zoom state.
//!
//! Inserts and deletes checkpoint a scene snapshot up front. A grab checkpoints
//! lazily, on the first drag that actually changes the scene, so a click or a
//! rejected drag leaves the undo stack alone.

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::{Color, EditorCfg, History, PointRef, Scene, SceneError, ShapeId, Viewport};
use crate::shapes::{pt2, Point2, Polygon, ShapeKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Button {
    Left,
    Right,
}

#[derive(Debug)]
pub struct Editor {
    cfg: EditorCfg,
    scene: Scene,
    viewport: Viewport,
    history: History<Scene>,
    editing: BTreeSet<ShapeId>,
    highlighted: Option<ShapeId>,
    highlighted_pt: Option<PointRef>,
    selected: Option<ShapeId>,
    selected_pt: Option<PointRef>,
    pressed: Option<Button>,
    /// World position for left gestures, window pixels for zoom.
    prev: Point2,
    panning: bool,
    zooming: bool,
    /// The current grab already pushed its undo snapshot.
    grab_recorded: bool,
    rng: StdRng,
}

impl Editor {
    pub fn new(width: f64, height: f64, cfg: EditorCfg, seed: u64) -> Self {
        Self {
            cfg,
            scene: Scene::new(),
            viewport: Viewport::new(width, height),
            history: History::with_limit(cfg.history_limit),
            editing: BTreeSet::new(),
            highlighted: None,
            highlighted_pt: None,
            selected: None,
            selected_pt: None,
            pressed: None,
            prev: pt2(0.0, 0.0),
            panning: false,
            zooming: false,
            grab_recorded: false,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[inline]
    pub fn cfg(&self) -> &EditorCfg {
        &self.cfg
    }

    #[inline]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    #[inline]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[inline]
    pub fn editing(&self) -> &BTreeSet<ShapeId> {
        &self.editing
    }

    #[inline]
    pub fn highlighted(&self) -> Option<ShapeId> {
        self.highlighted
    }

    #[inline]
    pub fn highlighted_point(&self) -> Option<PointRef> {
        self.highlighted_pt
    }

    #[inline]
    pub fn selected(&self) -> Option<ShapeId> {
        self.selected
    }

    #[inline]
    pub fn selected_point(&self) -> Option<PointRef> {
        self.selected_pt
    }

    #[inline]
    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }

    /// Add a shape of `kind` at a random spot in the central part of the window.
    /// Circles use the configured segment count.
    pub fn add_shape(&mut self, kind: ShapeKind) -> ShapeId {
        let kind = match kind {
            ShapeKind::Circle { .. } => ShapeKind::Circle {
                segments: self.cfg.circle_segments,
            },
            other => other,
        };
        self.history.checkpoint(self.scene.clone());
        let (w, h) = self.viewport.size();
        let extent = (w * self.cfg.spawn_frac, h * self.cfg.spawn_frac);
        let id = self
            .scene
            .spawn_random(kind, self.cfg.default_radius, extent, &mut self.rng);
        tracing::debug!(id = id.0, %kind, "add shape");
        id
    }

    /// Add a prebuilt polygon on top of the scene, with a random colour.
    pub fn insert(&mut self, poly: Polygon) -> ShapeId {
        self.history.checkpoint(self.scene.clone());
        let color = Color::random(&mut self.rng);
        self.scene.add_colored(poly, color)
    }

    pub fn hover(&mut self, x: f64, y: f64) {
        let mpos = self.viewport.window_to_world(x, y);
        self.highlighted = self.scene.shape_at(mpos);
        self.highlighted_pt = None;
        if self.highlighted.is_none() {
            let radius = self
                .viewport
                .pick_radius(self.cfg.pick_px, self.cfg.pick_ref_diag);
            self.highlighted_pt = self.scene.nearest_point(mpos, radius);
        }
    }

    pub fn press(&mut self, button: Button, x: f64, y: f64) {
        self.pressed = Some(button);
        self.grab_recorded = false;
        match button {
            Button::Left => {
                self.prev = self.viewport.window_to_world(x, y);
                if let Some(id) = self.highlighted {
                    self.selected = Some(id);
                } else if let Some(r) = self.highlighted_pt {
                    self.selected_pt = Some(r);
                } else {
                    self.panning = true;
                }
            }
            Button::Right => {
                if self.highlighted.is_none() && self.highlighted_pt.is_none() {
                    self.prev = pt2(x, y);
                    self.zooming = true;
                }
            }
        }
    }

    pub fn drag(&mut self, x: f64, y: f64) {
        match self.pressed {
            Some(Button::Left) => {
                let mpos = self.viewport.window_to_world(x, y);
                if let Some(id) = self.selected {
                    let delta = mpos - self.prev;
                    if let Err(e) = self.edit_scene(|s| s.translate_shape(id, delta)) {
                        tracing::warn!(%e, "dropping stale selection");
                        self.selected = None;
                    }
                    self.prev = mpos;
                } else if let Some(r) = self.selected_pt {
                    let prev = self.prev;
                    if let Err(e) = self.edit_scene(|s| s.drag_point(r, prev, mpos)) {
                        tracing::warn!(%e, "dropping stale point selection");
                        self.selected_pt = None;
                    }
                    self.prev = mpos;
                } else if self.panning {
                    // prev stays put: after panning, the cursor maps back onto it
                    self.viewport.pan(mpos - self.prev);
                }
            }
            Some(Button::Right) if self.zooming => {
                let mpos = pt2(x, y);
                self.viewport.zoom(self.prev[1] - mpos[1], self.cfg.zoom_rate);
                self.prev = mpos;
            }
            _ => {}
        }
    }

    pub fn release(&mut self, button: Button) {
        if button == Button::Right {
            if let Some(id) = self.highlighted {
                if !self.editing.remove(&id) {
                    self.editing.insert(id);
                }
            }
        }
        self.release_all();
    }

    /// Remove every shape in the editing set; returns how many were removed.
    pub fn delete_editing(&mut self) -> usize {
        if self.editing.is_empty() {
            return 0;
        }
        self.history.checkpoint(self.scene.clone());
        let editing = std::mem::take(&mut self.editing);
        let removed = self.scene.retain(|id, _| !editing.contains(&id));
        tracing::debug!(removed, "delete editing shapes");
        removed
    }

    /// Restore the previous snapshot. Returns `false` when there is none.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(prev) => {
                self.scene = prev;
                self.editing.retain(|id| self.scene.get(*id).is_some());
                self.release_all();
                tracing::debug!(depth = self.history.len(), "undo");
                true
            }
            None => false,
        }
    }

    pub fn default_view(&mut self) {
        self.viewport.default_view();
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.viewport.resize(width, height);
    }

    /// Run one grab edit, checkpointing the pre-grab scene the first time the
    /// edit changes anything.
    fn edit_scene<F>(&mut self, edit: F) -> Result<(), SceneError>
    where
        F: FnOnce(&mut Scene) -> Result<(), SceneError>,
    {
        if self.grab_recorded {
            return edit(&mut self.scene);
        }
        let before = self.scene.clone();
        edit(&mut self.scene)?;
        if self.scene != before {
            self.history.checkpoint(before);
            self.grab_recorded = true;
        }
        Ok(())
    }

    fn release_all(&mut self) {
        self.pressed = None;
        self.grab_recorded = false;
        self.selected = None;
        self.highlighted = None;
        self.selected_pt = None;
        self.highlighted_pt = None;
        self.panning = false;
        self.zooming = false;
    }
}
