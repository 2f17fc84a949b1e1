//! Freeform layout model
//!
//! A freeform layout is a flat list of absolutely positioned panels. Stacking
//! follows `z_index`; panels with equal `z_index` stack in list order, later
//! panels on top.
//!
//! Pointer handling lives in the host. The methods here commit the deltas a
//! drag or resize gesture produced.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;
use crate::split::{
    IdGenerator, LayoutError, LayoutResult, NodeId, PANEL_ID_PREFIX, PanelContent, fresh_id,
};

/// Smallest width or height a resize may produce, in pixels.
pub const DEFAULT_MIN_PANEL_SIZE: f64 = 40.0;

/// A panel with absolute geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeformPanel {
    /// Panel id, unique within the layout.
    pub id: NodeId,
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width, greater than zero.
    pub width: f64,
    /// Height, greater than zero.
    pub height: f64,
    /// What the panel displays.
    #[serde(default)]
    pub content: PanelContent,
    /// Stacking position; higher is closer to the viewer.
    #[serde(default)]
    pub z_index: i64,
}

impl FreeformPanel {
    /// Creates a panel covering `rect`.
    #[must_use]
    pub fn new(id: impl Into<NodeId>, rect: Rect, content: PanelContent, z_index: i64) -> Self {
        Self {
            id: id.into(),
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            content,
            z_index,
        }
    }

    /// Returns the panel geometry.
    #[must_use]
    pub const fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// An ordered collection of freeform panels.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FreeformLayout {
    panels: Vec<FreeformPanel>,
}

impl FreeformLayout {
    /// Creates an empty layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps existing panels, keeping their order.
    #[must_use]
    pub const fn from_panels(panels: Vec<FreeformPanel>) -> Self {
        Self { panels }
    }

    /// Returns the panels in list order.
    #[must_use]
    pub fn panels(&self) -> &[FreeformPanel] {
        &self.panels
    }

    /// Returns the number of panels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    /// Returns true if there are no panels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Finds a panel by id.
    #[must_use]
    pub fn get(&self, id: &NodeId) -> Option<&FreeformPanel> {
        self.panels.iter().find(|p| &p.id == id)
    }

    fn get_mut(&mut self, id: &NodeId) -> LayoutResult<&mut FreeformPanel> {
        self.panels
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| LayoutError::NotFound(id.clone()))
    }

    fn top_z(&self) -> i64 {
        self.panels.iter().map(|p| p.z_index).max().unwrap_or(0)
    }

    /// Adds a panel on top of the stack and returns its id.
    pub fn add_panel(
        &mut self,
        rect: Rect,
        content: PanelContent,
        ids: &mut dyn IdGenerator,
    ) -> NodeId {
        let taken: HashSet<NodeId> = self.panels.iter().map(|p| p.id.clone()).collect();
        let id = fresh_id(ids, PANEL_ID_PREFIX, |c| taken.contains(c));
        let z_index = self.top_z() + 1;
        self.panels
            .push(FreeformPanel::new(id.clone(), rect, content, z_index));
        id
    }

    /// Removes a panel and returns it.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::NotFound` if no panel has the id.
    pub fn remove_panel(&mut self, id: &NodeId) -> LayoutResult<FreeformPanel> {
        let pos = self
            .panels
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| LayoutError::NotFound(id.clone()))?;
        Ok(self.panels.remove(pos))
    }

    /// Commits a drag delta. The resulting position is clamped to `>= 0`.
    ///
    /// Returns the new geometry.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::NotFound` if no panel has the id.
    pub fn move_by(&mut self, id: &NodeId, dx: f64, dy: f64) -> LayoutResult<Rect> {
        let panel = self.get_mut(id)?;
        panel.x = (panel.x + dx).max(0.0);
        panel.y = (panel.y + dy).max(0.0);
        Ok(panel.rect())
    }

    /// Commits a resize delta. The resulting size is clamped to `min_size`.
    ///
    /// Returns the new geometry.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::NotFound` if no panel has the id.
    pub fn resize_by(
        &mut self,
        id: &NodeId,
        dw: f64,
        dh: f64,
        min_size: f64,
    ) -> LayoutResult<Rect> {
        let panel = self.get_mut(id)?;
        panel.width = (panel.width + dw).max(min_size);
        panel.height = (panel.height + dh).max(min_size);
        Ok(panel.rect())
    }

    /// Raises a panel above every other panel.
    ///
    /// Returns the panel's new `z_index`.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::NotFound` if no panel has the id.
    pub fn bring_to_front(&mut self, id: &NodeId) -> LayoutResult<i64> {
        let top = self
            .panels
            .iter()
            .filter(|p| &p.id != id)
            .map(|p| p.z_index)
            .max();
        let panel = self.get_mut(id)?;
        if let Some(top) = top
            && panel.z_index <= top
        {
            panel.z_index = top + 1;
        }
        Ok(panel.z_index)
    }

    /// Returns panels from bottom to top.
    #[must_use]
    pub fn stacking_order(&self) -> Vec<&FreeformPanel> {
        let mut ordered: Vec<&FreeformPanel> = self.panels.iter().collect();
        ordered.sort_by_key(|p| p.z_index);
        ordered
    }

    /// Returns the topmost panel containing the point.
    #[must_use]
    pub fn panel_at(&self, x: f64, y: f64) -> Option<&FreeformPanel> {
        self.stacking_order()
            .into_iter()
            .rev()
            .find(|p| p.rect().contains_point(x, y))
    }

    /// Returns the rectangle covering every panel.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        let rects: Vec<Rect> = self.panels.iter().map(FreeformPanel::rect).collect();
        Rect::bounding(&rects)
    }
}
