//! Externally-owned registry of resizable scene items.
//!
//! Components never hold references into the scene; they hold [`ItemId`]s
//! and re-resolve them on every use. A stale id fails the lookup, which
//! callers treat as "item gone" rather than an error worth panicking over.

use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier of a scene item.
pub type ItemId = Uuid;

/// Scene registry errors.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// A rectangular visual element managed by the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneItem {
    /// Top-left corner position.
    pub position: Point,
    /// Width of the item.
    pub width: f64,
    /// Height of the item.
    pub height: f64,
    /// Whether the item's own gesture handling is enabled.
    ///
    /// Scrollable containers have this toggled off while a resize drag is
    /// in progress, so their flick gesture cannot fight the drag.
    pub interactive: bool,
}

impl SceneItem {
    /// Create a new item with gesture handling enabled.
    pub fn new(position: Point, width: f64, height: f64) -> Self {
        Self {
            position,
            width,
            height,
            interactive: true,
        }
    }

    /// Current size.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Bounding rectangle.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + self.width,
            self.position.y + self.height,
        )
    }
}

/// Identifier of a geometry watch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WatchId(u64);

/// Notification that a watched item's size changed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GeometryEvent {
    /// The watch this event was produced for.
    pub watch: WatchId,
    /// The item that changed.
    pub item: ItemId,
    /// The item's new size.
    pub size: Size,
}

/// Owns all items and dispatches geometry-change notifications.
///
/// The host is expected to pump [`Scene::drain_geometry_events`] after each
/// batch of mutations and deliver the events to whoever subscribed.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    items: HashMap<ItemId, SceneItem>,
    watches: Vec<(WatchId, ItemId)>,
    next_watch: u64,
    pending: Vec<GeometryEvent>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item, returning its id.
    pub fn insert(&mut self, item: SceneItem) -> ItemId {
        let id = Uuid::new_v4();
        self.items.insert(id, item);
        id
    }

    /// Remove an item. Watches on it become inert.
    pub fn remove(&mut self, id: ItemId) -> Option<SceneItem> {
        self.watches.retain(|(_, item)| *item != id);
        self.items.remove(&id)
    }

    /// Whether an item is still alive.
    pub fn contains(&self, id: ItemId) -> bool {
        self.items.contains_key(&id)
    }

    /// Number of items in the scene.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the scene holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item.
    pub fn item(&self, id: ItemId) -> SceneResult<&SceneItem> {
        self.items.get(&id).ok_or(SceneError::ItemNotFound(id))
    }

    /// Look up an item mutably.
    ///
    /// Size changes made through this reference bypass geometry watches;
    /// use [`Scene::set_item_size`] when observers must be notified.
    pub fn item_mut(&mut self, id: ItemId) -> SceneResult<&mut SceneItem> {
        self.items.get_mut(&id).ok_or(SceneError::ItemNotFound(id))
    }

    /// Resize an item, queueing one geometry event per watch on it.
    pub fn set_item_size(&mut self, id: ItemId, size: Size) -> SceneResult<()> {
        let item = self.items.get_mut(&id).ok_or(SceneError::ItemNotFound(id))?;
        item.width = size.width;
        item.height = size.height;
        for &(watch, watched) in &self.watches {
            if watched == id {
                self.pending.push(GeometryEvent {
                    watch,
                    item: id,
                    size,
                });
            }
        }
        Ok(())
    }

    /// Toggle an item's gesture handling.
    pub fn set_interactive(&mut self, id: ItemId, interactive: bool) -> SceneResult<()> {
        self.item_mut(id)?.interactive = interactive;
        Ok(())
    }

    /// Subscribe to size changes of an item.
    pub fn subscribe(&mut self, id: ItemId) -> SceneResult<WatchId> {
        if !self.items.contains_key(&id) {
            return Err(SceneError::ItemNotFound(id));
        }
        let watch = WatchId(self.next_watch);
        self.next_watch += 1;
        self.watches.push((watch, id));
        Ok(watch)
    }

    /// Drop a watch. Unknown ids are ignored.
    pub fn unsubscribe(&mut self, watch: WatchId) {
        self.watches.retain(|(w, _)| *w != watch);
    }

    /// Take the geometry events queued since the last drain.
    pub fn drain_geometry_events(&mut self) -> Vec<GeometryEvent> {
        std::mem::take(&mut self.pending)
    }
}
