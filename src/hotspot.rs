//! Hotspot elements: screen regions bound to one project each.

use crate::geometry::{Point, Rect};

/// A hoverable/clickable region bound to one project.
#[derive(Debug, Clone)]
pub struct Hotspot {
    pub id: String,
    pub bounds: Rect,
    /// Key into the project registry.
    pub project_id: String,
    /// Visual highlight flag, owned by the coordinator.
    pub active: bool,
}

impl Hotspot {
    pub fn new(id: impl Into<String>, project_id: impl Into<String>, bounds: Rect) -> Self {
        Self {
            id: id.into(),
            project_id: project_id.into(),
            bounds,
            active: false,
        }
    }
}

/// Insertion-ordered hotspot collection with exclusive activation.
#[derive(Debug, Default)]
pub struct HotspotSet {
    hotspots: Vec<Hotspot>,
}

impl HotspotSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a hotspot, replacing any existing one with the same id.
    pub fn insert(&mut self, hotspot: Hotspot) {
        if let Some(existing) = self.hotspots.iter_mut().find(|h| h.id == hotspot.id) {
            *existing = hotspot;
        } else {
            self.hotspots.push(hotspot);
        }
    }

    pub fn get(&self, id: &str) -> Option<&Hotspot> {
        self.hotspots.iter().find(|h| h.id == id)
    }

    /// Update a hotspot's bounding rectangle. Returns false for unknown ids.
    pub fn set_bounds(&mut self, id: &str, bounds: Rect) -> bool {
        match self.hotspots.iter_mut().find(|h| h.id == id) {
            Some(h) => {
                h.bounds = bounds;
                true
            }
            None => false,
        }
    }

    /// Topmost hotspot under the point. Later insertions win, matching
    /// paint order.
    pub fn hit_test(&self, p: Point) -> Option<&Hotspot> {
        self.hotspots.iter().rev().find(|h| h.bounds.contains(p))
    }

    /// Set the active highlight on one hotspot, clearing it everywhere else.
    pub fn set_active(&mut self, id: &str) {
        for h in &mut self.hotspots {
            h.active = h.id == id;
        }
    }

    pub fn clear_active(&mut self) {
        for h in &mut self.hotspots {
            h.active = false;
        }
    }

    pub fn active_id(&self) -> Option<&str> {
        self.hotspots.iter().find(|h| h.active).map(|h| h.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.hotspots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hotspots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Hotspot> {
        self.hotspots.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set() -> HotspotSet {
        let mut set = HotspotSet::new();
        set.insert(Hotspot::new("a", "proj-a", Rect::new(0.0, 0.0, 100.0, 100.0)));
        set.insert(Hotspot::new("b", "proj-b", Rect::new(50.0, 50.0, 100.0, 100.0)));
        set
    }

    #[test]
    fn hit_test_prefers_later_insertions() {
        let set = set();
        // (60, 60) is inside both; "b" was inserted later.
        assert_eq!(set.hit_test(Point::new(60.0, 60.0)).unwrap().id, "b");
        assert_eq!(set.hit_test(Point::new(10.0, 10.0)).unwrap().id, "a");
        assert!(set.hit_test(Point::new(500.0, 500.0)).is_none());
    }

    #[test]
    fn activation_is_exclusive() {
        let mut set = set();
        set.set_active("a");
        set.set_active("b");
        assert_eq!(set.active_id(), Some("b"));
        assert!(!set.get("a").unwrap().active);
        set.clear_active();
        assert_eq!(set.active_id(), None);
    }

    #[test]
    fn insert_replaces_same_id() {
        let mut set = set();
        set.insert(Hotspot::new("a", "proj-a2", Rect::new(0.0, 0.0, 10.0, 10.0)));
        assert_eq!(set.len(), 2);
        assert_eq!(set.get("a").unwrap().project_id, "proj-a2");
    }
}
