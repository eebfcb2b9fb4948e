use crate::api::types::ObjectId;
use crate::components::object::SceneObject;

/// Scene graph storage using a flat Vec.
/// Designed for small object counts (tens to hundreds); objects have no parents.
pub struct SceneGraph {
    objects: Vec<SceneObject>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self {
            objects: Vec::with_capacity(64),
        }
    }

    /// Add an object to the scene.
    pub fn add(&mut self, object: SceneObject) {
        self.objects.push(object);
    }

    /// Remove an object by ID. Returns the removed object if found.
    pub fn remove(&mut self, id: ObjectId) -> Option<SceneObject> {
        let idx = self.objects.iter().position(|o| o.id == id)?;
        Some(self.objects.remove(idx))
    }

    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.objects.iter_mut().find(|o| o.id == id)
    }

    /// Iterate over all objects in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut SceneObject> {
        self.objects.iter_mut()
    }

    /// Find the first object with the given tag.
    pub fn find_by_tag(&self, tag: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.tag == tag)
    }

    pub fn find_by_tag_mut(&mut self, tag: &str) -> Option<&mut SceneObject> {
        self.objects.iter_mut().find(|o| o.tag == tag)
    }

    /// Find all objects with the given tag.
    pub fn find_all_by_tag(&self, tag: &str) -> Vec<&SceneObject> {
        self.objects.iter().filter(|o| o.tag == tag).collect()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn clear(&mut self) {
        self.objects.clear();
    }
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}
