use std::collections::{HashMap, HashSet};

use ultraviolet::Vec3;

use super::{Appearance, RenderHandle, Renderer};
use crate::error::{Result, SimError};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Renderable {
    pub appearance: Appearance,
    pub position: Vec3,
}

/// Renderer without a window: keeps the last state of every live renderable
/// so a frontend (or a test) can read it back.
#[derive(Default)]
pub struct HeadlessRenderer {
    live: HashMap<u64, Renderable>,
    next_handle: u64,
    /// Handles whose destruction is refused, to exercise best-effort clears.
    sticky: HashSet<u64>,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, handle: RenderHandle) -> Option<&Renderable> {
        self.live.get(&handle.0)
    }

    /// Make `destroy(handle)` fail until the handle is released again.
    pub fn refuse_destroy(&mut self, handle: RenderHandle) {
        self.sticky.insert(handle.0);
    }

    pub fn allow_destroy(&mut self, handle: RenderHandle) {
        self.sticky.remove(&handle.0);
    }
}

impl Renderer for HeadlessRenderer {
    fn create(&mut self, appearance: Appearance, position: Vec3) -> Result<RenderHandle> {
        let handle = RenderHandle(self.next_handle);
        self.next_handle += 1;
        self.live.insert(handle.0, Renderable { appearance, position });
        Ok(handle)
    }

    fn set_position(&mut self, handle: RenderHandle, position: Vec3) -> Result<()> {
        let r = self
            .live
            .get_mut(&handle.0)
            .ok_or(SimError::UnknownHandle(handle.0))?;
        r.position = position;
        Ok(())
    }

    fn destroy(&mut self, handle: RenderHandle) -> Result<()> {
        if self.sticky.contains(&handle.0) {
            return Err(SimError::DestroyFailed {
                handle: handle.0,
                reason: "renderable is locked".into(),
            });
        }
        self.live
            .remove(&handle.0)
            .map(|_| ())
            .ok_or(SimError::UnknownHandle(handle.0))
    }

    fn live_count(&self) -> usize {
        self.live.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_move_destroy() {
        let mut r = HeadlessRenderer::new();
        let look = Appearance::for_particle(1e-3, 10.0);
        let h = r.create(look, Vec3::zero()).unwrap();
        r.set_position(h, Vec3::new(1.0, 2.0, 3.0)).unwrap();
        assert_eq!(r.get(h).unwrap().position, Vec3::new(1.0, 2.0, 3.0));
        r.destroy(h).unwrap();
        assert_eq!(r.live_count(), 0);
        assert!(r.set_position(h, Vec3::zero()).is_err());
    }

    #[test]
    fn refused_destroy_keeps_renderable() {
        let mut r = HeadlessRenderer::new();
        let h = r.create(Appearance::for_particle(0.0, 1.0), Vec3::zero()).unwrap();
        r.refuse_destroy(h);
        assert!(matches!(r.destroy(h), Err(SimError::DestroyFailed { .. })));
        assert_eq!(r.live_count(), 1);
        r.allow_destroy(h);
        r.destroy(h).unwrap();
        assert_eq!(r.live_count(), 0);
    }
}
