use crate::manifest::Project;

/// Circular step through `len` items. `len == 0` yields 0.
#[inline]
pub fn wrap_index(index: usize, direction: i32, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (index as i64 + direction as i64).rem_euclid(len as i64) as usize
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct ActiveProject {
    id: String,
    image_count: usize,
    index: usize,
}

/// Which project the gallery viewer shows and which of its images.
#[derive(Clone, Debug, Default)]
pub struct ModalNav {
    active: Option<ActiveProject>,
}

impl ModalNav {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, project: &Project) {
        self.active = Some(ActiveProject {
            id: project.id.clone(),
            image_count: project.images.len(),
            index: 0,
        });
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active.as_ref().map(|a| a.id.as_str())
    }

    pub fn index(&self) -> Option<usize> {
        self.active.as_ref().map(|a| a.index)
    }

    /// Move by `direction` images with wraparound; `None` when closed or the
    /// project has no images.
    pub fn navigate(&mut self, direction: i32) -> Option<usize> {
        let active = self.active.as_mut()?;
        if active.image_count == 0 {
            return None;
        }
        active.index = wrap_index(active.index, direction, active.image_count);
        Some(active.index)
    }

    /// 1-based position and total, as shown in the viewer counter.
    pub fn counter(&self) -> Option<(usize, usize)> {
        self.active
            .as_ref()
            .map(|a| (a.index + 1, a.image_count))
    }

    /// Close and hand back the id of the project that was showing, for
    /// returning focus to its card.
    pub fn close(&mut self) -> Option<String> {
        self.active.take().map(|a| a.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_index_handles_both_directions() {
        assert_eq!(wrap_index(0, -1, 3), 2);
        assert_eq!(wrap_index(2, 1, 3), 0);
        assert_eq!(wrap_index(1, 7, 3), 2);
        assert_eq!(wrap_index(5, 1, 0), 0);
    }

    #[test]
    fn closed_nav_ignores_navigation() {
        let mut nav = ModalNav::new();
        assert_eq!(nav.navigate(1), None);
        assert_eq!(nav.close(), None);
    }
}
