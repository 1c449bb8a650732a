//! Drag Session State Machine
//!
//! Framework-free: which row is dragged, which row shows the drop indicator,
//! and where a drop lands.

/// Where the dragged row lands relative to the drop target
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    Before,
    After,
}

/// Rows dragged downward land after the target, upward before it
pub fn placement(from: usize, to: usize) -> Placement {
    if from < to {
        Placement::After
    } else {
        Placement::Before
    }
}

/// Idle when `dragged` is `None`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragSession<K> {
    dragged: Option<K>,
    indicator: Option<K>,
}

impl<K> Default for DragSession<K> {
    fn default() -> Self {
        Self {
            dragged: None,
            indicator: None,
        }
    }
}

impl<K: Copy + PartialEq> DragSession<K> {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragged.is_some()
    }

    pub fn dragged(&self) -> Option<K> {
        self.dragged
    }

    /// Row currently marked as drop target
    pub fn indicator(&self) -> Option<K> {
        self.indicator
    }

    /// Begin dragging `key`. Refused while another drag is active.
    pub fn start(&mut self, key: K) -> bool {
        if self.dragged.is_some() {
            return false;
        }
        self.dragged = Some(key);
        self.indicator = None;
        true
    }

    /// Pointer entered `key`: it takes the indicator from any other row.
    /// Returns whether the state changed.
    pub fn enter(&mut self, key: K) -> bool {
        match self.dragged {
            Some(dragged) if dragged != key && self.indicator != Some(key) => {
                self.indicator = Some(key);
                true
            }
            _ => false,
        }
    }

    /// Pointer left `key`. Returns whether the state changed.
    pub fn leave(&mut self, key: K) -> bool {
        if self.indicator == Some(key) {
            self.indicator = None;
            true
        } else {
            false
        }
    }

    /// Finish the drag on `target`. Yields `(dragged, target)` when the drop
    /// should reorder; the session is idle afterwards either way.
    pub fn drop_on(&mut self, target: Option<K>) -> Option<(K, K)> {
        let dragged = self.dragged.take();
        self.indicator = None;
        match (dragged, target) {
            (Some(dragged), Some(target)) if dragged != target => Some((dragged, target)),
            _ => None,
        }
    }

    /// Drag cancelled or finished: clear everything
    pub fn end(&mut self) {
        self.dragged = None;
        self.indicator = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement() {
        assert_eq!(placement(0, 2), Placement::After);
        assert_eq!(placement(3, 1), Placement::Before);
    }

    #[test]
    fn test_single_session() {
        let mut session = DragSession::idle();
        assert!(session.start(1u32));
        assert!(!session.start(2));
        assert_eq!(session.dragged(), Some(1));
    }

    #[test]
    fn test_latest_enter_wins_indicator() {
        let mut session = DragSession::idle();
        session.start(1u32);
        assert!(session.enter(2));
        assert!(session.enter(3));
        assert!(!session.enter(3));
        assert_eq!(session.indicator(), Some(3));
        // Leaving a row that lost the indicator changes nothing
        assert!(!session.leave(2));
        assert!(session.leave(3));
        assert_eq!(session.indicator(), None);
    }

    #[test]
    fn test_dragged_row_never_marked() {
        let mut session = DragSession::idle();
        assert!(!session.enter(1u32));
        session.start(1);
        assert!(!session.enter(1));
        assert_eq!(session.indicator(), None);
    }

    #[test]
    fn test_drop_resolution() {
        let mut session = DragSession::idle();
        session.start(1u32);
        session.enter(3);
        assert_eq!(session.drop_on(Some(3)), Some((1, 3)));
        assert!(!session.is_dragging());
        assert_eq!(session.indicator(), None);

        session.start(1);
        assert_eq!(session.drop_on(Some(1)), None);
        assert!(!session.is_dragging());

        session.start(1);
        assert_eq!(session.drop_on(None), None);

        assert_eq!(DragSession::<u32>::idle().drop_on(Some(4)), None);
    }

    #[test]
    fn test_cancel_clears_indicator() {
        let mut session = DragSession::idle();
        session.start(1u32);
        session.enter(2);
        session.end();
        assert_eq!(session, DragSession::idle());
    }
}
