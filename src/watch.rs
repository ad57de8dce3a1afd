/// Lifecycle of an element watched for viewport intersection.
///
/// `Triggered` is terminal: an element that has fired once is never watched again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WatchState {
    Unobserved,
    Watching,
    Triggered,
}

impl WatchState {
    pub fn observe(self) -> WatchState {
        match self {
            WatchState::Unobserved => WatchState::Watching,
            other => other,
        }
    }

    /// Returns the next state and whether this report is the one that fires.
    pub fn intersect(self, is_intersecting: bool) -> (WatchState, bool) {
        match self {
            WatchState::Watching if is_intersecting => (WatchState::Triggered, true),
            other => (other, false),
        }
    }
}

/// Targets worth handing to an intersection observer. Nothing is watched when
/// the runtime has no `IntersectionObserver`, and no fallback loading happens.
pub fn observable<E>(targets: Vec<E>, intersection_supported: bool) -> Option<Vec<E>> {
    if !intersection_supported || targets.is_empty() {
        return None;
    }
    Some(targets)
}

/// Per-element one-shot watches for a single intersection feature.
#[derive(Debug)]
pub struct WatchSet<E> {
    entries: Vec<(E, WatchState)>,
}

impl<E> Default for WatchSet<E> {
    fn default() -> Self {
        WatchSet { entries: Vec::new() }
    }
}

impl<E: PartialEq> WatchSet<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts watching `element`. Returns false if it was already watched or has fired.
    pub fn observe(&mut self, element: E) -> bool {
        match self.entries.iter_mut().find(|(el, _)| *el == element) {
            Some((_, state)) => {
                let before = *state;
                *state = before.observe();
                before == WatchState::Unobserved
            }
            None => {
                self.entries.push((element, WatchState::Watching));
                true
            }
        }
    }

    /// Feeds one intersection report. `react` runs only on the first
    /// intersecting report for a watched element.
    pub fn handle(&mut self, target: &E, is_intersecting: bool, react: impl FnOnce(&E)) -> bool {
        let Some((_, state)) = self.entries.iter_mut().find(|(el, _)| el == target) else {
            return false;
        };
        let (next, fired) = state.intersect(is_intersecting);
        *state = next;
        if fired {
            react(target);
        }
        fired
    }

    #[cfg(test)]
    pub fn state(&self, target: &E) -> WatchState {
        self.entries
            .iter()
            .find(|(el, _)| el == target)
            .map(|(_, state)| *state)
            .unwrap_or(WatchState::Unobserved)
    }

    #[cfg(test)]
    pub fn watching(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, state)| *state == WatchState::Watching)
            .count()
    }
}
