//! Tri-state load flag held per view concern, plus the sequence guard that
//! keeps a superseded load from landing over a newer one.

/// Progress of a single asynchronous load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Loadable<T> {
    /// Request in flight.
    Loading,
    /// Data available.
    Ready(T),
    /// Load failed with a user-facing message.
    Failed(String),
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> Loadable<T> {
    /// `Ready` when `value` is present, otherwise `Failed(message)`.
    #[must_use]
    pub fn from_option(value: Option<T>, message: &str) -> Self {
        value.map_or_else(|| Self::Failed(message.to_string()), Self::Ready)
    }

    /// Whether the load is still in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Loaded data, if any.
    #[must_use]
    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// Failure message, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Handle for one started load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadToken(u64);

/// Latest-wins counter for loads keyed by route parameters.
///
/// A view calls [`LoadSequence::begin`] whenever its parameters change and
/// only applies a result whose token is still current. [`LoadSequence::cancel`]
/// invalidates everything in flight, e.g. on unmount.
#[derive(Debug, Default)]
pub struct LoadSequence {
    latest: u64,
}

impl LoadSequence {
    /// Start a load, superseding any earlier one.
    pub fn begin(&mut self) -> LoadToken {
        self.latest += 1;
        LoadToken(self.latest)
    }

    /// Invalidate every load started so far.
    pub fn cancel(&mut self) {
        self.latest += 1;
    }

    /// Whether `token` belongs to the most recent load.
    #[must_use]
    pub const fn is_current(&self, token: LoadToken) -> bool {
        token.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_loading() {
        let state: Loadable<u8> = Loadable::default();
        assert!(state.is_loading());
        assert!(state.ready().is_none());
    }

    #[test]
    fn from_option_maps_absent_to_failure() {
        assert_eq!(Loadable::from_option(Some(3), "gone"), Loadable::Ready(3));
        let missing: Loadable<u8> = Loadable::from_option(None, "gone");
        assert_eq!(missing.error(), Some("gone"));
    }

    #[test]
    fn newer_load_supersedes_older_one() {
        let mut loads = LoadSequence::default();
        let first = loads.begin();
        let second = loads.begin();
        assert!(!loads.is_current(first));
        assert!(loads.is_current(second));
    }

    #[test]
    fn cancel_invalidates_in_flight_load() {
        let mut loads = LoadSequence::default();
        let token = loads.begin();
        loads.cancel();
        assert!(!loads.is_current(token));
        let next = loads.begin();
        assert!(loads.is_current(next));
    }
}
