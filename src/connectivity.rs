//! Connectivity change notifications
//
// A single component owns the listener slot rather than a process-wide
// static, so connectivity updates are injected where they are needed. The
// `&mut self` receivers tie registration and delivery to one logical thread;
// callers wanting delivery on the UI thread keep the notifier there.

/// The platform seam for network status queries.
pub trait NetworkState {
    /// Whether the active network is connected or in the process of
    /// connecting. Implementations answer `false` when no active network
    /// exists rather than failing.
    fn is_connected_or_connecting(&self) -> bool;
}

/// Delivers connectivity transitions to at most one registered listener.
pub struct ConnectivityNotifier<S> {
    state: S,
    listener: Option<Box<dyn FnMut(bool)>>,
}

impl<S: NetworkState> ConnectivityNotifier<S> {
    pub fn new(state: S) -> Self {
        Self {
            state,
            listener: None,
        }
    }

    /// Register the listener, replacing any previous one. There is no
    /// multicast: the previous listener stops receiving notifications.
    pub fn set_listener(&mut self, listener: impl FnMut(bool) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    /// Handle a platform connectivity-change event: query the current state
    /// and deliver it synchronously. Events with no listener registered are
    /// dropped, not buffered.
    pub fn network_changed(&mut self) {
        let connected = self.state.is_connected_or_connecting();
        if let Some(listener) = self.listener.as_mut() {
            listener(connected);
        } else {
            tracing::trace!("Connectivity change to {connected} with no listener registered");
        }
    }
}
