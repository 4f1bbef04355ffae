//! Bookkeeping for a group of listeners that share one handler: whichever
//! fires first runs it, and every handle in the group comes back so the
//! caller can detach them all.

pub struct FirstOf<H, F> {
    handles: Vec<H>,
    handler: Option<F>,
}

impl<H, F> FirstOf<H, F> {
    pub fn new(handler: F) -> Self {
        Self {
            handles: Vec::new(),
            handler: Some(handler),
        }
    }

    /// Track `handle` while the group is live. A spent group hands it
    /// straight back for detaching.
    pub fn register(&mut self, handle: H) -> Option<H> {
        if self.is_spent() {
            return Some(handle);
        }
        self.handles.push(handle);
        None
    }

    /// First call yields the handler plus every registered handle; later
    /// calls yield nothing.
    pub fn fire(&mut self) -> Option<(F, Vec<H>)> {
        let handler = self.handler.take()?;
        Some((handler, std::mem::take(&mut self.handles)))
    }

    pub fn is_spent(&self) -> bool {
        self.handler.is_none()
    }

    /// Handles still attached.
    pub fn live(&self) -> usize {
        self.handles.len()
    }
}
