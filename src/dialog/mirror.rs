/// Outcome of closing a settings dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome<T> {
    /// User confirmed; carries the final working-copy state.
    Accepted(T),
    /// User cancelled; carries the original value, untouched.
    Cancelled(T),
}

impl<T> DialogOutcome<T> {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    pub fn into_inner(self) -> T {
        match self {
            Self::Accepted(value) | Self::Cancelled(value) => value,
        }
    }
}

/// Pristine/working pair behind a modal settings dialog.
///
/// The working copy is the only mutable instance visible to controls;
/// the pristine value is never edited in place, only replaced when the
/// mirror commits. Commit and cancel consume the mirror, so each
/// dialog instance can close exactly once.
#[derive(Debug)]
pub struct WorkingCopyMirror<T: Clone> {
    pristine: T,
    working: T,
}

impl<T: Clone> WorkingCopyMirror<T> {
    /// Open a mirror over an initial value, copied internally.
    pub fn open(initial: T) -> Self {
        Self {
            pristine: initial.clone(),
            working: initial,
        }
    }

    pub fn pristine(&self) -> &T {
        &self.pristine
    }

    pub fn working(&self) -> &T {
        &self.working
    }

    pub fn working_mut(&mut self) -> &mut T {
        &mut self.working
    }

    /// Whether the working copy has diverged from the pristine value.
    pub fn is_dirty(&self) -> bool
    where
        T: PartialEq,
    {
        self.pristine != self.working
    }

    /// Commit: the working copy becomes the final result, replacing
    /// the pristine value. The only way the original is replaced.
    pub fn commit(self) -> T {
        self.working
    }

    /// Cancel: the pristine value comes back untouched.
    pub fn cancel(self) -> T {
        self.pristine
    }

    /// Combined close, for callers that carry the accept decision as data.
    pub fn close(self, accept: bool) -> DialogOutcome<T> {
        if accept {
            DialogOutcome::Accepted(self.working)
        } else {
            DialogOutcome::Cancelled(self.pristine)
        }
    }
}
