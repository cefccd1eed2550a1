use tracing::trace;

use crate::dialog::derive::DerivationResolver;
use crate::dialog::mirror::WorkingCopyMirror;

/// A change notification raised by a control, carrying the edited value.
pub trait FieldEdit<A> {
    /// Write the carried value into the aggregate.
    fn apply(&self, values: &mut A);
}

/// Capability surface the sync engine needs from a dialog's controls.
///
/// A surface typically covers several field groups (serial, socket,
/// general). The engine depends only on this trait, never on concrete
/// widget types.
pub trait ControlSurface {
    type Aggregate: Clone;
    type View;
    type Edit: FieldEdit<Self::Aggregate>;

    /// Push working-copy values and the derived view into the controls.
    ///
    /// Returns every change notification the controls raised while
    /// being written. Implementations must raise a notification only
    /// for fields whose displayed value actually changed, so pushing
    /// identical values twice raises nothing the second time.
    fn write(&mut self, values: &Self::Aggregate, view: &Self::View) -> Vec<Self::Edit>;
}

/// Bidirectional sync between controls and the working copy, guarded
/// against reentrant feedback.
///
/// While the engine is writing controls, change notifications caused
/// by its own writes are dropped, not queued: the push that caused
/// them is already authoritative for that cycle, so echoing it back
/// would be redundant and could loop.
#[derive(Debug, Default)]
pub struct ControlSyncEngine {
    rendering: bool,
}

impl ControlSyncEngine {
    pub fn new() -> Self {
        Self { rendering: false }
    }

    pub fn is_rendering(&self) -> bool {
        self.rendering
    }

    /// Entry point for a change notification from the controls.
    ///
    /// A user-originated edit (rendering flag clear) writes the working
    /// copy and then triggers a full re-render of derived state, never
    /// an incremental diff, so stale enablement cannot outlive any
    /// primary-field change.
    pub fn field_changed<R, S>(
        &mut self,
        edit: S::Edit,
        mirror: &mut WorkingCopyMirror<S::Aggregate>,
        resolver: &R,
        surface: &mut S,
    ) where
        R: DerivationResolver<Aggregate = S::Aggregate, View = S::View>,
        S: ControlSurface,
    {
        if self.rendering {
            trace!("change notification dropped during render");
            return;
        }

        edit.apply(mirror.working_mut());
        self.render(mirror, resolver, surface);
    }

    /// Full re-render of the control surface from the working copy.
    ///
    /// Notifications the surface raises while being written are fed
    /// back through the rendering guard and dropped.
    pub fn render<R, S>(
        &mut self,
        mirror: &mut WorkingCopyMirror<S::Aggregate>,
        resolver: &R,
        surface: &mut S,
    ) where
        R: DerivationResolver<Aggregate = S::Aggregate, View = S::View>,
        S: ControlSurface,
    {
        let view = resolver.derive(mirror.working());

        self.rendering = true;
        let echoed = surface.write(mirror.working(), &view);
        for edit in echoed {
            self.field_changed(edit, mirror, resolver, surface);
        }
        self.rendering = false;
    }
}
