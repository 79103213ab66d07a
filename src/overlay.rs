use crate::model::{HouseId, MemberRole};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub expires_at: Instant,
}

/// Single toast slot. A new toast replaces the current one and restarts the
/// auto-dismiss deadline; nothing is queued.
#[derive(Debug, Clone)]
pub struct ToastSlot {
    duration: Duration,
    current: Option<Toast>,
}

impl ToastSlot {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            current: None,
        }
    }

    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind, now: Instant) {
        self.current = Some(Toast {
            message: message.into(),
            kind,
            expires_at: now + self.duration,
        });
    }

    /// Drop the toast once its deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        if self.current.as_ref().is_some_and(|t| now >= t.expires_at) {
            self.current = None;
        }
    }

    /// The toast still on screen at `now`, if any. Does not mutate; call `tick` to expire.
    pub fn visible(&self, now: Instant) -> Option<&Toast> {
        self.current.as_ref().filter(|t| now < t.expires_at)
    }

    /// The last toast shown, regardless of its deadline.
    pub fn last(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.visible(now).map(|t| t.expires_at - now)
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalId {
    Buy,
    PayTax,
    AddMember,
    AdminAddMember,
    Edit,
    Delete,
}

/// An open confirmation dialog together with the house (and role) it targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    Buy { house_id: HouseId },
    PayTax { house_id: HouseId },
    AddMember { house_id: HouseId },
    AdminAddMember { house_id: HouseId, role: MemberRole },
    Edit { house_id: HouseId },
    Delete { house_id: HouseId },
}

impl Modal {
    pub fn id(&self) -> ModalId {
        match self {
            Modal::Buy { .. } => ModalId::Buy,
            Modal::PayTax { .. } => ModalId::PayTax,
            Modal::AddMember { .. } => ModalId::AddMember,
            Modal::AdminAddMember { .. } => ModalId::AdminAddMember,
            Modal::Edit { .. } => ModalId::Edit,
            Modal::Delete { .. } => ModalId::Delete,
        }
    }

    pub fn house_id(&self) -> HouseId {
        match *self {
            Modal::Buy { house_id }
            | Modal::PayTax { house_id }
            | Modal::AddMember { house_id }
            | Modal::AdminAddMember { house_id, .. }
            | Modal::Edit { house_id }
            | Modal::Delete { house_id } => house_id,
        }
    }
}

/// At most one dialog open at a time.
#[derive(Debug, Clone, Default)]
pub struct ModalSlot {
    current: Option<Modal>,
}

impl ModalSlot {
    pub fn open(&mut self, modal: Modal) {
        self.current = Some(modal);
    }

    /// Close the dialog if it is the one named by `id`.
    pub fn close(&mut self, id: ModalId) {
        if self.is_open(id) {
            self.current = None;
        }
    }

    pub fn close_any(&mut self) {
        self.current = None;
    }

    pub fn is_open(&self, id: ModalId) -> bool {
        self.current.is_some_and(|m| m.id() == id)
    }

    pub fn current(&self) -> Option<Modal> {
        self.current
    }

    pub fn current_mut(&mut self) -> Option<&mut Modal> {
        self.current.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_toast_replaces_and_restarts_deadline() {
        let t0 = Instant::now();
        let mut slot = ToastSlot::new(Duration::from_millis(3500));

        slot.show("first", ToastKind::Success, t0);
        let t1 = t0 + Duration::from_millis(3000);
        slot.show("second", ToastKind::Error, t1);

        // Past the first toast's deadline but inside the second's.
        let t2 = t0 + Duration::from_millis(4000);
        slot.tick(t2);
        let visible = slot.visible(t2).expect("second toast still visible");
        assert_eq!(visible.message, "second");
        assert_eq!(visible.kind, ToastKind::Error);
        assert_eq!(slot.remaining(t2), Some(Duration::from_millis(2500)));

        let t3 = t1 + Duration::from_millis(3500);
        assert!(slot.visible(t3).is_none());
        slot.tick(t3);
        assert!(slot.last().is_none());
    }

    #[test]
    fn modal_close_only_matches_its_own_id() {
        let mut slot = ModalSlot::default();
        slot.open(Modal::Buy { house_id: 2 });
        slot.close(ModalId::Delete);
        assert!(slot.is_open(ModalId::Buy));
        assert_eq!(slot.current().map(|m| m.house_id()), Some(2));
        slot.close(ModalId::Buy);
        assert!(slot.current().is_none());
    }
}
