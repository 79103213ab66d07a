//! One-way message passing with the host game client.
//!
//! Inbound: JSON envelopes keyed by `action` are decoded into [`HostMessage`].
//! Outbound: every user action becomes an [`Intent`] posted through a [`HostBridge`]
//! as fire-and-forget. The panel never awaits or inspects a reply; the only feedback
//! is the next house list the host pushes.

use crate::error::BridgeError;
use crate::lenient;
use crate::model::{EntryCoord, House, HouseId, MemberId, MemberRole, Player, Point3};
use crate::overlay::ToastKind;
use crate::statics;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::sync::mpsc::Sender;

/// Resolve the host resource name used in endpoint URLs. Falls back to the fixed
/// preview name when the host provides no lookup or the lookup yields nothing.
pub fn resolve_resource_name<F>(lookup: Option<F>) -> String
where
    F: FnOnce() -> Option<String>,
{
    lookup
        .and_then(|f| f())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| statics::DEFAULT_RESOURCE_NAME.to_string())
}

pub fn endpoint_url(resource: &str, action: &str) -> String {
    format!("https://{resource}/{action}")
}

/// House fields shared by the create and edit intents.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseDraft {
    pub name: String,
    pub address: String,
    pub price: f64,
    pub tax_value: f64,
    pub tax_due_date: String,
    pub entry_coord: EntryCoord,
    pub polyzone: Vec<Point3>,
}

/// An outbound action request. Serializes to exactly the payload the host expects
/// (the action name travels in the endpoint URL, not the body).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged, rename_all_fields = "camelCase")]
pub enum Intent {
    CloseUi {},
    ToggleLock {
        house_id: HouseId,
    },
    PayTax {
        house_id: HouseId,
    },
    AddMember {
        house_id: HouseId,
        member_name: String,
        member_citizen_id: String,
    },
    RemoveMember {
        house_id: HouseId,
        member_id: MemberId,
    },
    BuyHouse {
        house_id: HouseId,
    },
    AdminToggleLock {
        house_id: HouseId,
    },
    AdminAddMember {
        house_id: HouseId,
        member_name: String,
        member_citizen_id: String,
        member_role: MemberRole,
    },
    AdminSetOwner {
        house_id: HouseId,
        member_id: MemberId,
    },
    AdminRemoveMember {
        house_id: HouseId,
        member_id: MemberId,
    },
    AdminEditHouse {
        house_id: HouseId,
        #[serde(flatten)]
        draft: HouseDraft,
    },
    AdminDeleteHouse {
        house_id: HouseId,
    },
    AdminCreateHouse {
        #[serde(flatten)]
        draft: HouseDraft,
    },
}

impl Intent {
    pub fn action(&self) -> &'static str {
        match self {
            Intent::CloseUi {} => statics::ACT_CLOSE_UI,
            Intent::ToggleLock { .. } => statics::ACT_TOGGLE_LOCK,
            Intent::PayTax { .. } => statics::ACT_PAY_TAX,
            Intent::AddMember { .. } => statics::ACT_ADD_MEMBER,
            Intent::RemoveMember { .. } => statics::ACT_REMOVE_MEMBER,
            Intent::BuyHouse { .. } => statics::ACT_BUY_HOUSE,
            Intent::AdminToggleLock { .. } => statics::ACT_ADMIN_TOGGLE_LOCK,
            Intent::AdminAddMember { .. } => statics::ACT_ADMIN_ADD_MEMBER,
            Intent::AdminSetOwner { .. } => statics::ACT_ADMIN_SET_OWNER,
            Intent::AdminRemoveMember { .. } => statics::ACT_ADMIN_REMOVE_MEMBER,
            Intent::AdminEditHouse { .. } => statics::ACT_ADMIN_EDIT_HOUSE,
            Intent::AdminDeleteHouse { .. } => statics::ACT_ADMIN_DELETE_HOUSE,
            Intent::AdminCreateHouse { .. } => statics::ACT_ADMIN_CREATE_HOUSE,
        }
    }

    pub fn to_envelope(&self, resource: &str) -> Envelope {
        let action = self.action();
        let body = match serde_json::to_string(self) {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(action, error = %e, "failed to encode intent, sending empty body");
                "{}".to_string()
            }
        };
        Envelope {
            action,
            url: endpoint_url(resource, action),
            body,
        }
    }
}

/// A serialized intent, ready for whatever transport the host provides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub action: &'static str,
    pub url: String,
    pub body: String,
}

impl Envelope {
    pub fn body_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap_or(serde_json::Value::Null)
    }
}

/// Outbound transport to the host. Fire-and-forget: implementations must not block
/// and must swallow delivery failures.
pub trait HostBridge {
    fn post(&self, envelope: Envelope);
}

/// Hands envelopes to an embedding host over a channel. A dropped receiver is ignored.
pub struct ChannelBridge {
    tx: Sender<Envelope>,
}

impl ChannelBridge {
    pub fn new(tx: Sender<Envelope>) -> Self {
        Self { tx }
    }
}

impl HostBridge for ChannelBridge {
    fn post(&self, envelope: Envelope) {
        let action = envelope.action;
        if self.tx.send(envelope).is_err() {
            tracing::debug!(action, "host channel closed, intent dropped");
        }
    }
}

/// Standalone preview: there is no host, so intents are only logged.
#[derive(Debug, Default)]
pub struct LogBridge;

impl HostBridge for LogBridge {
    fn post(&self, envelope: Envelope) {
        tracing::info!(url = %envelope.url, body = %envelope.body, "intent");
    }
}

/// Keeps every posted envelope in memory. Used by tests and embedding harnesses.
#[derive(Debug, Default)]
pub struct RecordingBridge {
    sent: RefCell<Vec<Envelope>>,
}

impl RecordingBridge {
    pub fn take(&self) -> Vec<Envelope> {
        std::mem::take(&mut *self.sent.borrow_mut())
    }

    pub fn actions(&self) -> Vec<&'static str> {
        self.sent.borrow().iter().map(|e| e.action).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.sent.borrow().is_empty()
    }
}

impl HostBridge for RecordingBridge {
    fn post(&self, envelope: Envelope) {
        self.sent.borrow_mut().push(envelope);
    }
}

/// A decoded host → panel message.
#[derive(Debug, Clone, PartialEq)]
pub enum HostMessage {
    OpenUi {
        houses: Vec<House>,
        player: Player,
        is_admin: bool,
    },
    CloseUi,
    UpdateHouses {
        houses: Vec<House>,
    },
    Toast {
        message: String,
        kind: ToastKind,
    },
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OpenUiPayload {
    #[serde(default, deserialize_with = "lenient::list_field")]
    houses: Vec<House>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    player: Option<Player>,
    #[serde(default, deserialize_with = "lenient::bool_field")]
    is_admin: bool,
}

#[derive(Deserialize)]
struct UpdateHousesPayload {
    #[serde(default, deserialize_with = "lenient::list_field")]
    houses: Vec<House>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ToastPayload {
    #[serde(default, deserialize_with = "lenient::string_field")]
    message: String,
    #[serde(default, deserialize_with = "lenient::opt_string_field")]
    msg_type: Option<String>,
}

impl HostMessage {
    /// Decode a raw envelope. Envelopes without an `action`, or with an action this
    /// panel does not handle, are `Ok(None)`.
    pub fn parse(text: &str) -> Result<Option<Self>, BridgeError> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Option<Self>, BridgeError> {
        let Some(action) = value
            .get("action")
            .and_then(|a| a.as_str())
            .map(str::to_string)
        else {
            return Ok(None);
        };

        let payload_err = |source: serde_json::Error| BridgeError::Payload {
            action: action.clone(),
            source,
        };

        let msg = match action.as_str() {
            statics::MSG_OPEN_UI => {
                let p: OpenUiPayload = serde_json::from_value(value).map_err(payload_err)?;
                HostMessage::OpenUi {
                    houses: p.houses,
                    player: p.player.unwrap_or_default(),
                    is_admin: p.is_admin,
                }
            }
            statics::MSG_CLOSE_UI => HostMessage::CloseUi,
            statics::MSG_UPDATE_HOUSES => {
                let p: UpdateHousesPayload =
                    serde_json::from_value(value).map_err(payload_err)?;
                HostMessage::UpdateHouses { houses: p.houses }
            }
            statics::MSG_TOAST => {
                let p: ToastPayload = serde_json::from_value(value).map_err(payload_err)?;
                let kind = if p.msg_type.as_deref() == Some(statics::MSG_TYPE_ERROR) {
                    ToastKind::Error
                } else {
                    ToastKind::Success
                };
                HostMessage::Toast {
                    message: p.message,
                    kind,
                }
            }
            other => {
                tracing::debug!(action = other, "ignoring unknown host message");
                return Ok(None);
            }
        };
        Ok(Some(msg))
    }
}
