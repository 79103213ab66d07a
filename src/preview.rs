//! Standalone preview: a mock `openUI` envelope, embedded or read from disk.

use crate::bridge::HostMessage;
use anyhow::Context;
use std::fs;
use std::path::Path;

/// The bundled three-house dataset (player "João Silva", not an admin).
pub const PREVIEW_JSON5: &str = include_str!("../demos/preview.json5");

/// Decode a JSON5 host envelope. Anything the host could send works here, though
/// only `openUI` makes sense as the first message.
pub fn parse_preview(text: &str) -> anyhow::Result<HostMessage> {
    let value: serde_json::Value = json5::from_str(text).context("parsing JSON5")?;
    HostMessage::from_value(value)
        .context("decoding host envelope")?
        .context("envelope has no recognized action")
}

pub fn preview_message() -> anyhow::Result<HostMessage> {
    parse_preview(PREVIEW_JSON5).context("embedded preview dataset")
}

pub fn load_preview_path(path: &Path) -> anyhow::Result<HostMessage> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {path:?}"))?;
    let msg = parse_preview(&text).with_context(|| format!("loading preview {path:?}"))?;
    tracing::info!(path = %path.display(), "loaded preview dataset");
    Ok(msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{HouseStatus, MemberRole};

    #[test]
    fn embedded_dataset_is_an_open_ui() {
        let HostMessage::OpenUi {
            houses,
            player,
            is_admin,
        } = preview_message().unwrap()
        else {
            panic!("expected openUI");
        };
        assert!(!is_admin);
        assert_eq!(player.citizen_id, "ABC123");
        assert_eq!(houses.len(), 3);
        assert_eq!(houses[1].status, HouseStatus::Available);
        assert_eq!(houses[1].owner_id, None);
        assert_eq!(houses[0].members[1].role, MemberRole::Tenant);
        assert_eq!(houses[2].entry_coord.heading, 90.0);
    }

    #[test]
    fn envelope_without_action_is_rejected() {
        let err = parse_preview("{ houses: [] }").unwrap_err();
        assert!(format!("{err:#}").contains("no recognized action"));
    }
}
