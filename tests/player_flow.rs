use houses_panel::overlay::{ModalId, ToastKind};
use houses_panel::state::{PlayerTab, ViewMode};
use houses_panel::view::{self, PlayerBody, UiAction};
use houses_panel::{HostMessage, Panel, PanelConfig, RecordingBridge, preview, statics};
use pretty_assertions::assert_eq;
use serde_json::json;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn open_preview() -> Result<Panel<RecordingBridge>> {
    let mut panel = Panel::new(PanelConfig::default(), RecordingBridge::default());
    panel.handle_message(preview::preview_message()?);
    Ok(panel)
}

#[test]
fn open_ui_splits_my_houses_and_available() -> Result<()> {
    let panel = open_preview()?;
    let state = panel.state();
    assert!(state.visible);
    assert_eq!(state.view, ViewMode::Player);

    let mine: Vec<&str> = view::my_houses(state).iter().map(|h| h.name.as_str()).collect();
    let available: Vec<&str> = view::available_houses(state)
        .iter()
        .map(|h| h.name.as_str())
        .collect();
    assert_eq!(mine, vec!["Casa Sunrise"]);
    assert_eq!(available, vec!["Villa Rockford"]);

    let header = view::header(state);
    assert_eq!(header.title, "João Silva · CID: ABC123");
    assert_eq!(header.stats, "🏠 1 casas · 3 total");
    assert_eq!(header.avatar, "J");
    assert!(!header.can_switch_admin);
    assert_eq!(
        view::footer_stats(state),
        "🏠 2 ocupadas · ✅ 1 disponíveis · 🔒 1 trancadas"
    );
    Ok(())
}

#[test]
fn admin_view_is_refused_without_permission() -> Result<()> {
    let mut panel = open_preview()?;
    panel.dispatch(UiAction::SwitchView(ViewMode::Admin));

    assert_eq!(panel.state().view, ViewMode::Player);
    let toast = panel.state().toast.last().ok_or("no toast")?;
    assert_eq!(toast.message, statics::PT_TOAST_NO_ADMIN);
    assert_eq!(toast.kind, ToastKind::Error);
    assert!(panel.bridge().is_empty());
    Ok(())
}

#[test]
fn buying_posts_intent_and_leaves_list_untouched() -> Result<()> {
    let mut panel = open_preview()?;
    panel.dispatch(UiAction::PlayerTab(PlayerTab::Available));
    panel.dispatch(UiAction::OpenBuyModal(2));

    let modal = view::modal_view(panel.state()).ok_or("buy dialog not open")?;
    assert_eq!(modal.title(), statics::PT_MODAL_BUY);
    assert_eq!(
        modal,
        view::ModalView::Buy {
            name: "Villa Rockford".to_string(),
            price: "R$ 850.000".to_string(),
            tax: "+ R$ 12.000/mês de taxa".to_string(),
        }
    );

    panel.dispatch(UiAction::ConfirmModal);
    assert!(!panel.state().modal.is_open(ModalId::Buy));

    let sent = panel.bridge().take();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].url, "https://houses/buyHouse");
    assert_eq!(sent[0].body_json(), json!({ "houseId": 2 }));

    // Nothing changes until the host pushes a new list.
    assert_eq!(view::available_houses(panel.state()).len(), 1);
    Ok(())
}

#[test]
fn owner_detail_exposes_member_management() -> Result<()> {
    let mut panel = open_preview()?;
    panel.dispatch(UiAction::OpenPlayerDetail(1));

    let PlayerBody::Detail(detail) = view::player_body(panel.state()) else {
        return Err("expected detail view".into());
    };
    assert_eq!(detail.name, "Casa Sunrise");
    assert_eq!(detail.info[1].value, statics::PT_YOUR_ROLE_OWNER);
    assert_eq!(detail.actions.len(), 3);
    assert_eq!(detail.actions[0].label, statics::PT_BTN_UNLOCK);

    // Self is not removable; the tenant is.
    assert!(detail.members[0].buttons.is_empty());
    assert_eq!(
        detail.members[1].buttons[0].action,
        UiAction::RemoveMember {
            house_id: 1,
            member_id: 2
        }
    );

    panel.dispatch(detail.actions[0].action);
    panel.dispatch(detail.members[1].buttons[0].action);
    let bodies: Vec<_> = panel.bridge().take().iter().map(|e| e.body_json()).collect();
    assert_eq!(
        bodies,
        vec![
            json!({ "houseId": 1 }),
            json!({ "houseId": 1, "memberId": 2 }),
        ]
    );
    Ok(())
}

#[test]
fn add_member_requires_both_fields() -> Result<()> {
    let mut panel = open_preview()?;
    panel.dispatch(UiAction::OpenPlayerDetail(1));
    panel.dispatch(UiAction::OpenAddMemberModal(1));

    panel.state_mut().member_form.name = "Ana".to_string();
    panel.dispatch(UiAction::ConfirmModal);
    assert!(panel.bridge().is_empty());
    assert!(panel.state().modal.is_open(ModalId::AddMember));
    assert_eq!(
        panel.state().toast.last().map(|t| t.message.as_str()),
        Some(statics::PT_ERR_MEMBER_FIELDS)
    );

    panel.state_mut().member_form.citizen_id = "  XYZ999 ".to_string();
    panel.dispatch(UiAction::ConfirmModal);
    assert!(!panel.state().modal.is_open(ModalId::AddMember));
    let sent = panel.bridge().take();
    assert_eq!(sent[0].action, "addMember");
    assert_eq!(
        sent[0].body_json(),
        json!({ "houseId": 1, "memberName": "Ana", "memberCitizenId": "XYZ999" })
    );
    Ok(())
}

#[test]
fn stale_selection_falls_back_to_list() -> Result<()> {
    let mut panel = open_preview()?;
    panel.dispatch(UiAction::OpenPlayerDetail(1));
    panel.dispatch(UiAction::OpenTaxModal(1));

    // House 1 disappears (e.g. sold); the update keeps houses 2 and 3.
    let HostMessage::OpenUi { houses, .. } = preview::preview_message()? else {
        return Err("expected openUI".into());
    };
    let remaining = houses.into_iter().filter(|h| h.id != 1).collect();
    panel.handle_message(HostMessage::UpdateHouses { houses: remaining });

    assert_eq!(panel.state().selected, None);
    assert_eq!(view::modal_view(panel.state()), None);
    assert_eq!(view::player_body(panel.state()), PlayerBody::MyHouses(Vec::new()));
    Ok(())
}

#[test]
fn switching_tabs_clears_selection() -> Result<()> {
    let mut panel = open_preview()?;
    panel.dispatch(UiAction::OpenPlayerDetail(1));
    assert_eq!(panel.state().selected, Some(1));
    panel.dispatch(UiAction::PlayerTab(PlayerTab::Available));
    assert_eq!(panel.state().selected, None);
    Ok(())
}

#[test]
fn closing_notifies_host() -> Result<()> {
    let mut panel = open_preview()?;
    panel.dispatch(UiAction::CloseUi);
    assert!(!panel.state().visible);
    let sent = panel.bridge().take();
    assert_eq!(sent[0].url, "https://houses/closeUI");
    assert_eq!(sent[0].body_json(), json!({}));
    Ok(())
}

#[test]
fn paying_tax_goes_through_dialog() -> Result<()> {
    let mut panel = open_preview()?;
    panel.dispatch(UiAction::OpenTaxModal(1));
    let modal = view::modal_view(panel.state()).ok_or("tax dialog not open")?;
    assert_eq!(
        modal,
        view::ModalView::PayTax {
            value: "R$ 5.000".to_string(),
            due: "Vencimento: 2025-12-31".to_string(),
        }
    );
    panel.dispatch(UiAction::ConfirmModal);
    assert_eq!(panel.bridge().actions(), vec!["payTax"]);
    assert_eq!(view::modal_view(panel.state()), None);

    // Rendering twice from the same state gives the same list.
    let first: Vec<i64> = view::my_houses(panel.state()).iter().map(|h| h.id).collect();
    let second: Vec<i64> = view::my_houses(panel.state()).iter().map(|h| h.id).collect();
    assert_eq!(first, second);
    Ok(())
}
