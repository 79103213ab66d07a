use houses_panel::model::Point3;
use houses_panel::overlay::{ModalId, ToastKind};
use houses_panel::state::{AdminTab, StatusFilter, ViewMode};
use houses_panel::view::{self, AdminBody, ModalView, OwnerBox, Tone, UiAction};
use houses_panel::{
    HostMessage, MemberRole, Panel, PanelConfig, RecordingBridge, preview, statics,
};
use pretty_assertions::assert_eq;
use serde_json::json;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn open_admin() -> Result<Panel<RecordingBridge>> {
    let HostMessage::OpenUi { houses, player, .. } = preview::preview_message()? else {
        return Err("expected openUI".into());
    };
    let mut panel = Panel::new(PanelConfig::default(), RecordingBridge::default());
    panel.handle_message(HostMessage::OpenUi {
        houses,
        player,
        is_admin: true,
    });
    Ok(panel)
}

fn listed_names(panel: &Panel<RecordingBridge>) -> Vec<String> {
    match view::admin_body(panel.state()) {
        AdminBody::List(cards) => cards.into_iter().map(|c| c.name).collect(),
        other => panic!("expected list, got {other:?}"),
    }
}

#[test]
fn admins_land_on_admin_view_with_stats() -> Result<()> {
    let panel = open_admin()?;
    assert_eq!(panel.state().view, ViewMode::Admin);
    let stats = view::admin_stats(panel.state());
    assert_eq!((stats.total, stats.available, stats.occupied), (3, 1, 2));
    assert_eq!(view::header(panel.state()).title, statics::PT_ADMIN_PANEL_TITLE);
    Ok(())
}

#[test]
fn filter_and_search_combine_and_are_idempotent() -> Result<()> {
    let mut panel = open_admin()?;
    panel.dispatch(UiAction::Filter(StatusFilter::Occupied));
    let once = listed_names(&panel);
    panel.dispatch(UiAction::Filter(StatusFilter::Occupied));
    assert_eq!(listed_names(&panel), once);
    assert_eq!(once, vec!["Casa Sunrise", "Chalé Del Perro"]);

    panel.set_search("DEL PERRO");
    assert_eq!(listed_names(&panel), vec!["Chalé Del Perro"]);

    panel.dispatch(UiAction::Filter(StatusFilter::Available));
    assert!(listed_names(&panel).is_empty());

    panel.dispatch(UiAction::Filter(StatusFilter::All));
    panel.set_search("rockford");
    assert_eq!(listed_names(&panel), vec!["Villa Rockford"]);
    Ok(())
}

#[test]
fn detail_without_owner_offers_set_owner() -> Result<()> {
    let mut panel = open_admin()?;
    panel.dispatch(UiAction::OpenAdminDetail(2));
    let AdminBody::Detail(detail) = view::admin_body(panel.state()) else {
        return Err("expected detail".into());
    };
    let OwnerBox::NoOwner { set_owner } = &detail.owner else {
        return Err("expected no-owner box".into());
    };
    assert_eq!(
        set_owner.action,
        UiAction::OpenAdminAddMember {
            house_id: 2,
            role: MemberRole::Owner
        }
    );
    assert!(detail.members.is_empty());
    assert!(detail.empty_members_cta.is_some());
    assert_eq!(detail.polyzone.len(), 4);
    assert_eq!(detail.polyzone[0].y, "Y: -998.3");
    Ok(())
}

#[test]
fn owner_role_warns_about_demotion() -> Result<()> {
    let mut panel = open_admin()?;
    panel.dispatch(UiAction::OpenAdminAddMember {
        house_id: 3,
        role: MemberRole::Owner,
    });
    let Some(ModalView::AdminAddMember { title, warning, .. }) = view::modal_view(panel.state())
    else {
        return Err("admin add dialog not open".into());
    };
    assert_eq!(title, statics::PT_MODAL_ADMIN_SET_OWNER);
    assert_eq!(warning.tone, Tone::Amber);
    assert!(warning.text.contains("Carlos Oliveira"));

    panel.dispatch(UiAction::SelectAdminRole(MemberRole::Tenant));
    let Some(ModalView::AdminAddMember { warning, .. }) = view::modal_view(panel.state()) else {
        return Err("admin add dialog closed".into());
    };
    assert_eq!(warning.tone, Tone::Blue);

    panel.dispatch(UiAction::SelectAdminRole(MemberRole::Owner));
    panel.state_mut().member_form.name = "Bia".to_string();
    panel.state_mut().member_form.citizen_id = "BIA1".to_string();
    panel.dispatch(UiAction::ConfirmModal);
    let sent = panel.bridge().take();
    assert_eq!(
        sent[0].body_json(),
        json!({
            "houseId": 3,
            "memberName": "Bia",
            "memberCitizenId": "BIA1",
            "memberRole": "owner",
        })
    );
    Ok(())
}

#[test]
fn create_form_enforces_minimum_points_and_required_fields() -> Result<()> {
    let mut panel = open_admin()?;
    panel.dispatch(UiAction::AdminTab(AdminTab::Create));
    assert_eq!(view::admin_body(panel.state()), AdminBody::Create);
    assert_eq!(panel.state().create_form.poly.len(), 4);

    panel.dispatch(UiAction::CreateRemovePoint);
    assert_eq!(panel.state().create_form.poly.len(), 3);
    panel.dispatch(UiAction::CreateRemovePoint);
    assert_eq!(panel.state().create_form.poly.len(), 3);
    assert_eq!(
        panel.state().toast.last().map(|t| t.message.as_str()),
        Some("Mínimo 3 pontos!")
    );

    panel.dispatch(UiAction::SubmitCreate);
    assert!(panel.bridge().is_empty());
    assert_eq!(
        panel.state().toast.last().map(|t| t.message.as_str()),
        Some(statics::PT_ERR_CREATE_FIELDS)
    );

    {
        let form = &mut panel.state_mut().create_form;
        form.name = "Casa Nova".to_string();
        form.address = "Rua 1".to_string();
        form.price = "100000".to_string();
        form.tax_value = "2000".to_string();
        form.tax_due_date = "2026-01-01".to_string();
        form.entry_coord = "1, 2, 3".to_string();
        form.heading = "90".to_string();
        form.poly.points_mut()[0] = Point3::new(10.0, 20.0, 30.0);
    }
    panel.dispatch(UiAction::SubmitCreate);

    let sent = panel.bridge().take();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].url, "https://houses/adminCreateHouse");
    assert_eq!(
        sent[0].body_json(),
        json!({
            "name": "Casa Nova",
            "address": "Rua 1",
            "price": 100000.0,
            "taxValue": 2000.0,
            "taxDueDate": "2026-01-01",
            "entryCoord": { "x": 1.0, "y": 2.0, "z": 3.0, "heading": 90.0 },
            "polyzone": [
                { "x": 10.0, "y": 20.0, "z": 30.0 },
                { "x": 0.0, "y": 0.0, "z": 0.0 },
                { "x": 0.0, "y": 0.0, "z": 0.0 },
            ],
        })
    );
    let toast = panel.state().toast.last().ok_or("no toast")?;
    assert_eq!(toast.kind, ToastKind::Info);
    assert_eq!(toast.message, statics::PT_TOAST_SENDING);
    assert_eq!(panel.state().admin_tab, AdminTab::Houses);

    // Reopening the tab starts from scratch.
    panel.dispatch(UiAction::AdminTab(AdminTab::Create));
    assert_eq!(panel.state().create_form.name, "");
    assert_eq!(panel.state().create_form.poly.len(), 4);
    Ok(())
}

#[test]
fn edit_works_on_a_detached_copy() -> Result<()> {
    let mut panel = open_admin()?;
    panel.dispatch(UiAction::OpenEditModal(1));
    assert_eq!(panel.state().edit_form.entry_coord, "1239.5, -2350.6, 45.2");
    assert_eq!(panel.state().edit_form.heading, "180");

    panel.dispatch(UiAction::EditAddPoint);
    panel.state_mut().edit_form.name = "Casa Sunset".to_string();
    let house = panel.state().house(1).ok_or("house 1 missing")?;
    assert_eq!(house.polyzone.len(), 4);
    assert_eq!(house.name, "Casa Sunrise");

    panel.dispatch(UiAction::ConfirmModal);
    assert!(!panel.state().modal.is_open(ModalId::Edit));
    let body = panel.bridge().take()[0].body_json();
    assert_eq!(body["houseId"], json!(1));
    assert_eq!(body["name"], json!("Casa Sunset"));
    assert_eq!(body["polyzone"].as_array().map(Vec::len), Some(5));
    assert_eq!(body["entryCoord"]["heading"], json!(180.0));
    Ok(())
}

#[test]
fn edit_remove_point_stops_at_minimum() -> Result<()> {
    let mut panel = open_admin()?;
    let HostMessage::OpenUi { mut houses, .. } = preview::preview_message()? else {
        return Err("expected openUI".into());
    };
    houses[0].polyzone.truncate(3);
    panel.handle_message(HostMessage::UpdateHouses { houses });

    panel.dispatch(UiAction::OpenEditModal(1));
    assert_eq!(panel.state().edit_form.poly.len(), 3);
    panel.dispatch(UiAction::EditRemovePoint);
    assert_eq!(panel.state().edit_form.poly.len(), 3);
    let toast = panel.state().toast.last().ok_or("no toast")?;
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.message, "Mínimo 3 pontos!");
    assert!(panel.state().modal.is_open(ModalId::Edit));
    assert!(panel.bridge().is_empty());
    Ok(())
}

#[test]
fn edit_rejects_blank_address() -> Result<()> {
    let mut panel = open_admin()?;
    panel.dispatch(UiAction::OpenEditModal(3));
    panel.state_mut().edit_form.address.clear();
    panel.dispatch(UiAction::ConfirmModal);
    assert!(panel.bridge().is_empty());
    assert!(panel.state().modal.is_open(ModalId::Edit));
    assert_eq!(
        panel.state().toast.last().map(|t| t.message.as_str()),
        Some(statics::PT_ERR_EDIT_FIELDS)
    );
    Ok(())
}

#[test]
fn deleting_the_selected_house_returns_to_list() -> Result<()> {
    let mut panel = open_admin()?;
    panel.dispatch(UiAction::OpenAdminDetail(2));
    panel.dispatch(UiAction::OpenDeleteModal(2));
    panel.dispatch(UiAction::ConfirmModal);

    assert_eq!(panel.state().selected, None);
    assert_eq!(panel.bridge().actions(), vec!["adminDeleteHouse"]);
    Ok(())
}

#[test]
fn member_buttons_promote_and_remove() -> Result<()> {
    let mut panel = open_admin()?;
    panel.dispatch(UiAction::OpenAdminDetail(1));
    let AdminBody::Detail(detail) = view::admin_body(panel.state()) else {
        return Err("expected detail".into());
    };
    // Owner row: remove only. Tenant row: promote + remove.
    assert_eq!(detail.members[0].buttons.len(), 1);
    assert_eq!(detail.members[1].buttons.len(), 2);
    for row in &detail.members {
        for b in &row.buttons {
            panel.dispatch(b.action);
        }
    }
    assert_eq!(
        panel.bridge().actions(),
        vec!["adminRemoveMember", "adminSetOwner", "adminRemoveMember"]
    );
    Ok(())
}

#[test]
fn cancel_closes_dialog_without_posting() -> Result<()> {
    let mut panel = open_admin()?;
    panel.dispatch(UiAction::OpenDeleteModal(3));
    panel.dispatch(UiAction::CancelModal);
    assert_eq!(view::modal_view(panel.state()), None);

    panel.dispatch(UiAction::AdminToggleLock(3));
    let sent = panel.bridge().take();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].url, "https://houses/adminToggleLock");
    assert_eq!(sent[0].body_json(), json!({ "houseId": 3 }));
    Ok(())
}
