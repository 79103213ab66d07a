use crate::bridge::{HostBridge, HostMessage, Intent};
use crate::config::PanelConfig;
use crate::error::ValidationError;
use crate::forms::HouseForm;
use crate::model::{House, HouseId, MemberId, MemberRole, Player};
use crate::overlay::{Modal, ModalId, ToastKind};
use crate::state::{AdminTab, PanelState, PlayerTab, StatusFilter, ViewMode};
use crate::statics;
use crate::view::UiAction;
use std::time::Instant;

/// The panel controller: owns the view state and the outbound bridge.
///
/// Every action is optimistic in the sense that dialogs close as soon as the intent
/// is posted, but nothing in `state.houses` changes until the host pushes a new list.
pub struct Panel<B: HostBridge> {
    config: PanelConfig,
    bridge: B,
    state: PanelState,
}

impl<B: HostBridge> Panel<B> {
    pub fn new(config: PanelConfig, bridge: B) -> Self {
        let state = PanelState::new(&config);
        Self {
            config,
            bridge,
            state,
        }
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    /// Direct access for the GUI's text-entry widgets.
    pub fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    fn post(&self, intent: Intent) {
        tracing::debug!(action = intent.action(), "posting intent");
        self.bridge
            .post(intent.to_envelope(&self.config.resource_name));
    }

    pub fn toast(&mut self, message: impl Into<String>, kind: ToastKind) {
        self.state.toast.show(message, kind, Instant::now());
    }

    fn toast_error(&mut self, err: ValidationError) {
        tracing::debug!(%err, "validation failed");
        self.toast(err.to_string(), ToastKind::Error);
    }

    /// Expire the toast if its deadline passed.
    pub fn tick(&mut self, now: Instant) {
        self.state.toast.tick(now);
    }

    // Inbound

    /// Decode and apply a raw host envelope. Malformed input is logged and dropped.
    pub fn receive(&mut self, raw: &str) {
        match HostMessage::parse(raw) {
            Ok(Some(msg)) => self.handle_message(msg),
            Ok(None) => {}
            Err(e) => tracing::warn!(error = %e, "dropping host message"),
        }
    }

    pub fn handle_message(&mut self, msg: HostMessage) {
        match msg {
            HostMessage::OpenUi {
                houses,
                player,
                is_admin,
            } => self.open_app(houses, player, is_admin),
            HostMessage::CloseUi => {
                tracing::debug!("host closed the panel");
                self.state.visible = false;
            }
            HostMessage::UpdateHouses { houses } => {
                tracing::debug!(count = houses.len(), "house list replaced");
                self.state.replace_houses(houses);
            }
            HostMessage::Toast { message, kind } => self.toast(message, kind),
        }
    }

    fn open_app(&mut self, houses: Vec<House>, player: Player, is_admin: bool) {
        tracing::info!(
            houses = houses.len(),
            citizen_id = %player.citizen_id,
            is_admin,
            "opening panel"
        );
        self.state.houses = houses;
        self.state.player = player;
        self.state.is_admin = is_admin;
        self.state.selected = None;
        self.state.modal.close_any();
        self.state.view = if is_admin {
            ViewMode::Admin
        } else {
            ViewMode::Player
        };
        self.state.visible = true;
    }

    // Dispatch

    pub fn dispatch(&mut self, action: UiAction) {
        match action {
            UiAction::CloseUi => self.close_ui(),
            UiAction::SwitchView(view) => self.switch_view(view),
            UiAction::PlayerTab(tab) => self.set_player_tab(tab),
            UiAction::AdminTab(tab) => self.set_admin_tab(tab),
            UiAction::Filter(filter) => self.set_filter(filter),
            UiAction::OpenPlayerDetail(id) | UiAction::OpenAdminDetail(id) => self.select(id),
            UiAction::BackToList => self.back_to_list(),
            UiAction::ToggleLock(id) => self.toggle_lock(id),
            UiAction::OpenTaxModal(id) => self.open_modal(Modal::PayTax { house_id: id }),
            UiAction::OpenAddMemberModal(id) => self.open_add_member_modal(id),
            UiAction::RemoveMember {
                house_id,
                member_id,
            } => self.remove_member(house_id, member_id),
            UiAction::OpenBuyModal(id) => self.open_modal(Modal::Buy { house_id: id }),
            UiAction::AdminToggleLock(id) => self.admin_toggle_lock(id),
            UiAction::OpenAdminAddMember { house_id, role } => {
                self.open_admin_add_member_modal(house_id, role)
            }
            UiAction::SelectAdminRole(role) => self.select_admin_role(role),
            UiAction::AdminSetOwner {
                house_id,
                member_id,
            } => self.admin_set_owner(house_id, member_id),
            UiAction::AdminRemoveMember {
                house_id,
                member_id,
            } => self.admin_remove_member(house_id, member_id),
            UiAction::OpenEditModal(id) => self.open_edit_modal(id),
            UiAction::OpenDeleteModal(id) => self.open_modal(Modal::Delete { house_id: id }),
            UiAction::CreateAddPoint => self.state.create_form.poly.add_point(),
            UiAction::CreateRemovePoint => {
                if let Err(e) = self.state.create_form.poly.remove_point() {
                    self.toast_error(e);
                }
            }
            UiAction::EditAddPoint => self.state.edit_form.poly.add_point(),
            UiAction::EditRemovePoint => {
                if let Err(e) = self.state.edit_form.poly.remove_point() {
                    self.toast_error(e);
                }
            }
            UiAction::SubmitCreate => self.create_house(),
            UiAction::ConfirmModal => self.confirm_modal(),
            UiAction::CancelModal => self.state.modal.close_any(),
        }
    }

    // Navigation

    /// Hide the panel locally and tell the host to release focus.
    pub fn close_ui(&mut self) {
        self.state.visible = false;
        self.state.modal.close_any();
        self.post(Intent::CloseUi {});
    }

    /// Player/admin switch. Admin is refused (with an error toast) without the flag.
    pub fn switch_view(&mut self, view: ViewMode) {
        if view == ViewMode::Admin && !self.state.is_admin {
            self.toast(statics::PT_TOAST_NO_ADMIN, ToastKind::Error);
            return;
        }
        self.state.view = view;
        self.state.selected = None;
    }

    pub fn set_player_tab(&mut self, tab: PlayerTab) {
        self.state.player_tab = tab;
        self.state.selected = None;
    }

    /// Opening the create tab always starts from a blank form.
    pub fn set_admin_tab(&mut self, tab: AdminTab) {
        self.state.admin_tab = tab;
        if tab == AdminTab::Create {
            self.state.create_form =
                HouseForm::blank(self.config.create_form_points, self.config.min_poly_points);
        }
    }

    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.state.filter = filter;
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.state.search = query.into();
    }

    /// Show the detail view for a house (player or admin, depending on the mode).
    pub fn select(&mut self, house_id: HouseId) {
        if self.state.house(house_id).is_some() {
            self.state.selected = Some(house_id);
        }
    }

    pub fn back_to_list(&mut self) {
        self.state.selected = None;
    }

    // Modals

    fn open_modal(&mut self, modal: Modal) {
        if self.state.house(modal.house_id()).is_none() {
            tracing::debug!(house_id = modal.house_id(), "modal target not found");
            return;
        }
        self.state.modal.open(modal);
    }

    pub fn open_add_member_modal(&mut self, house_id: HouseId) {
        self.state.member_form.clear();
        self.open_modal(Modal::AddMember { house_id });
    }

    pub fn open_admin_add_member_modal(&mut self, house_id: HouseId, role: MemberRole) {
        self.state.member_form.clear();
        self.open_modal(Modal::AdminAddMember { house_id, role });
    }

    pub fn select_admin_role(&mut self, new_role: MemberRole) {
        if let Some(Modal::AdminAddMember { role, .. }) = self.state.modal.current_mut() {
            *role = new_role;
        }
    }

    /// The edit buffer is a detached copy of the house; the record stays untouched.
    pub fn open_edit_modal(&mut self, house_id: HouseId) {
        let Some(house) = self.state.house(house_id) else {
            return;
        };
        self.state.edit_form = HouseForm::from_house(house, self.config.min_poly_points);
        self.state.modal.open(Modal::Edit { house_id });
    }

    /// Confirm whichever dialog is open.
    pub fn confirm_modal(&mut self) {
        let Some(modal) = self.state.modal.current() else {
            return;
        };
        match modal {
            Modal::Buy { house_id } => {
                self.post(Intent::BuyHouse { house_id });
                self.state.modal.close(ModalId::Buy);
            }
            Modal::PayTax { house_id } => {
                self.post(Intent::PayTax { house_id });
                self.state.modal.close(ModalId::PayTax);
            }
            Modal::AddMember { house_id } => match self.state.member_form.validate() {
                Ok((member_name, member_citizen_id)) => {
                    self.post(Intent::AddMember {
                        house_id,
                        member_name,
                        member_citizen_id,
                    });
                    self.state.modal.close(ModalId::AddMember);
                }
                Err(e) => self.toast_error(e),
            },
            Modal::AdminAddMember { house_id, role } => match self.state.member_form.validate() {
                Ok((member_name, member_citizen_id)) => {
                    self.post(Intent::AdminAddMember {
                        house_id,
                        member_name,
                        member_citizen_id,
                        member_role: role,
                    });
                    self.state.modal.close(ModalId::AdminAddMember);
                }
                Err(e) => self.toast_error(e),
            },
            Modal::Edit { house_id } => match self.state.edit_form.to_edit_draft() {
                Ok(draft) => {
                    self.post(Intent::AdminEditHouse { house_id, draft });
                    self.state.modal.close(ModalId::Edit);
                }
                Err(e) => self.toast_error(e),
            },
            Modal::Delete { house_id } => {
                self.post(Intent::AdminDeleteHouse { house_id });
                self.state.modal.close(ModalId::Delete);
                if self.state.selected == Some(house_id) {
                    self.back_to_list();
                }
            }
        }
    }

    // Direct actions (no dialog)

    pub fn toggle_lock(&mut self, house_id: HouseId) {
        self.post(Intent::ToggleLock { house_id });
    }

    pub fn remove_member(&mut self, house_id: HouseId, member_id: MemberId) {
        self.post(Intent::RemoveMember {
            house_id,
            member_id,
        });
    }

    pub fn admin_toggle_lock(&mut self, house_id: HouseId) {
        self.post(Intent::AdminToggleLock { house_id });
    }

    pub fn admin_set_owner(&mut self, house_id: HouseId, member_id: MemberId) {
        self.post(Intent::AdminSetOwner {
            house_id,
            member_id,
        });
    }

    pub fn admin_remove_member(&mut self, house_id: HouseId, member_id: MemberId) {
        self.post(Intent::AdminRemoveMember {
            house_id,
            member_id,
        });
    }

    /// Validate the create form, post it, and return to the house list.
    pub fn create_house(&mut self) {
        match self.state.create_form.to_create_draft() {
            Ok(draft) => {
                self.post(Intent::AdminCreateHouse { draft });
                self.toast(statics::PT_TOAST_SENDING, ToastKind::Info);
                self.state.admin_tab = AdminTab::Houses;
            }
            Err(e) => self.toast_error(e),
        }
    }
}
