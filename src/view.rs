//! Pure view models. Every function here is `&PanelState -> data`; the egui layer in
//! `gui` only draws what these return and feeds clicks back as [`UiAction`]s.

use crate::format::{fmt_coord, fmt_money};
use crate::model::{House, HouseId, MemberId, MemberRole, initial_of};
use crate::overlay::Modal;
use crate::state::{AdminTab, PanelState, PlayerTab, StatusFilter, ViewMode};
use crate::statics;

/// Everything a click can ask the panel to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    CloseUi,
    SwitchView(ViewMode),
    PlayerTab(PlayerTab),
    AdminTab(AdminTab),
    Filter(StatusFilter),
    OpenPlayerDetail(HouseId),
    OpenAdminDetail(HouseId),
    BackToList,
    ToggleLock(HouseId),
    OpenTaxModal(HouseId),
    OpenAddMemberModal(HouseId),
    RemoveMember {
        house_id: HouseId,
        member_id: MemberId,
    },
    OpenBuyModal(HouseId),
    AdminToggleLock(HouseId),
    OpenAdminAddMember {
        house_id: HouseId,
        role: MemberRole,
    },
    SelectAdminRole(MemberRole),
    AdminSetOwner {
        house_id: HouseId,
        member_id: MemberId,
    },
    AdminRemoveMember {
        house_id: HouseId,
        member_id: MemberId,
    },
    OpenEditModal(HouseId),
    OpenDeleteModal(HouseId),
    CreateAddPoint,
    CreateRemovePoint,
    EditAddPoint,
    EditRemovePoint,
    SubmitCreate,
    ConfirmModal,
    CancelModal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Plain,
    Green,
    Amber,
    Red,
    Blue,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub label: String,
    pub hover: Option<&'static str>,
    pub tone: Tone,
    pub action: UiAction,
}

impl Button {
    fn new(label: impl Into<String>, tone: Tone, action: UiAction) -> Self {
        Self {
            label: label.into(),
            hover: None,
            tone,
            action,
        }
    }

    fn with_hover(mut self, hover: &'static str) -> Self {
        self.hover = Some(hover);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Badge {
    pub text: &'static str,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InfoCell {
    pub label: &'static str,
    pub value: String,
    pub tone: Tone,
}

impl InfoCell {
    fn new(label: &'static str, value: impl Into<String>, tone: Tone) -> Self {
        Self {
            label,
            value: value.into(),
            tone,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoordCell {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemberRow {
    pub id: MemberId,
    pub initial: String,
    pub name: String,
    pub detail: String,
    pub is_owner: bool,
    pub role_badge: Badge,
    pub buttons: Vec<Button>,
}

// Header / footer

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderView {
    pub admin_mode: bool,
    pub icon: &'static str,
    pub badge: &'static str,
    pub avatar: String,
    pub title: String,
    pub stats: String,
    pub can_switch_admin: bool,
}

pub fn header(state: &PanelState) -> HeaderView {
    let admin_mode = state.view == ViewMode::Admin;
    let mine = my_houses(state).len();
    HeaderView {
        admin_mode,
        icon: if admin_mode {
            statics::PT_ICON_ADMIN
        } else {
            statics::PT_ICON_PLAYER
        },
        badge: if admin_mode {
            statics::PT_BADGE_ADMIN
        } else {
            statics::PT_BADGE_PLAYER
        },
        avatar: if admin_mode {
            statics::PT_AVATAR_ADMIN.to_string()
        } else {
            initial_of(&state.player.name, 'J')
        },
        title: if admin_mode {
            statics::PT_ADMIN_PANEL_TITLE.to_string()
        } else {
            format!(
                "{} · {} {}",
                state.player.name,
                statics::PT_PREFIX_CID,
                state.player.citizen_id
            )
        },
        stats: format!(
            "🏠 {mine} {} · {} {}",
            statics::PT_STAT_HOUSES,
            state.houses.len(),
            statics::PT_STAT_TOTAL
        ),
        can_switch_admin: state.is_admin,
    }
}

pub fn footer_stats(state: &PanelState) -> String {
    let occupied = state.houses.iter().filter(|h| h.is_occupied()).count();
    let available = state.houses.iter().filter(|h| h.is_available()).count();
    let locked = state.houses.iter().filter(|h| h.is_locked).count();
    format!(
        "🏠 {occupied} {} · ✅ {available} {} · 🔒 {locked} {}",
        statics::PT_STAT_OCCUPIED,
        statics::PT_STAT_AVAILABLE,
        statics::PT_STAT_LOCKED
    )
}

// Player view

/// Houses where the local player is a member (any role).
pub fn my_houses(state: &PanelState) -> Vec<&House> {
    let cid = state.player.citizen_id.as_str();
    state.houses.iter().filter(|h| h.has_member(cid)).collect()
}

pub fn available_houses(state: &PanelState) -> Vec<&House> {
    state.houses.iter().filter(|h| h.is_available()).collect()
}

fn lock_badge(locked: bool) -> Badge {
    if locked {
        Badge {
            text: statics::PT_LOCKED,
            tone: Tone::Red,
        }
    } else {
        Badge {
            text: statics::PT_UNLOCKED,
            tone: Tone::Green,
        }
    }
}

fn role_badge(role: MemberRole) -> Badge {
    match role {
        MemberRole::Owner => Badge {
            text: statics::PT_ROLE_OWNER,
            tone: Tone::Amber,
        },
        MemberRole::Tenant => Badge {
            text: statics::PT_ROLE_TENANT,
            tone: Tone::Blue,
        },
    }
}

fn residents_label(count: usize) -> String {
    let noun = if count == 1 {
        statics::PT_RESIDENT_ONE
    } else {
        statics::PT_RESIDENT_MANY
    };
    format!("👥 {count} {noun}")
}

fn entry_cells(house: &House, heading_label: &'static str) -> Vec<CoordCell> {
    let e = house.entry_coord;
    vec![
        CoordCell {
            label: "X",
            value: fmt_coord(e.x),
        },
        CoordCell {
            label: "Y",
            value: fmt_coord(e.y),
        },
        CoordCell {
            label: "Z",
            value: fmt_coord(e.z),
        },
        CoordCell {
            label: heading_label,
            value: fmt_coord(e.heading),
        },
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerCard {
    pub id: HouseId,
    pub name: String,
    pub is_owner: bool,
    pub address: String,
    pub lock: Badge,
    pub residents: String,
    pub tax: String,
    pub due_date: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AvailableCard {
    pub id: HouseId,
    pub name: String,
    pub address: String,
    pub price: String,
    pub tax: String,
    pub entry: String,
    pub buy: Button,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerDetail {
    pub id: HouseId,
    pub name: String,
    pub lock: Badge,
    pub info: Vec<InfoCell>,
    pub actions: Vec<Button>,
    pub members: Vec<MemberRow>,
    pub entry: Vec<CoordCell>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlayerBody {
    MyHouses(Vec<PlayerCard>),
    Available(Vec<AvailableCard>),
    Detail(PlayerDetail),
}

pub fn player_body(state: &PanelState) -> PlayerBody {
    if let Some(house) = state.selected_house() {
        return PlayerBody::Detail(player_detail(state, house));
    }
    match state.player_tab {
        PlayerTab::MyHouses => PlayerBody::MyHouses(
            my_houses(state)
                .into_iter()
                .map(|h| player_card(state, h))
                .collect(),
        ),
        PlayerTab::Available => {
            PlayerBody::Available(available_houses(state).into_iter().map(available_card).collect())
        }
    }
}

fn player_card(state: &PanelState, h: &House) -> PlayerCard {
    PlayerCard {
        id: h.id,
        name: h.name.clone(),
        is_owner: h.role_of(&state.player.citizen_id) == Some(MemberRole::Owner),
        address: h.address.clone(),
        lock: lock_badge(h.is_locked),
        residents: residents_label(h.members.len()),
        tax: format!("💳 {}{}", fmt_money(h.tax_value), statics::PT_SUFFIX_PER_MONTH),
        due_date: format!("📅 {}", h.tax_due_date),
    }
}

fn available_card(h: &House) -> AvailableCard {
    let e = h.entry_coord;
    AvailableCard {
        id: h.id,
        name: h.name.clone(),
        address: h.address.clone(),
        price: fmt_money(h.price),
        tax: fmt_money(h.tax_value),
        entry: format!(
            "{}: X:{} Y:{} Z:{}",
            statics::PT_LABEL_ENTRY,
            fmt_coord(e.x),
            fmt_coord(e.y),
            fmt_coord(e.z)
        ),
        buy: Button::new(statics::PT_BTN_BUY, Tone::Green, UiAction::OpenBuyModal(h.id)),
    }
}

pub fn player_detail(state: &PanelState, h: &House) -> PlayerDetail {
    let me = state.player.citizen_id.as_str();
    let is_owner = h.role_of(me) == Some(MemberRole::Owner);

    let info = vec![
        InfoCell::new(statics::PT_LABEL_ADDRESS, h.address.clone(), Tone::Plain),
        InfoCell::new(
            statics::PT_LABEL_YOUR_ROLE,
            if is_owner {
                statics::PT_YOUR_ROLE_OWNER
            } else {
                statics::PT_YOUR_ROLE_TENANT
            },
            Tone::Plain,
        ),
        InfoCell::new(statics::PT_LABEL_MONTHLY_TAX, fmt_money(h.tax_value), Tone::Green),
        InfoCell::new(statics::PT_LABEL_DUE_DATE, h.tax_due_date.clone(), Tone::Red),
    ];

    let mut actions = vec![
        lock_button(h, UiAction::ToggleLock(h.id)),
        Button::new(
            format!("{} · {}", statics::PT_BTN_PAY_TAX, fmt_money(h.tax_value)),
            Tone::Amber,
            UiAction::OpenTaxModal(h.id),
        ),
    ];
    if is_owner {
        actions.push(Button::new(
            statics::PT_BTN_ADD_PERSON,
            Tone::Blue,
            UiAction::OpenAddMemberModal(h.id),
        ));
    }

    let members = h
        .members
        .iter()
        .map(|m| {
            let can_remove = is_owner && m.citizen_id != me;
            let buttons = if can_remove {
                vec![
                    Button::new(
                        statics::PT_BTN_REMOVE,
                        Tone::Red,
                        UiAction::RemoveMember {
                            house_id: h.id,
                            member_id: m.id,
                        },
                    )
                    .with_hover(statics::PT_HOVER_REMOVE),
                ]
            } else {
                Vec::new()
            };
            MemberRow {
                id: m.id,
                initial: initial_of(&m.name, '?'),
                name: m.name.clone(),
                detail: format!("{} {}", statics::PT_PREFIX_CID, m.citizen_id),
                is_owner: m.is_owner(),
                role_badge: role_badge(m.role),
                buttons,
            }
        })
        .collect();

    PlayerDetail {
        id: h.id,
        name: h.name.clone(),
        lock: lock_badge(h.is_locked),
        info,
        actions,
        members,
        entry: entry_cells(h, statics::PT_LABEL_HEADING),
    }
}

fn lock_button(h: &House, action: UiAction) -> Button {
    if h.is_locked {
        Button::new(statics::PT_BTN_UNLOCK, Tone::Green, action)
    } else {
        Button::new(statics::PT_BTN_LOCK, Tone::Red, action)
    }
}

// Admin view

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminStats {
    pub total: usize,
    pub available: usize,
    pub occupied: usize,
}

pub fn admin_stats(state: &PanelState) -> AdminStats {
    AdminStats {
        total: state.houses.len(),
        available: state.houses.iter().filter(|h| h.is_available()).count(),
        occupied: state.houses.iter().filter(|h| h.is_occupied()).count(),
    }
}

/// Case-insensitive name/address search combined with the status filter.
pub fn admin_filtered(state: &PanelState) -> Vec<&House> {
    let query = state.search.trim().to_lowercase();
    state
        .houses
        .iter()
        .filter(|h| {
            let matches_search = query.is_empty()
                || h.name.to_lowercase().contains(&query)
                || h.address.to_lowercase().contains(&query);
            matches_search && state.filter.matches(h)
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdminCard {
    pub id: HouseId,
    pub name: String,
    pub locked: bool,
    pub available: bool,
    pub address: String,
    pub owner: Option<String>,
    pub status: Badge,
    pub footer: Vec<String>,
    pub buttons: Vec<Button>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum OwnerBox {
    Owner {
        initial: String,
        name: String,
        citizen_id: String,
    },
    NoOwner {
        set_owner: Button,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PolyRow {
    pub num: usize,
    pub x: String,
    pub y: String,
    pub z: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdminDetail {
    pub id: HouseId,
    pub name: String,
    pub info: Vec<InfoCell>,
    pub owner: OwnerBox,
    pub actions: Vec<Button>,
    pub members: Vec<MemberRow>,
    /// Shown instead of the member list when the house has nobody.
    pub empty_members_cta: Option<Button>,
    pub polyzone: Vec<PolyRow>,
    pub entry: Vec<CoordCell>,
    pub manage: Vec<Button>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AdminBody {
    List(Vec<AdminCard>),
    Detail(AdminDetail),
    Create,
}

pub fn admin_body(state: &PanelState) -> AdminBody {
    match state.admin_tab {
        AdminTab::Create => AdminBody::Create,
        AdminTab::Houses => match state.selected_house() {
            Some(h) => AdminBody::Detail(admin_detail(h)),
            None => AdminBody::List(admin_filtered(state).into_iter().map(admin_card).collect()),
        },
    }
}

fn admin_card(h: &House) -> AdminCard {
    let status = if h.is_available() {
        Badge {
            text: statics::PT_STATUS_AVAILABLE_SHORT,
            tone: Tone::Green,
        }
    } else {
        Badge {
            text: statics::PT_STATUS_OCCUPIED_SHORT,
            tone: Tone::Blue,
        }
    };
    AdminCard {
        id: h.id,
        name: h.name.clone(),
        locked: h.is_locked,
        available: h.is_available(),
        address: h.address.clone(),
        owner: h.owner_display().map(|(name, _)| format!("👑 {name}")),
        status,
        footer: vec![
            format!("👥 {}", h.members.len()),
            format!("💳 {}", fmt_money(h.tax_value)),
            format!("🗺️ {} {}", h.polyzone.len(), statics::PT_SUFFIX_POINTS),
        ],
        buttons: vec![
            Button::new(statics::PT_BTN_DELETE, Tone::Red, UiAction::OpenDeleteModal(h.id))
                .with_hover(statics::PT_HOVER_DELETE),
            Button::new(statics::PT_BTN_EDIT, Tone::Blue, UiAction::OpenEditModal(h.id))
                .with_hover(statics::PT_HOVER_EDIT),
            Button::new(statics::PT_BTN_DETAILS, Tone::Plain, UiAction::OpenAdminDetail(h.id))
                .with_hover(statics::PT_HOVER_DETAILS),
        ],
    }
}

pub fn admin_detail(h: &House) -> AdminDetail {
    let set_owner = |label: &'static str| {
        Button::new(
            label,
            Tone::Amber,
            UiAction::OpenAdminAddMember {
                house_id: h.id,
                role: MemberRole::Owner,
            },
        )
    };

    let mut info = vec![
        InfoCell::new(statics::PT_LABEL_ADDRESS, h.address.clone(), Tone::Plain),
        InfoCell::new(statics::PT_LABEL_PRICE, fmt_money(h.price), Tone::Green),
        InfoCell::new(statics::PT_LABEL_TAX, fmt_money(h.tax_value), Tone::Amber),
        InfoCell::new(statics::PT_LABEL_DUE_DATE, h.tax_due_date.clone(), Tone::Red),
    ];

    let owner = match h.owner_display() {
        Some((name, cid)) => {
            info.push(InfoCell::new(
                statics::PT_LABEL_OWNER,
                format!("{name} · {} {cid}", statics::PT_PREFIX_CID),
                Tone::Plain,
            ));
            OwnerBox::Owner {
                initial: initial_of(name, '?'),
                name: name.to_string(),
                citizen_id: cid.to_string(),
            }
        }
        None => OwnerBox::NoOwner {
            set_owner: set_owner(statics::PT_BTN_SET_OWNER_SHORT),
        },
    };

    let actions = vec![
        lock_button(h, UiAction::AdminToggleLock(h.id)),
        Button::new(
            statics::PT_BTN_ADD_TENANT,
            Tone::Blue,
            UiAction::OpenAdminAddMember {
                house_id: h.id,
                role: MemberRole::Tenant,
            },
        ),
        set_owner(statics::PT_BTN_SET_OWNER),
    ];

    let members: Vec<MemberRow> = h
        .members
        .iter()
        .map(|m| {
            let mut buttons = Vec::with_capacity(2);
            if !m.is_owner() {
                buttons.push(
                    Button::new(
                        statics::PT_BTN_PROMOTE,
                        Tone::Amber,
                        UiAction::AdminSetOwner {
                            house_id: h.id,
                            member_id: m.id,
                        },
                    )
                    .with_hover(statics::PT_HOVER_PROMOTE),
                );
            }
            buttons.push(
                Button::new(
                    statics::PT_BTN_REMOVE,
                    Tone::Red,
                    UiAction::AdminRemoveMember {
                        house_id: h.id,
                        member_id: m.id,
                    },
                )
                .with_hover(statics::PT_HOVER_REMOVE),
            );
            MemberRow {
                id: m.id,
                initial: initial_of(&m.name, '?'),
                name: m.name.clone(),
                detail: format!("{} {} · {}", statics::PT_PREFIX_CID, m.citizen_id, m.added_at),
                is_owner: m.is_owner(),
                role_badge: role_badge(m.role),
                buttons,
            }
        })
        .collect();

    let empty_members_cta = members
        .is_empty()
        .then(|| set_owner(statics::PT_BTN_SET_OWNER));

    let polyzone = h
        .polyzone
        .iter()
        .enumerate()
        .map(|(i, p)| PolyRow {
            num: i + 1,
            x: format!("X: {}", fmt_coord(p.x)),
            y: format!("Y: {}", fmt_coord(p.y)),
            z: format!("Z: {}", fmt_coord(p.z)),
        })
        .collect();

    AdminDetail {
        id: h.id,
        name: h.name.clone(),
        info,
        owner,
        actions,
        members,
        empty_members_cta,
        polyzone,
        entry: entry_cells(h, statics::PT_LABEL_HEADING_SHORT),
        manage: vec![
            Button::new(statics::PT_BTN_EDIT_HOUSE, Tone::Blue, UiAction::OpenEditModal(h.id)),
            Button::new(
                statics::PT_BTN_DELETE_HOUSE,
                Tone::Red,
                UiAction::OpenDeleteModal(h.id),
            ),
        ],
    }
}

// Modals

#[derive(Debug, Clone, PartialEq)]
pub struct RoleWarning {
    pub tone: Tone,
    pub text: String,
}

/// Note under the admin role selector. Owner role on a house that already has an
/// owner names that owner, who will be demoted.
pub fn role_warning(house: Option<&House>, role: MemberRole) -> RoleWarning {
    match role {
        MemberRole::Tenant => RoleWarning {
            tone: Tone::Blue,
            text: statics::PT_INFO_TENANT.to_string(),
        },
        MemberRole::Owner => match house.and_then(House::current_owner) {
            Some(owner) => RoleWarning {
                tone: Tone::Amber,
                text: format!(
                    "{}{}{}",
                    statics::PT_WARN_OWNER_REPLACE_PREFIX,
                    owner.name,
                    statics::PT_WARN_OWNER_REPLACE_SUFFIX
                ),
            },
            None => RoleWarning {
                tone: Tone::Green,
                text: statics::PT_WARN_NO_OWNER.to_string(),
            },
        },
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ModalView {
    Buy {
        name: String,
        price: String,
        tax: String,
    },
    PayTax {
        value: String,
        due: String,
    },
    AddMember,
    AdminAddMember {
        title: &'static str,
        role: MemberRole,
        warning: RoleWarning,
    },
    Edit {
        house_name: String,
    },
    Delete {
        name: String,
    },
}

impl ModalView {
    pub fn title(&self) -> &'static str {
        match self {
            ModalView::Buy { .. } => statics::PT_MODAL_BUY,
            ModalView::PayTax { .. } => statics::PT_MODAL_TAX,
            ModalView::AddMember => statics::PT_MODAL_ADD_MEMBER,
            ModalView::AdminAddMember { title, .. } => *title,
            ModalView::Edit { .. } => statics::PT_MODAL_EDIT,
            ModalView::Delete { .. } => statics::PT_MODAL_DELETE,
        }
    }
}

pub fn modal_view(state: &PanelState) -> Option<ModalView> {
    let modal = state.modal.current()?;
    let house = state.house(modal.house_id());
    let view = match modal {
        Modal::Buy { .. } => {
            let h = house?;
            ModalView::Buy {
                name: h.name.clone(),
                price: fmt_money(h.price),
                tax: format!(
                    "+ {}{} {}",
                    fmt_money(h.tax_value),
                    statics::PT_SUFFIX_PER_MONTH,
                    statics::PT_SUFFIX_TAX
                ),
            }
        }
        Modal::PayTax { .. } => {
            let h = house?;
            ModalView::PayTax {
                value: fmt_money(h.tax_value),
                due: format!("{} {}", statics::PT_PREFIX_DUE, h.tax_due_date),
            }
        }
        Modal::AddMember { .. } => ModalView::AddMember,
        Modal::AdminAddMember { role, .. } => ModalView::AdminAddMember {
            title: match role {
                MemberRole::Owner => statics::PT_MODAL_ADMIN_SET_OWNER,
                MemberRole::Tenant => statics::PT_MODAL_ADMIN_ADD_MEMBER,
            },
            role,
            warning: role_warning(house, role),
        },
        Modal::Edit { .. } => ModalView::Edit {
            house_name: house.map(|h| h.name.clone()).unwrap_or_default(),
        },
        Modal::Delete { .. } => ModalView::Delete {
            name: house?.name.clone(),
        },
    };
    Some(view)
}
