use crate::config::PanelConfig;
use crate::forms::{HouseForm, MemberForm};
use crate::model::{House, HouseId, HouseStatus, Player};
use crate::overlay::{ModalSlot, ToastSlot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Player,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerTab {
    #[default]
    MyHouses,
    Available,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    Houses,
    Create,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Available,
    Occupied,
}

impl StatusFilter {
    pub fn matches(self, house: &House) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Available => house.status == HouseStatus::Available,
            StatusFilter::Occupied => house.status == HouseStatus::Occupied,
        }
    }
}

/// Everything the panel shows, owned in one place. Renderers in `view` read it;
/// only `Panel` mutates it.
#[derive(Debug, Clone)]
pub struct PanelState {
    pub visible: bool,
    pub houses: Vec<House>,
    pub player: Player,
    pub is_admin: bool,
    pub view: ViewMode,
    pub player_tab: PlayerTab,
    pub admin_tab: AdminTab,
    pub filter: StatusFilter,
    pub search: String,
    /// Selected house by id; the record itself is looked up fresh on every render.
    pub selected: Option<HouseId>,
    pub create_form: HouseForm,
    pub edit_form: HouseForm,
    pub member_form: MemberForm,
    pub modal: ModalSlot,
    pub toast: ToastSlot,
}

impl PanelState {
    pub fn new(config: &PanelConfig) -> Self {
        Self {
            visible: false,
            houses: Vec::new(),
            player: Player::default(),
            is_admin: false,
            view: ViewMode::Player,
            player_tab: PlayerTab::MyHouses,
            admin_tab: AdminTab::Houses,
            filter: StatusFilter::All,
            search: String::new(),
            selected: None,
            create_form: HouseForm::blank(config.create_form_points, config.min_poly_points),
            edit_form: HouseForm::blank(0, config.min_poly_points),
            member_form: MemberForm::default(),
            modal: ModalSlot::default(),
            toast: ToastSlot::new(config.toast_duration),
        }
    }

    pub fn house(&self, id: HouseId) -> Option<&House> {
        self.houses.iter().find(|h| h.id == id)
    }

    pub fn selected_house(&self) -> Option<&House> {
        self.selected.and_then(|id| self.house(id))
    }

    /// Replace the house list wholesale. A selection or open dialog whose house is
    /// gone is dropped; a surviving one simply re-reads the new record.
    pub fn replace_houses(&mut self, houses: Vec<House>) {
        self.houses = houses;
        if self.selected.is_some() && self.selected_house().is_none() {
            self.selected = None;
        }
        if let Some(modal) = self.modal.current()
            && self.house(modal.house_id()).is_none()
        {
            self.modal.close_any();
        }
    }
}
