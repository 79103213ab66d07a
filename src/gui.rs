use crate::bridge::HostBridge;
use crate::format::fmt_coord;
use crate::forms::HouseForm;
use crate::model::MemberRole;
use crate::overlay::ToastKind;
use crate::panel::Panel;
use crate::polygon::{Axis, PolyEditor};
use crate::state::{AdminTab, PlayerTab, StatusFilter, ViewMode};
use crate::statics;
use crate::view::{
    self, AdminBody, AdminCard, AdminDetail, AvailableCard, Badge, Button, CoordCell, InfoCell,
    MemberRow, ModalView, OwnerBox, PlayerBody, PlayerCard, PlayerDetail, Tone, UiAction,
};
use eframe::egui;
use egui_extras::{Column, TableBuilder};
use std::sync::mpsc::Receiver;
use std::time::Instant;

/// Open the native window and run the panel until the window is closed.
///
/// `inbox` carries raw host envelopes (JSON text); it is drained once per frame.
pub fn run_gui<B>(panel: Panel<B>, inbox: Option<Receiver<String>>) -> eframe::Result
where
    B: HostBridge + 'static,
{
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1100.0, 760.0]),
        ..Default::default()
    };
    let title = format!("{} {}", statics::PT_APP_TITLE, env!("CARGO_PKG_VERSION"));
    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| {
            Ok(Box::new(HousesApp {
                panel,
                inbox,
                theme_dark: true,
            }))
        }),
    )
}

/// The egui shell. All state lives in `panel`; this type only draws and collects clicks.
struct HousesApp<B: HostBridge> {
    panel: Panel<B>,
    inbox: Option<Receiver<String>>,
    theme_dark: bool,
}

fn tone_color(tone: Tone) -> Option<egui::Color32> {
    match tone {
        Tone::Plain => None,
        Tone::Green => Some(egui::Color32::from_rgb(34, 197, 94)),
        Tone::Amber => Some(egui::Color32::from_rgb(245, 158, 11)),
        Tone::Red => Some(egui::Color32::from_rgb(239, 68, 68)),
        Tone::Blue => Some(egui::Color32::from_rgb(59, 130, 246)),
    }
}

fn toned(text: impl Into<String>, tone: Tone) -> egui::RichText {
    let rt = egui::RichText::new(text.into());
    match tone_color(tone) {
        Some(c) => rt.color(c),
        None => rt,
    }
}

fn toast_tone(kind: ToastKind) -> Tone {
    match kind {
        ToastKind::Success => Tone::Green,
        ToastKind::Error => Tone::Red,
        ToastKind::Info => Tone::Blue,
    }
}

impl<B: HostBridge> HousesApp<B> {
    fn drain_inbox(&mut self) {
        let Some(rx) = &self.inbox else {
            return;
        };
        let mut batch = Vec::new();
        while let Ok(raw) = rx.try_recv() {
            batch.push(raw);
        }
        for raw in batch {
            self.panel.receive(&raw);
        }
    }

    fn draw_button(ui: &mut egui::Ui, b: &Button, pending: &mut Vec<UiAction>) {
        let mut resp = ui.button(toned(b.label.clone(), b.tone));
        if let Some(hover) = b.hover {
            resp = resp.on_hover_text(hover);
        }
        if resp.clicked() {
            pending.push(b.action);
        }
    }

    fn draw_badge(ui: &mut egui::Ui, badge: &Badge) {
        ui.label(toned(badge.text, badge.tone).small().strong());
    }

    fn draw_info_grid(ui: &mut egui::Ui, id_salt: &str, cells: &[InfoCell]) {
        egui::Grid::new(id_salt)
            .num_columns(2)
            .spacing([16.0, 4.0])
            .show(ui, |ui| {
                for cell in cells {
                    ui.weak(cell.label);
                    ui.label(toned(cell.value.clone(), cell.tone));
                    ui.end_row();
                }
            });
    }

    fn draw_coords(ui: &mut egui::Ui, cells: &[CoordCell]) {
        ui.horizontal(|ui| {
            for cell in cells {
                ui.weak(cell.label);
                ui.monospace(&cell.value);
                ui.separator();
            }
        });
    }

    fn draw_member(ui: &mut egui::Ui, row: &MemberRow, pending: &mut Vec<UiAction>) {
        ui.push_id(row.id, |ui| {
            ui.horizontal(|ui| {
                let avatar = if row.is_owner {
                    toned(row.initial.clone(), Tone::Amber)
                } else {
                    egui::RichText::new(row.initial.clone())
                };
                ui.label(avatar.strong().monospace());
                ui.vertical(|ui| {
                    ui.strong(&row.name);
                    ui.weak(&row.detail);
                });
                Self::draw_badge(ui, &row.role_badge);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    for b in row.buttons.iter().rev() {
                        Self::draw_button(ui, b, pending);
                    }
                });
            });
        });
    }

    // Header / tabs / footer

    fn draw_header(&mut self, ctx: &egui::Context, pending: &mut Vec<UiAction>) {
        let header = view::header(self.panel.state());
        let view_mode = self.panel.state().view;
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(header.icon);
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.strong(statics::PT_APP_TITLE);
                        let tone = if header.admin_mode {
                            Tone::Red
                        } else {
                            Tone::Blue
                        };
                        ui.label(toned(header.badge, tone).small().strong());
                    });
                    ui.weak(&header.stats);
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(statics::PT_BTN_CLOSE).clicked() {
                        pending.push(UiAction::CloseUi);
                    }
                    if ui.button(statics::PT_BTN_TOGGLE_THEME).clicked() {
                        self.theme_dark = !self.theme_dark;
                        if self.theme_dark {
                            ctx.set_visuals(egui::Visuals::dark());
                        } else {
                            ctx.set_visuals(egui::Visuals::light());
                        }
                    }
                    ui.separator();
                    ui.label(egui::RichText::new(&header.title).strong());
                    ui.label(egui::RichText::new(&header.avatar).monospace().strong());
                    if header.can_switch_admin {
                        ui.separator();
                        if ui
                            .selectable_label(view_mode == ViewMode::Admin, statics::PT_VIEW_ADMIN)
                            .clicked()
                        {
                            pending.push(UiAction::SwitchView(ViewMode::Admin));
                        }
                        if ui
                            .selectable_label(
                                view_mode == ViewMode::Player,
                                statics::PT_VIEW_PLAYER,
                            )
                            .clicked()
                        {
                            pending.push(UiAction::SwitchView(ViewMode::Player));
                        }
                    }
                });
            });

            ui.separator();
            ui.horizontal(|ui| {
                let state = self.panel.state();
                match state.view {
                    ViewMode::Player => {
                        for (tab, label) in [
                            (PlayerTab::MyHouses, statics::PT_TAB_MY_HOUSES),
                            (PlayerTab::Available, statics::PT_TAB_AVAILABLE),
                        ] {
                            if ui.selectable_label(state.player_tab == tab, label).clicked() {
                                pending.push(UiAction::PlayerTab(tab));
                            }
                        }
                    }
                    ViewMode::Admin => {
                        for (tab, label) in [
                            (AdminTab::Houses, statics::PT_TAB_ADMIN_HOUSES),
                            (AdminTab::Create, statics::PT_TAB_ADMIN_CREATE),
                        ] {
                            if ui.selectable_label(state.admin_tab == tab, label).clicked() {
                                pending.push(UiAction::AdminTab(tab));
                            }
                        }
                    }
                }
            });
        });
    }

    fn draw_footer(&self, ctx: &egui::Context) {
        let stats = view::footer_stats(self.panel.state());
        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.weak(stats);
            });
        });
    }

    // Player view

    fn draw_player_card(ui: &mut egui::Ui, card: &PlayerCard, pending: &mut Vec<UiAction>) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                let name = if card.is_owner {
                    format!("👑 {}", card.name)
                } else {
                    card.name.clone()
                };
                if ui.link(egui::RichText::new(name).strong()).clicked() {
                    pending.push(UiAction::OpenPlayerDetail(card.id));
                }
                Self::draw_badge(ui, &card.lock);
            });
            ui.weak(&card.address);
            ui.horizontal(|ui| {
                ui.label(&card.residents);
                ui.separator();
                ui.label(&card.tax);
                ui.separator();
                ui.label(&card.due_date);
            });
        });
    }

    fn draw_available_card(ui: &mut egui::Ui, card: &AvailableCard, pending: &mut Vec<UiAction>) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.strong(&card.name);
                ui.label(toned(statics::PT_STATUS_AVAILABLE, Tone::Green).small());
            });
            ui.weak(&card.address);
            Self::draw_info_grid(
                ui,
                &format!("available_{}", card.id),
                &[
                    InfoCell {
                        label: statics::PT_LABEL_PRICE,
                        value: card.price.clone(),
                        tone: Tone::Green,
                    },
                    InfoCell {
                        label: statics::PT_LABEL_TAX,
                        value: format!("{}{}", card.tax, statics::PT_SUFFIX_PER_MONTH),
                        tone: Tone::Amber,
                    },
                ],
            );
            ui.weak(&card.entry);
            Self::draw_button(ui, &card.buy, pending);
        });
    }

    fn draw_player_detail(ui: &mut egui::Ui, d: &PlayerDetail, pending: &mut Vec<UiAction>) {
        ui.horizontal(|ui| {
            if ui.button(statics::PT_BTN_BACK).clicked() {
                pending.push(UiAction::BackToList);
            }
            ui.heading(&d.name);
            Self::draw_badge(ui, &d.lock);
        });
        ui.separator();
        Self::draw_info_grid(ui, "player_detail_info", &d.info);
        ui.add_space(8.0);
        ui.horizontal_wrapped(|ui| {
            for b in &d.actions {
                Self::draw_button(ui, b, pending);
            }
        });
        ui.add_space(8.0);
        ui.strong(statics::PT_LABEL_MEMBERS);
        if d.members.is_empty() {
            ui.weak(statics::PT_NO_MEMBERS);
        }
        for row in &d.members {
            Self::draw_member(ui, row, pending);
        }
        ui.add_space(8.0);
        ui.strong(statics::PT_LABEL_ENTRY);
        Self::draw_coords(ui, &d.entry);
    }

    fn draw_player_body(&self, ui: &mut egui::Ui, pending: &mut Vec<UiAction>) {
        match view::player_body(self.panel.state()) {
            PlayerBody::MyHouses(cards) => {
                if cards.is_empty() {
                    ui.weak(statics::PT_EMPTY_MY_HOUSES);
                }
                for card in &cards {
                    Self::draw_player_card(ui, card, pending);
                }
            }
            PlayerBody::Available(cards) => {
                if cards.is_empty() {
                    ui.weak(statics::PT_EMPTY_AVAILABLE);
                }
                for card in &cards {
                    Self::draw_available_card(ui, card, pending);
                }
            }
            PlayerBody::Detail(detail) => Self::draw_player_detail(ui, &detail, pending),
        }
    }

    // Admin view

    fn draw_admin_card(ui: &mut egui::Ui, card: &AdminCard, pending: &mut Vec<UiAction>) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                let lock = if card.locked { "🔒" } else { "🔓" };
                ui.label(lock);
                ui.strong(&card.name);
                Self::draw_badge(ui, &card.status);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    for b in card.buttons.iter().rev() {
                        Self::draw_button(ui, b, pending);
                    }
                });
            });
            ui.weak(&card.address);
            if let Some(owner) = &card.owner {
                ui.label(toned(owner.clone(), Tone::Amber));
            }
            ui.horizontal(|ui| {
                for part in &card.footer {
                    ui.weak(part);
                }
            });
        });
    }

    fn draw_admin_list(
        &mut self,
        ui: &mut egui::Ui,
        cards: &[AdminCard],
        pending: &mut Vec<UiAction>,
    ) {
        let stats = view::admin_stats(self.panel.state());
        let filter = self.panel.state().filter;
        ui.horizontal(|ui| {
            ui.label(format!("{}: {}", statics::PT_ADMIN_STAT_TOTAL, stats.total));
            ui.separator();
            ui.label(toned(
                format!("{}: {}", statics::PT_ADMIN_STAT_AVAILABLE, stats.available),
                Tone::Green,
            ));
            ui.separator();
            ui.label(toned(
                format!("{}: {}", statics::PT_ADMIN_STAT_OCCUPIED, stats.occupied),
                Tone::Blue,
            ));
        });
        ui.horizontal(|ui| {
            ui.add(
                egui::TextEdit::singleline(&mut self.panel.state_mut().search)
                    .hint_text(statics::PT_HINT_SEARCH)
                    .desired_width(260.0),
            );
            for (f, label) in [
                (StatusFilter::All, statics::PT_FILTER_ALL),
                (StatusFilter::Available, statics::PT_FILTER_AVAILABLE),
                (StatusFilter::Occupied, statics::PT_FILTER_OCCUPIED),
            ] {
                if ui.selectable_label(filter == f, label).clicked() {
                    pending.push(UiAction::Filter(f));
                }
            }
        });
        ui.separator();
        if cards.is_empty() {
            ui.weak(statics::PT_EMPTY_ADMIN_LIST);
        }
        for card in cards {
            ui.push_id(card.id, |ui| Self::draw_admin_card(ui, card, pending));
        }
    }

    fn draw_admin_detail(ui: &mut egui::Ui, d: &AdminDetail, pending: &mut Vec<UiAction>) {
        ui.horizontal(|ui| {
            if ui.button(statics::PT_BTN_BACK).clicked() {
                pending.push(UiAction::BackToList);
            }
            ui.heading(&d.name);
        });
        ui.separator();
        Self::draw_info_grid(ui, "admin_detail_info", &d.info);

        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| match &d.owner {
            OwnerBox::Owner {
                initial,
                name,
                citizen_id,
            } => {
                ui.horizontal(|ui| {
                    ui.label(toned(initial.clone(), Tone::Amber).strong().monospace());
                    ui.vertical(|ui| {
                        ui.strong(name);
                        ui.weak(format!("{} {citizen_id}", statics::PT_PREFIX_CID));
                    });
                });
            }
            OwnerBox::NoOwner { set_owner } => {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(toned(statics::PT_NO_OWNER_TITLE, Tone::Amber).strong());
                        ui.weak(statics::PT_NO_OWNER_HINT);
                    });
                    Self::draw_button(ui, set_owner, pending);
                });
            }
        });

        ui.add_space(8.0);
        ui.horizontal_wrapped(|ui| {
            for b in &d.actions {
                Self::draw_button(ui, b, pending);
            }
        });

        ui.add_space(8.0);
        ui.strong(statics::PT_LABEL_MEMBERS);
        if let Some(cta) = &d.empty_members_cta {
            ui.weak(statics::PT_NO_MEMBERS_ADMIN);
            Self::draw_button(ui, cta, pending);
        }
        for row in &d.members {
            Self::draw_member(ui, row, pending);
        }

        ui.add_space(8.0);
        ui.strong(statics::PT_LABEL_POLYZONE);
        if d.polyzone.is_empty() {
            ui.weak(statics::PT_NO_POLY_POINTS);
        }
        for p in &d.polyzone {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(format!("#{}", p.num)).strong());
                ui.monospace(&p.x);
                ui.monospace(&p.y);
                ui.monospace(&p.z);
            });
        }

        ui.add_space(8.0);
        ui.strong(statics::PT_LABEL_ENTRY);
        Self::draw_coords(ui, &d.entry);

        ui.separator();
        ui.horizontal(|ui| {
            for b in &d.manage {
                Self::draw_button(ui, b, pending);
            }
        });
    }

    // Shared house form (create tab + edit dialog)

    fn draw_house_form(ui: &mut egui::Ui, id_salt: &str, form: &mut HouseForm) {
        egui::Grid::new(id_salt)
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label(statics::PT_FIELD_NAME);
                ui.text_edit_singleline(&mut form.name);
                ui.end_row();
                ui.label(statics::PT_FIELD_ADDRESS);
                ui.text_edit_singleline(&mut form.address);
                ui.end_row();
                ui.label(statics::PT_FIELD_PRICE);
                ui.text_edit_singleline(&mut form.price);
                ui.end_row();
                ui.label(statics::PT_FIELD_TAX);
                ui.text_edit_singleline(&mut form.tax_value);
                ui.end_row();
                ui.label(statics::PT_FIELD_DUE_DATE);
                ui.text_edit_singleline(&mut form.tax_due_date);
                ui.end_row();
                ui.label(statics::PT_FIELD_ENTRY);
                ui.add(
                    egui::TextEdit::singleline(&mut form.entry_coord)
                        .hint_text(statics::PT_HINT_ENTRY),
                );
                ui.end_row();
                ui.label(statics::PT_FIELD_HEADING);
                ui.text_edit_singleline(&mut form.heading);
                ui.end_row();
            });
    }

    fn draw_poly_editor(
        ui: &mut egui::Ui,
        id_salt: &str,
        poly: &mut PolyEditor,
        add: UiAction,
        remove: UiAction,
        pending: &mut Vec<UiAction>,
    ) {
        ui.horizontal(|ui| {
            ui.strong(statics::PT_LABEL_POLYZONE);
            ui.weak(format!("{} {}", poly.len(), statics::PT_SUFFIX_POINTS));
            if ui.button(statics::PT_BTN_ADD_POINT).clicked() {
                pending.push(add);
            }
            if ui.button(statics::PT_BTN_REMOVE_POINT).clicked() {
                pending.push(remove);
            }
        });

        let row_h = ui.text_style_height(&egui::TextStyle::Body) + 6.0;
        ui.push_id(id_salt, |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .column(Column::exact(36.0))
                .column(Column::remainder())
                .column(Column::remainder())
                .column(Column::remainder())
                .header(row_h, |mut header| {
                    for label in ["#", "X", "Y", "Z"] {
                        header.col(|ui| {
                            ui.strong(label);
                        });
                    }
                })
                .body(|mut body| {
                    for i in 0..poly.len() {
                        body.row(row_h, |mut row| {
                            row.col(|ui| {
                                ui.label(format!("{}", i + 1));
                            });
                            for axis in Axis::ALL {
                                row.col(|ui| Self::draw_axis_cell(ui, poly, i, axis));
                            }
                        });
                    }
                });
        });
    }

    /// Text cell for one coordinate. The typed text lives in egui memory while the cell
    /// is being edited and is committed through `set_axis` when focus leaves it.
    fn draw_axis_cell(ui: &mut egui::Ui, poly: &mut PolyEditor, index: usize, axis: Axis) {
        let Some(current) = poly.axis(index, axis) else {
            return;
        };
        let id = ui.id().with(("poly_axis", index, axis));
        let mut text = ui
            .data(|d| d.get_temp::<String>(id))
            .unwrap_or_else(|| fmt_coord(current));
        let resp = ui.add(
            egui::TextEdit::singleline(&mut text)
                .desired_width(f32::INFINITY)
                .hint_text(axis.label()),
        );
        if resp.changed() {
            ui.data_mut(|d| d.insert_temp(id, text.clone()));
        }
        if resp.lost_focus() {
            poly.set_axis(index, axis, &text);
            ui.data_mut(|d| d.remove::<String>(id));
        }
    }

    fn draw_create_tab(&mut self, ui: &mut egui::Ui, pending: &mut Vec<UiAction>) {
        let form = &mut self.panel.state_mut().create_form;
        Self::draw_house_form(ui, "create_form", form);
        ui.add_space(8.0);
        Self::draw_poly_editor(
            ui,
            "create_poly",
            &mut form.poly,
            UiAction::CreateAddPoint,
            UiAction::CreateRemovePoint,
            pending,
        );
        ui.add_space(8.0);
        if ui
            .button(toned(statics::PT_BTN_CREATE, Tone::Green).strong())
            .clicked()
        {
            pending.push(UiAction::SubmitCreate);
        }
    }

    fn draw_admin_body(&mut self, ui: &mut egui::Ui, pending: &mut Vec<UiAction>) {
        match view::admin_body(self.panel.state()) {
            AdminBody::List(cards) => self.draw_admin_list(ui, &cards, pending),
            AdminBody::Detail(detail) => Self::draw_admin_detail(ui, &detail, pending),
            AdminBody::Create => self.draw_create_tab(ui, pending),
        }
    }

    // Overlays

    fn draw_member_fields(&mut self, ui: &mut egui::Ui) {
        let form = &mut self.panel.state_mut().member_form;
        egui::Grid::new("member_form")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label(statics::PT_FIELD_MEMBER_NAME);
                ui.text_edit_singleline(&mut form.name);
                ui.end_row();
                ui.label(statics::PT_FIELD_MEMBER_CID);
                ui.text_edit_singleline(&mut form.citizen_id);
                ui.end_row();
            });
    }

    fn draw_modal(&mut self, ctx: &egui::Context, pending: &mut Vec<UiAction>) {
        let Some(modal) = view::modal_view(self.panel.state()) else {
            return;
        };
        let mut open = true;
        egui::Window::new(modal.title())
            .id(egui::Id::new("panel_modal"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .open(&mut open)
            .show(ctx, |ui| {
                let confirm_label = match &modal {
                    ModalView::Buy { name, price, tax } => {
                        ui.strong(name);
                        ui.label(toned(price.clone(), Tone::Green).heading());
                        ui.weak(tax);
                        statics::PT_BTN_CONFIRM
                    }
                    ModalView::PayTax { value, due } => {
                        ui.label(toned(value.clone(), Tone::Amber).heading());
                        ui.weak(due);
                        statics::PT_BTN_CONFIRM
                    }
                    ModalView::AddMember => {
                        self.draw_member_fields(ui);
                        statics::PT_BTN_CONFIRM
                    }
                    ModalView::AdminAddMember { role, warning, .. } => {
                        ui.horizontal(|ui| {
                            for (r, label) in [
                                (MemberRole::Tenant, statics::PT_ROLE_PICK_TENANT),
                                (MemberRole::Owner, statics::PT_ROLE_PICK_OWNER),
                            ] {
                                if ui.selectable_label(*role == r, label).clicked() {
                                    pending.push(UiAction::SelectAdminRole(r));
                                }
                            }
                        });
                        ui.label(toned(warning.text.clone(), warning.tone));
                        ui.add_space(4.0);
                        self.draw_member_fields(ui);
                        statics::PT_BTN_CONFIRM
                    }
                    ModalView::Edit { house_name } => {
                        ui.weak(house_name);
                        let form = &mut self.panel.state_mut().edit_form;
                        Self::draw_house_form(ui, "edit_form", form);
                        ui.add_space(8.0);
                        egui::ScrollArea::vertical()
                            .max_height(220.0)
                            .show(ui, |ui| {
                                Self::draw_poly_editor(
                                    ui,
                                    "edit_poly",
                                    &mut form.poly,
                                    UiAction::EditAddPoint,
                                    UiAction::EditRemovePoint,
                                    pending,
                                );
                            });
                        statics::PT_BTN_SAVE
                    }
                    ModalView::Delete { name } => {
                        ui.strong(name);
                        ui.label(toned(statics::PT_DELETE_CONFIRM, Tone::Red));
                        statics::PT_BTN_CONFIRM
                    }
                };

                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button(statics::PT_BTN_CANCEL).clicked() {
                        pending.push(UiAction::CancelModal);
                    }
                    if ui.button(egui::RichText::new(confirm_label).strong()).clicked() {
                        pending.push(UiAction::ConfirmModal);
                    }
                });
            });
        if !open {
            pending.push(UiAction::CancelModal);
        }
    }

    /// Returns true when the toast was clicked away.
    fn draw_toast(&self, ctx: &egui::Context, now: Instant) -> bool {
        let Some(toast) = self.panel.state().toast.visible(now) else {
            return false;
        };
        egui::Area::new(egui::Id::new("toast"))
            .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -48.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style())
                    .show(ui, |ui| {
                        ui.label(toned(toast.message.clone(), toast_tone(toast.kind)).strong());
                    })
                    .response
                    .interact(egui::Sense::click())
                    .clicked()
            })
            .inner
    }
}

impl<B: HostBridge> eframe::App for HousesApp<B> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_inbox();
        let now = Instant::now();
        self.panel.tick(now);

        let mut pending: Vec<UiAction> = Vec::new();

        if !self.panel.state().visible {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.heading(statics::PT_HIDDEN_HEADING);
                ui.weak(statics::PT_HIDDEN_HINT);
            });
            // Keep polling the inbox for the next openUI.
            if self.inbox.is_some() {
                ctx.request_repaint_after(statics::INBOX_POLL_INTERVAL);
            }
            return;
        }

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            pending.push(UiAction::CloseUi);
        }

        self.draw_header(ctx, &mut pending);
        // Bottom bar goes before the central panel so it spans the full width.
        self.draw_footer(ctx);

        let view_mode = self.panel.state().view;
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| match view_mode {
                    ViewMode::Player => self.draw_player_body(ui, &mut pending),
                    ViewMode::Admin => self.draw_admin_body(ui, &mut pending),
                });
        });

        self.draw_modal(ctx, &mut pending);
        if self.draw_toast(ctx, now) {
            self.panel.state_mut().toast.dismiss();
        }

        for action in pending {
            self.panel.dispatch(action);
        }

        if let Some(left) = self.panel.state().toast.remaining(Instant::now()) {
            ctx.request_repaint_after(left);
        } else if self.inbox.is_some() {
            ctx.request_repaint_after(statics::INBOX_POLL_INTERVAL);
        }
    }
}
