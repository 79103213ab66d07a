// Central place for UI strings and other non-localized constants.
// Keep these out of gui.rs and view.rs to reduce duplication and make tweaks safer.

use std::time::Duration;

// Host wiring
pub const DEFAULT_RESOURCE_NAME: &str = "houses";
pub const TOAST_DURATION: Duration = Duration::from_millis(3500);
pub const MIN_POLY_POINTS: usize = 3;
pub const CREATE_FORM_POLY_POINTS: usize = 4;
// How often the GUI wakes up to drain host messages while idle.
pub const INBOX_POLL_INTERVAL: Duration = Duration::from_millis(250);

// Inbound message actions (host -> panel)
pub const MSG_OPEN_UI: &str = "openUI";
pub const MSG_CLOSE_UI: &str = "closeUI";
pub const MSG_UPDATE_HOUSES: &str = "updateHouses";
pub const MSG_TOAST: &str = "toast";
pub const MSG_TYPE_ERROR: &str = "error";

// Outbound intent actions (panel -> host)
pub const ACT_CLOSE_UI: &str = "closeUI";
pub const ACT_TOGGLE_LOCK: &str = "toggleLock";
pub const ACT_PAY_TAX: &str = "payTax";
pub const ACT_ADD_MEMBER: &str = "addMember";
pub const ACT_REMOVE_MEMBER: &str = "removeMember";
pub const ACT_BUY_HOUSE: &str = "buyHouse";
pub const ACT_ADMIN_TOGGLE_LOCK: &str = "adminToggleLock";
pub const ACT_ADMIN_ADD_MEMBER: &str = "adminAddMember";
pub const ACT_ADMIN_SET_OWNER: &str = "adminSetOwner";
pub const ACT_ADMIN_REMOVE_MEMBER: &str = "adminRemoveMember";
pub const ACT_ADMIN_EDIT_HOUSE: &str = "adminEditHouse";
pub const ACT_ADMIN_DELETE_HOUSE: &str = "adminDeleteHouse";
pub const ACT_ADMIN_CREATE_HOUSE: &str = "adminCreateHouse";

// Portuguese UI strings (PT_ prefix, the only shipped language)
pub const PT_APP_TITLE: &str = "Creative Houses";
pub const PT_PLAYER_FALLBACK_NAME: &str = "Jogador";
pub const PT_PLAYER_FALLBACK_CID: &str = "N/A";

pub const PT_BADGE_PLAYER: &str = "PLAYER";
pub const PT_BADGE_ADMIN: &str = "ADMIN";
pub const PT_ICON_PLAYER: &str = "🏠";
pub const PT_ICON_ADMIN: &str = "🛡️";
pub const PT_AVATAR_ADMIN: &str = "⚡";
pub const PT_ADMIN_PANEL_TITLE: &str = "Painel Administrativo";

pub const PT_VIEW_PLAYER: &str = "Jogador";
pub const PT_VIEW_ADMIN: &str = "Admin";
pub const PT_TAB_MY_HOUSES: &str = "Minhas Casas";
pub const PT_TAB_AVAILABLE: &str = "Disponíveis";
pub const PT_TAB_ADMIN_HOUSES: &str = "Gerenciar";
pub const PT_TAB_ADMIN_CREATE: &str = "Criar Casa";

pub const PT_FILTER_ALL: &str = "Todas";
pub const PT_FILTER_AVAILABLE: &str = "Disponíveis";
pub const PT_FILTER_OCCUPIED: &str = "Ocupadas";
pub const PT_HINT_SEARCH: &str = "Buscar por nome ou endereço";

pub const PT_ADMIN_STAT_TOTAL: &str = "Total";
pub const PT_ADMIN_STAT_AVAILABLE: &str = "Disponíveis";
pub const PT_ADMIN_STAT_OCCUPIED: &str = "Ocupadas";

pub const PT_EMPTY_MY_HOUSES: &str = "Você ainda não possui casas.";
pub const PT_EMPTY_AVAILABLE: &str = "Nenhuma casa disponível no momento.";
pub const PT_EMPTY_ADMIN_LIST: &str = "Nenhuma casa encontrada";
pub const PT_NO_MEMBERS: &str = "Nenhum morador";
pub const PT_NO_MEMBERS_ADMIN: &str = "Nenhum morador cadastrado";
pub const PT_NO_POLY_POINTS: &str = "Nenhum ponto cadastrado";

pub const PT_LOCKED: &str = "🔒 Trancada";
pub const PT_UNLOCKED: &str = "🔓 Aberta";
pub const PT_STATUS_AVAILABLE: &str = "Disponível";
pub const PT_STATUS_AVAILABLE_SHORT: &str = "Disp.";
pub const PT_STATUS_OCCUPIED_SHORT: &str = "Ocup.";
pub const PT_ROLE_OWNER: &str = "👑 Dono";
pub const PT_ROLE_TENANT: &str = "🏠 Morador";
pub const PT_YOUR_ROLE_OWNER: &str = "👑 Proprietário";
pub const PT_YOUR_ROLE_TENANT: &str = "🏠 Morador";
pub const PT_RESIDENT_ONE: &str = "morador";
pub const PT_RESIDENT_MANY: &str = "moradores";

pub const PT_LABEL_ADDRESS: &str = "📍 Endereço";
pub const PT_LABEL_YOUR_ROLE: &str = "⭐ Sua Função";
pub const PT_LABEL_MONTHLY_TAX: &str = "💳 Taxa Mensal";
pub const PT_LABEL_TAX: &str = "💳 Taxa";
pub const PT_LABEL_DUE_DATE: &str = "📅 Vencimento";
pub const PT_LABEL_PRICE: &str = "💰 Preço";
pub const PT_LABEL_OWNER: &str = "👑 Proprietário";
pub const PT_LABEL_MEMBERS: &str = "👥 Moradores";
pub const PT_LABEL_ENTRY: &str = "📍 Entrada";
pub const PT_LABEL_POLYZONE: &str = "🗺️ PolyZone";
pub const PT_LABEL_HEADING: &str = "Heading°";
pub const PT_LABEL_HEADING_SHORT: &str = "H°";
pub const PT_PREFIX_CID: &str = "CID:";
pub const PT_PREFIX_DUE: &str = "Vencimento:";
pub const PT_SUFFIX_PER_MONTH: &str = "/mês";
pub const PT_SUFFIX_POINTS: &str = "pts";
pub const PT_SUFFIX_TAX: &str = "de taxa";

// Header and footer counters.
pub const PT_STAT_HOUSES: &str = "casas";
pub const PT_STAT_TOTAL: &str = "total";
pub const PT_STAT_OCCUPIED: &str = "ocupadas";
pub const PT_STAT_AVAILABLE: &str = "disponíveis";
pub const PT_STAT_LOCKED: &str = "trancadas";
pub const PT_CURRENCY: &str = "R$";

pub const PT_NO_OWNER_TITLE: &str = "⚠️ Sem Proprietário";
pub const PT_NO_OWNER_HINT: &str = "Esta casa não tem dono definido";

pub const PT_BTN_CLOSE: &str = "✕ Fechar";
pub const PT_BTN_BACK: &str = "← Voltar";
pub const PT_BTN_LOCK: &str = "🔒 Trancar Casa";
pub const PT_BTN_UNLOCK: &str = "🔓 Destrancar Casa";
pub const PT_BTN_PAY_TAX: &str = "💳 Pagar Taxa";
pub const PT_BTN_ADD_PERSON: &str = "👤 Adicionar Pessoa";
pub const PT_BTN_ADD_TENANT: &str = "👤 Adicionar Morador";
pub const PT_BTN_SET_OWNER: &str = "👑 Definir Dono";
pub const PT_BTN_SET_OWNER_SHORT: &str = "👑 Definir";
pub const PT_BTN_PROMOTE: &str = "👑";
pub const PT_BTN_REMOVE: &str = "✕";
pub const PT_BTN_BUY: &str = "🛒 Comprar Casa";
pub const PT_BTN_DETAILS: &str = "👁️";
pub const PT_BTN_EDIT: &str = "✏️";
pub const PT_BTN_DELETE: &str = "🗑️";
pub const PT_BTN_EDIT_HOUSE: &str = "✏️ Editar";
pub const PT_BTN_DELETE_HOUSE: &str = "🗑️ Excluir";
pub const PT_BTN_CONFIRM: &str = "Confirmar";
pub const PT_BTN_CANCEL: &str = "Cancelar";
pub const PT_BTN_SAVE: &str = "Salvar";
pub const PT_BTN_CREATE: &str = "🏠 Criar Casa";
pub const PT_BTN_ADD_POINT: &str = "+ Ponto";
pub const PT_BTN_REMOVE_POINT: &str = "- Ponto";
pub const PT_ROLE_PICK_TENANT: &str = "🏠 Morador";
pub const PT_ROLE_PICK_OWNER: &str = "👑 Dono";

pub const PT_HOVER_PROMOTE: &str = "Promover a Dono";
pub const PT_HOVER_REMOVE: &str = "Remover";
pub const PT_HOVER_DETAILS: &str = "Ver detalhes";
pub const PT_HOVER_EDIT: &str = "Editar";
pub const PT_HOVER_DELETE: &str = "Excluir";

pub const PT_MODAL_BUY: &str = "🛒 Comprar Casa";
pub const PT_MODAL_TAX: &str = "💳 Pagar Taxa";
pub const PT_MODAL_ADD_MEMBER: &str = "👤 Adicionar Pessoa";
pub const PT_MODAL_ADMIN_ADD_MEMBER: &str = "👤 Adicionar Pessoa (Admin)";
pub const PT_MODAL_ADMIN_SET_OWNER: &str = "👑 Definir Dono (Admin)";
pub const PT_MODAL_EDIT: &str = "✏️ Editar Casa";
pub const PT_MODAL_DELETE: &str = "🗑️ Excluir Casa";
pub const PT_DELETE_CONFIRM: &str = "Tem certeza que deseja excluir esta casa?";

pub const PT_FIELD_NAME: &str = "Nome *";
pub const PT_FIELD_ADDRESS: &str = "Endereço *";
pub const PT_FIELD_PRICE: &str = "Preço *";
pub const PT_FIELD_TAX: &str = "Taxa Mensal *";
pub const PT_FIELD_DUE_DATE: &str = "Vencimento";
pub const PT_FIELD_ENTRY: &str = "Entrada (X, Y, Z)";
pub const PT_FIELD_HEADING: &str = "Heading";
pub const PT_FIELD_MEMBER_NAME: &str = "Nome";
pub const PT_FIELD_MEMBER_CID: &str = "Citizen ID";
pub const PT_HINT_ENTRY: &str = "1239.5, -2350.6, 45.2";

pub const PT_WARN_OWNER_REPLACE_PREFIX: &str = "⚠️ Esta casa já tem um dono (";
pub const PT_WARN_OWNER_REPLACE_SUFFIX: &str =
    "). Ao definir um novo dono, o atual será rebaixado para morador.";
pub const PT_WARN_NO_OWNER: &str =
    "✅ Esta casa não tem dono. O jogador será definido como proprietário.";
pub const PT_INFO_TENANT: &str =
    "ℹ️ O morador terá acesso à PolyZone mas não poderá gerenciar a casa.";

pub const PT_TOAST_NO_ADMIN: &str = "Você não tem permissão de administrador.";
pub const PT_TOAST_SENDING: &str = "Enviando... aguarde confirmação do servidor.";

// Validation failures (surfaced as error toasts).
pub const PT_ERR_MEMBER_FIELDS: &str = "Preencha nome e Citizen ID!";
pub const PT_ERR_EDIT_FIELDS: &str = "Preencha nome e endereço!";
pub const PT_ERR_CREATE_FIELDS: &str = "Preencha todos os campos obrigatórios (*)";
pub const PT_ERR_MIN_POINTS_PREFIX: &str = "Mínimo";
pub const PT_ERR_MIN_POINTS_SUFFIX: &str = "pontos!";

// Preview shell
pub const PT_HIDDEN_HEADING: &str = "Painel fechado";
pub const PT_HIDDEN_HINT: &str = "Aguardando o servidor abrir o painel (openUI).";
pub const PT_BTN_TOGGLE_THEME: &str = "🌓";
