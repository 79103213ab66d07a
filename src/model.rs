use crate::lenient;
use crate::statics;
use serde::{Deserialize, Serialize};

pub type HouseId = i64;
pub type MemberId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HouseStatus {
    #[default]
    Available,
    Occupied,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    Owner,
    #[default]
    #[serde(other)]
    Tenant,
}

/// A ground-plane boundary point (or any plain x/y/z triple).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Point3 {
    #[serde(deserialize_with = "lenient::float_field")]
    pub x: f64,
    #[serde(deserialize_with = "lenient::float_field")]
    pub y: f64,
    #[serde(deserialize_with = "lenient::float_field")]
    pub z: f64,
}

impl Point3 {
    pub const ZERO: Point3 = Point3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryCoord {
    #[serde(deserialize_with = "lenient::float_field")]
    pub x: f64,
    #[serde(deserialize_with = "lenient::float_field")]
    pub y: f64,
    #[serde(deserialize_with = "lenient::float_field")]
    pub z: f64,
    #[serde(deserialize_with = "lenient::float_field")]
    pub heading: f64,
}

impl EntryCoord {
    pub fn from_point(p: Point3, heading: f64) -> Self {
        Self {
            x: p.x,
            y: p.y,
            z: p.z,
            heading,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Member {
    #[serde(deserialize_with = "lenient::id_field")]
    pub id: MemberId,
    #[serde(deserialize_with = "lenient::string_field")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string_field")]
    pub citizen_id: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub role: MemberRole,
    #[serde(deserialize_with = "lenient::string_field")]
    pub added_at: String,
}

impl Member {
    pub fn is_owner(&self) -> bool {
        self.role == MemberRole::Owner
    }
}

/// A house record as supplied by the host. Never mutated client-side; the whole list is
/// replaced on every `openUI`/`updateHouses`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct House {
    #[serde(deserialize_with = "lenient::id_field")]
    pub id: HouseId,
    #[serde(deserialize_with = "lenient::string_field")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string_field")]
    pub address: String,
    #[serde(deserialize_with = "lenient::float_field")]
    pub price: f64,
    #[serde(deserialize_with = "lenient::float_field")]
    pub tax_value: f64,
    #[serde(deserialize_with = "lenient::string_field")]
    pub tax_due_date: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub status: HouseStatus,
    #[serde(deserialize_with = "lenient::bool_field")]
    pub is_locked: bool,
    #[serde(deserialize_with = "lenient::or_default")]
    pub entry_coord: EntryCoord,
    #[serde(deserialize_with = "lenient::list_field")]
    pub polyzone: Vec<Point3>,
    #[serde(deserialize_with = "lenient::list_field")]
    pub members: Vec<Member>,
    #[serde(deserialize_with = "lenient::opt_id_field")]
    pub owner_id: Option<MemberId>,
    #[serde(deserialize_with = "lenient::opt_string_field")]
    pub owner_name: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string_field")]
    pub owner_citizen_id: Option<String>,
    #[serde(deserialize_with = "lenient::string_field")]
    pub created_at: String,
}

impl House {
    pub fn is_available(&self) -> bool {
        self.status == HouseStatus::Available
    }

    pub fn is_occupied(&self) -> bool {
        self.status == HouseStatus::Occupied
    }

    pub fn member_by_citizen(&self, citizen_id: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.citizen_id == citizen_id)
    }

    pub fn has_member(&self, citizen_id: &str) -> bool {
        self.member_by_citizen(citizen_id).is_some()
    }

    pub fn role_of(&self, citizen_id: &str) -> Option<MemberRole> {
        self.member_by_citizen(citizen_id).map(|m| m.role)
    }

    /// The member flagged as owner, looked up in `members` rather than the cached
    /// `owner_*` fields.
    pub fn current_owner(&self) -> Option<&Member> {
        self.members.iter().find(|m| m.is_owner())
    }

    /// Cached owner name, treating an empty string as absent.
    pub fn owner_display(&self) -> Option<(&str, &str)> {
        let name = self.owner_name.as_deref().filter(|n| !n.is_empty())?;
        let cid = self.owner_citizen_id.as_deref().unwrap_or_default();
        Some((name, cid))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Player {
    #[serde(deserialize_with = "lenient::string_field")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string_field")]
    pub citizen_id: String,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            name: statics::PT_PLAYER_FALLBACK_NAME.to_string(),
            citizen_id: statics::PT_PLAYER_FALLBACK_CID.to_string(),
        }
    }
}

/// Uppercased first character, used for avatar bubbles.
pub fn initial_of(name: &str, fallback: char) -> String {
    name.chars()
        .next()
        .unwrap_or(fallback)
        .to_uppercase()
        .collect()
}
