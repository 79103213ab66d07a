use crate::bridge::HouseDraft;
use crate::error::ValidationError;
use crate::format::{fmt_coord, fmt_coord_triplet, parse_coord_string, parse_float_or_zero};
use crate::model::{EntryCoord, House, Point3};
use crate::polygon::PolyEditor;

/// Text buffers of the "add person" dialogs (player and admin).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemberForm {
    pub name: String,
    pub citizen_id: String,
}

impl MemberForm {
    pub fn clear(&mut self) {
        self.name.clear();
        self.citizen_id.clear();
    }

    /// Trimmed `(name, citizen_id)`; both are required.
    pub fn validate(&self) -> Result<(String, String), ValidationError> {
        let name = self.name.trim();
        let cid = self.citizen_id.trim();
        if name.is_empty() || cid.is_empty() {
            return Err(ValidationError::MissingMemberFields);
        }
        Ok((name.to_string(), cid.to_string()))
    }
}

/// Buffers of the create form and the edit dialog. Numbers stay as text until
/// submission so half-typed input is never rejected mid-edit.
#[derive(Debug, Clone, PartialEq)]
pub struct HouseForm {
    pub name: String,
    pub address: String,
    pub price: String,
    pub tax_value: String,
    pub tax_due_date: String,
    pub entry_coord: String,
    pub heading: String,
    pub poly: PolyEditor,
}

impl HouseForm {
    pub fn blank(poly_points: usize, min_poly_points: usize) -> Self {
        Self {
            name: String::new(),
            address: String::new(),
            price: String::new(),
            tax_value: String::new(),
            tax_due_date: String::new(),
            entry_coord: String::new(),
            heading: String::new(),
            poly: PolyEditor::zeroed(poly_points, min_poly_points),
        }
    }

    pub fn from_house(house: &House, min_poly_points: usize) -> Self {
        let entry = house.entry_coord;
        Self {
            name: house.name.clone(),
            address: house.address.clone(),
            price: fmt_coord(house.price),
            tax_value: fmt_coord(house.tax_value),
            tax_due_date: house.tax_due_date.clone(),
            entry_coord: fmt_coord_triplet(Point3::new(entry.x, entry.y, entry.z)),
            heading: fmt_coord(entry.heading),
            poly: PolyEditor::from_points(&house.polyzone, min_poly_points),
        }
    }

    fn draft(&self) -> HouseDraft {
        let coord = parse_coord_string(&self.entry_coord);
        HouseDraft {
            name: self.name.trim().to_string(),
            address: self.address.trim().to_string(),
            price: parse_float_or_zero(&self.price),
            tax_value: parse_float_or_zero(&self.tax_value),
            tax_due_date: self.tax_due_date.clone(),
            entry_coord: EntryCoord::from_point(coord, parse_float_or_zero(&self.heading)),
            polyzone: self.poly.points().to_vec(),
        }
    }

    /// Create requires name, address and non-zero price and tax.
    pub fn to_create_draft(&self) -> Result<HouseDraft, ValidationError> {
        let draft = self.draft();
        if draft.name.is_empty()
            || draft.address.is_empty()
            || draft.price == 0.0
            || draft.tax_value == 0.0
        {
            return Err(ValidationError::MissingRequiredFields);
        }
        self.poly.validate()?;
        Ok(draft)
    }

    /// Edit only requires name and address; zero price/tax are allowed.
    pub fn to_edit_draft(&self) -> Result<HouseDraft, ValidationError> {
        let draft = self.draft();
        if draft.name.is_empty() || draft.address.is_empty() {
            return Err(ValidationError::MissingNameOrAddress);
        }
        self.poly.validate()?;
        Ok(draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> HouseForm {
        let mut f = HouseForm::blank(4, 3);
        f.name = "  Casa Nova ".to_string();
        f.address = "Rua 1".to_string();
        f.price = "350000".to_string();
        f.tax_value = "5000".to_string();
        f.entry_coord = "1239.5, -2350.6, 45.2".to_string();
        f.heading = "180".to_string();
        f
    }

    #[test]
    fn member_form_trims_and_requires_both_fields() {
        let mut f = MemberForm {
            name: "  Ana ".to_string(),
            citizen_id: " ".to_string(),
        };
        assert_eq!(f.validate(), Err(ValidationError::MissingMemberFields));
        f.citizen_id = "A1".to_string();
        assert_eq!(f.validate(), Ok(("Ana".to_string(), "A1".to_string())));
    }

    #[test]
    fn create_draft_parses_coordinates_and_numbers() {
        let draft = filled().to_create_draft().unwrap();
        assert_eq!(draft.name, "Casa Nova");
        assert_eq!(draft.price, 350000.0);
        assert_eq!(draft.entry_coord.x, 1239.5);
        assert_eq!(draft.entry_coord.y, -2350.6);
        assert_eq!(draft.entry_coord.heading, 180.0);
        assert_eq!(draft.polyzone.len(), 4);
        assert_eq!(draft.tax_due_date, "");
    }

    #[test]
    fn create_draft_requires_price_and_tax() {
        let mut f = filled();
        f.tax_value = "abc".to_string();
        assert_eq!(f.to_create_draft(), Err(ValidationError::MissingRequiredFields));
    }

    #[test]
    fn edit_draft_allows_zero_price_but_not_empty_address() {
        let mut f = filled();
        f.price.clear();
        assert!(f.to_edit_draft().is_ok());
        f.address = "   ".to_string();
        assert_eq!(f.to_edit_draft(), Err(ValidationError::MissingNameOrAddress));
    }

    #[test]
    fn from_house_prefills_coordinate_string() {
        let house = House {
            name: "Villa".to_string(),
            entry_coord: EntryCoord {
                x: 455.1,
                y: -1008.3,
                z: 30.5,
                heading: 270.0,
            },
            polyzone: vec![Point3::new(1.0, 2.0, 3.0); 4],
            ..Default::default()
        };
        let f = HouseForm::from_house(&house, 3);
        assert_eq!(f.entry_coord, "455.1, -1008.3, 30.5");
        assert_eq!(f.heading, "270");
        assert_eq!(f.poly.points(), house.polyzone.as_slice());
    }
}
