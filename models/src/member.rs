// models/src/member.rs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ValidationResult;
use crate::resource::{Resource, require_non_empty};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalDetails {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub gender: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarePlan {
    pub start_date: String,
    pub end_date: String,
    pub plan: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medication {
    pub name: String,
    pub dosage: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyContact {
    pub relation: String,
    pub name: String,
    pub contact: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessibilityRequirement {
    pub requirement: String,
}

/// A resident record: personal details plus the nested lists the member
/// screen maintains (care plans, medications, family contacts,
/// accessibility requirements).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    #[serde(default)]
    pub id: String,
    pub personal_details: PersonalDetails,
    #[serde(default)]
    pub care_plans: Vec<CarePlan>,
    #[serde(default)]
    pub medications: Vec<Medication>,
    #[serde(default)]
    pub family_contacts: Vec<FamilyContact>,
    #[serde(default)]
    pub accessibility_requirements: Vec<AccessibilityRequirement>,
}

impl Resource for Member {
    const COLLECTION: &'static str = "members";

    fn key(&self) -> String {
        self.id.clone()
    }

    fn prepare(&mut self) {
        if self.id.trim().is_empty() {
            self.id = Uuid::new_v4().to_string();
        }
    }

    fn validate(&self) -> ValidationResult<()> {
        require_non_empty(&[&self.personal_details.name])
    }
}

#[cfg(test)]
mod tests {
    use super::{Member, PersonalDetails};
    use crate::errors::ValidationError;
    use crate::resource::Resource;

    #[test]
    fn member_needs_a_name() {
        let member = Member {
            id: String::new(),
            personal_details: PersonalDetails::default(),
            care_plans: vec![],
            medications: vec![],
            family_contacts: vec![],
            accessibility_requirements: vec![],
        };
        assert_eq!(member.validate(), Err(ValidationError::MissingFields));
    }

    #[test]
    fn nested_lists_round_trip() {
        let json = serde_json::json!({
            "personalDetails": {"name": "Edna Moore", "age": "84", "gender": "Female"},
            "carePlans": [{"startDate": "2026-01-01", "endDate": "2026-06-30", "plan": "Mobility"}],
            "medications": [{"name": "Metformin", "dosage": "500mg"}],
            "familyContacts": [{"relation": "Son", "name": "Ray Moore", "contact": "0400 000 000"}],
            "accessibilityRequirements": [{"requirement": "Wheelchair access"}]
        });
        let member: Member = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(member.care_plans.len(), 1);
        let back = serde_json::to_value(&member).unwrap();
        assert_eq!(back["medications"], json["medications"]);
    }
}
