//! Child record and its stored document shape.
//!
//! # Invariants
//! - A child document has exactly the keys of [`ChildDocument`]; anything else
//!   fails hydration.
//! - Guardian data is embedded in the child document (`parent_*` keys).

use super::person::{age_on, first_name_of, parse_birthdate, Address, Housing};
use super::{document_to_fields, Fields, RecordId, ShapeError, StoredRecord};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Flat persisted shape of a child, one key per form field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChildDocument {
    pub child_name: String,
    pub child_gender: String,
    pub child_birthdate: String,
    pub child_cpf: String,
    pub child_rg: String,
    pub child_ethnicity: String,
    pub child_religion: String,
    pub child_clothing_number: String,
    pub child_shoe_number: String,
    pub child_school_name: String,
    pub child_school_degree: String,
    pub child_school_period: String,
    pub child_activities: Vec<String>,
    pub parent_name: String,
    pub parent_gender: String,
    pub parent_birthdate: String,
    pub parent_cpf: String,
    pub parent_rg: String,
    pub parent_household_income: String,
    pub parent_housing: Housing,
    pub parent_authorization: String,
    pub parent_address: Address,
    pub parent_contacts: Vec<String>,
}

impl ChildDocument {
    /// Field mapping ready for `insert`/`update`.
    pub fn to_fields(&self) -> Fields {
        document_to_fields(self)
    }
}

/// Legal guardian embedded in a child record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Guardian {
    pub name: String,
    pub gender: String,
    pub birthdate: String,
    pub cpf: String,
    pub rg: String,
    pub household_income: String,
    pub housing: Housing,
    /// Whether the child may take part in physical exercise (`Sim`/`Não`).
    pub exercise_authorization: String,
    pub address: Address,
    pub contacts: Vec<String>,
}

/// Hydrated child, materialized on read and discarded after use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildRecord {
    id: RecordId,
    name: String,
    first_name: String,
    pub gender: String,
    pub birthdate: String,
    pub cpf: String,
    pub rg: String,
    pub ethnicity: String,
    pub religion: String,
    pub clothing_size: String,
    pub shoe_size: String,
    pub school_name: String,
    pub school_degree: String,
    pub school_period: String,
    pub activities: Vec<String>,
    pub guardian: Guardian,
}

impl ChildRecord {
    /// Builds a record for store document `id`.
    pub fn from_document(id: RecordId, document: ChildDocument) -> Self {
        let first_name = first_name_of(&document.child_name).to_string();
        Self {
            id,
            name: document.child_name,
            first_name,
            gender: document.child_gender,
            birthdate: document.child_birthdate,
            cpf: document.child_cpf,
            rg: document.child_rg,
            ethnicity: document.child_ethnicity,
            religion: document.child_religion,
            clothing_size: document.child_clothing_number,
            shoe_size: document.child_shoe_number,
            school_name: document.child_school_name,
            school_degree: document.child_school_degree,
            school_period: document.child_school_period,
            activities: document.child_activities,
            guardian: Guardian {
                name: document.parent_name,
                gender: document.parent_gender,
                birthdate: document.parent_birthdate,
                cpf: document.parent_cpf,
                rg: document.parent_rg,
                household_income: document.parent_household_income,
                housing: document.parent_housing,
                exercise_authorization: document.parent_authorization,
                address: document.parent_address,
                contacts: document.parent_contacts,
            },
        }
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Replaces the name and re-derives the first name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.first_name = first_name_of(&self.name).to_string();
    }

    /// Age in completed years, when the birthdate text is a recognised date.
    pub fn age_on(&self, today: NaiveDate) -> Option<u32> {
        parse_birthdate(&self.birthdate).and_then(|birthdate| age_on(birthdate, today))
    }

    /// Persisted shape of this record, without id or derived fields.
    pub fn to_document(&self) -> ChildDocument {
        ChildDocument {
            child_name: self.name.clone(),
            child_gender: self.gender.clone(),
            child_birthdate: self.birthdate.clone(),
            child_cpf: self.cpf.clone(),
            child_rg: self.rg.clone(),
            child_ethnicity: self.ethnicity.clone(),
            child_religion: self.religion.clone(),
            child_clothing_number: self.clothing_size.clone(),
            child_shoe_number: self.shoe_size.clone(),
            child_school_name: self.school_name.clone(),
            child_school_degree: self.school_degree.clone(),
            child_school_period: self.school_period.clone(),
            child_activities: self.activities.clone(),
            parent_name: self.guardian.name.clone(),
            parent_gender: self.guardian.gender.clone(),
            parent_birthdate: self.guardian.birthdate.clone(),
            parent_cpf: self.guardian.cpf.clone(),
            parent_rg: self.guardian.rg.clone(),
            parent_household_income: self.guardian.household_income.clone(),
            parent_housing: self.guardian.housing.clone(),
            parent_authorization: self.guardian.exercise_authorization.clone(),
            parent_address: self.guardian.address.clone(),
            parent_contacts: self.guardian.contacts.clone(),
        }
    }

    pub fn to_fields(&self) -> Fields {
        self.to_document().to_fields()
    }
}

impl StoredRecord for ChildRecord {
    const TABLE: &'static str = "children";

    fn hydrate(id: RecordId, fields: Fields) -> Result<Self, ShapeError> {
        let document: ChildDocument = serde_json::from_value(Value::Object(fields))?;
        Ok(Self::from_document(id, document))
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn activities(&self) -> &[String] {
        &self.activities
    }
}
