//! Adult record and its stored document shape.

use super::person::{age_on, first_name_of, parse_birthdate, Address, Housing};
use super::{document_to_fields, Fields, RecordId, ShapeError, StoredRecord};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Flat persisted shape of an adult, one key per form field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdultDocument {
    pub adult_name: String,
    pub adult_gender: String,
    pub adult_birthdate: String,
    pub adult_cpf: String,
    pub adult_rg: String,
    pub adult_ethnicity: String,
    pub adult_religion: String,
    pub adult_marital_status: String,
    pub adult_household_income: String,
    /// People living in the household, as typed (`"1"` by default).
    pub adult_residents: String,
    pub adult_housing: Housing,
    pub adult_address: Address,
    pub adult_contacts: Vec<String>,
    pub adult_activities: Vec<String>,
}

impl AdultDocument {
    pub fn to_fields(&self) -> Fields {
        document_to_fields(self)
    }
}

/// Hydrated adult, materialized on read and discarded after use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdultRecord {
    id: RecordId,
    name: String,
    first_name: String,
    pub gender: String,
    pub birthdate: String,
    pub cpf: String,
    pub rg: String,
    pub ethnicity: String,
    pub religion: String,
    pub marital_status: String,
    pub household_income: String,
    pub residents: String,
    pub housing: Housing,
    pub address: Address,
    pub contacts: Vec<String>,
    pub activities: Vec<String>,
}

impl AdultRecord {
    pub fn from_document(id: RecordId, document: AdultDocument) -> Self {
        let first_name = first_name_of(&document.adult_name).to_string();
        Self {
            id,
            name: document.adult_name,
            first_name,
            gender: document.adult_gender,
            birthdate: document.adult_birthdate,
            cpf: document.adult_cpf,
            rg: document.adult_rg,
            ethnicity: document.adult_ethnicity,
            religion: document.adult_religion,
            marital_status: document.adult_marital_status,
            household_income: document.adult_household_income,
            residents: document.adult_residents,
            housing: document.adult_housing,
            address: document.adult_address,
            contacts: document.adult_contacts,
            activities: document.adult_activities,
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

    pub fn age_on(&self, today: NaiveDate) -> Option<u32> {
        parse_birthdate(&self.birthdate).and_then(|birthdate| age_on(birthdate, today))
    }

    pub fn to_document(&self) -> AdultDocument {
        AdultDocument {
            adult_name: self.name.clone(),
            adult_gender: self.gender.clone(),
            adult_birthdate: self.birthdate.clone(),
            adult_cpf: self.cpf.clone(),
            adult_rg: self.rg.clone(),
            adult_ethnicity: self.ethnicity.clone(),
            adult_religion: self.religion.clone(),
            adult_marital_status: self.marital_status.clone(),
            adult_household_income: self.household_income.clone(),
            adult_residents: self.residents.clone(),
            adult_housing: self.housing.clone(),
            adult_address: self.address.clone(),
            adult_contacts: self.contacts.clone(),
            adult_activities: self.activities.clone(),
        }
    }

    pub fn to_fields(&self) -> Fields {
        self.to_document().to_fields()
    }
}

impl StoredRecord for AdultRecord {
    const TABLE: &'static str = "adults";

    fn hydrate(id: RecordId, fields: Fields) -> Result<Self, ShapeError> {
        let document: AdultDocument = serde_json::from_value(Value::Object(fields))?;
        Ok(Self::from_document(id, document))
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn activities(&self) -> &[String] {
        &self.activities
    }
}
