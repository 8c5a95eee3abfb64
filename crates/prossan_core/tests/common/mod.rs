#![allow(dead_code)]

use prossan_core::{Address, AdultDocument, ChildDocument, Housing, RegistryService, Store, StoreConfig};
use tempfile::TempDir;

/// Store file inside a fresh temporary directory; keep the `TempDir` alive.
pub fn temp_store() -> (TempDir, Store) {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig::new(dir.path().join("database.db")).unwrap();
    (dir, Store::new(&config))
}

pub fn temp_service() -> (TempDir, RegistryService) {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig::new(dir.path().join("database.db")).unwrap();
    (dir, RegistryService::new(&config))
}

pub fn child_document(name: &str, activities: &[&str]) -> ChildDocument {
    ChildDocument {
        child_name: name.to_string(),
        child_gender: "Feminino".to_string(),
        child_birthdate: "03/14/2015".to_string(),
        child_cpf: "123.456.789-00".to_string(),
        child_rg: "MG-12.345.678".to_string(),
        child_ethnicity: "Parda".to_string(),
        child_religion: "Católica".to_string(),
        child_clothing_number: "10".to_string(),
        child_shoe_number: "30".to_string(),
        child_school_name: "E. E. Monsenhor José Paulino".to_string(),
        child_school_degree: "Fundamental".to_string(),
        child_school_period: "Manhã".to_string(),
        child_activities: activities.iter().map(|tag| tag.to_string()).collect(),
        parent_name: "Rosa Silva".to_string(),
        parent_gender: "Feminino".to_string(),
        parent_birthdate: "05/20/1988".to_string(),
        parent_cpf: "987.654.321-00".to_string(),
        parent_rg: "MG-98.765.432".to_string(),
        parent_household_income: "Até 1 salário mínimo".to_string(),
        parent_housing: Housing::new("Alugada", "450.00"),
        parent_authorization: "Sim".to_string(),
        parent_address: Address::new("Rua das Flores, 10", "Santo Antônio", "Pouso Alegre", "MG"),
        parent_contacts: vec!["(35) 99999-0000".to_string()],
    }
}

pub fn adult_document(name: &str, cpf: &str, rg: &str, activities: &[&str]) -> AdultDocument {
    AdultDocument {
        adult_name: name.to_string(),
        adult_gender: "Masculino".to_string(),
        adult_birthdate: "07-02-1980".to_string(),
        adult_cpf: cpf.to_string(),
        adult_rg: rg.to_string(),
        adult_ethnicity: "Branca".to_string(),
        adult_religion: "Evangélica".to_string(),
        adult_marital_status: "Casado".to_string(),
        adult_household_income: "De 1 a 2 salários mínimos".to_string(),
        adult_residents: "4".to_string(),
        adult_housing: Housing::new("Própria", ""),
        adult_address: Address::new("Praça Central, 1", "Centro", "Pouso Alegre", "MG"),
        adult_contacts: vec!["(35) 98888-1111".to_string(), "(35) 3421-0000".to_string()],
        adult_activities: activities.iter().map(|tag| tag.to_string()).collect(),
    }
}
