pub mod dog_breeds_api;
pub mod dog_facts_api;
