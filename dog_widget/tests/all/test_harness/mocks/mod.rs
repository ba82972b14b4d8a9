mod dog_facts_api;

pub use dog_breeds_api::MockDogBreedsApi;
pub use dog_facts_api::MockDogFactsApi;
