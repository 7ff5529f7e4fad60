pub mod get_person_details;
pub mod search_people;

pub use get_person_details::{GetPersonDetailsUseCase, PersonDetails};
pub use search_people::SearchPeopleUseCase;
