pub mod about;
pub mod athlete_profile;
pub mod community;
pub mod contact;
pub mod faq;
pub mod home;
pub mod not_found;
pub mod organizer_profile;
pub mod organizers;
pub mod privacy;
pub mod terms;
