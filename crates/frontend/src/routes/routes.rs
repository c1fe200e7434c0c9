use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::layout::{Footer, NavBar};
use crate::pages::about::AboutPage;
use crate::pages::athlete_profile::AthleteProfilePage;
use crate::pages::community::CommunityPage;
use crate::pages::contact::ContactPage;
use crate::pages::faq::FaqPage;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::organizer_profile::OrganizerProfilePage;
use crate::pages::organizers::OrganizersPage;
use crate::pages::privacy::PrivacyPage;
use crate::pages::terms::TermsPage;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <NavBar />
            <main class="page">
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/community") view=CommunityPage />
                    <Route path=path!("/organizers") view=OrganizersPage />
                    <Route path=path!("/faq") view=FaqPage />
                    <Route path=path!("/contact") view=ContactPage />
                    <Route path=path!("/privacy") view=PrivacyPage />
                    <Route path=path!("/terms") view=TermsPage />
                    <Route path=path!("/athletes/:id") view=AthleteProfilePage />
                    <Route path=path!("/profile/organizer") view=OrganizerProfilePage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}
