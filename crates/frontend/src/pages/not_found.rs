use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="content-section not-found">
            <h1>"Page not found"</h1>
            <p>
                "The page you are looking for does not exist. "
                <a href="/">"Back to the home page"</a>
            </p>
        </section>
    }
}
