use leptos::prelude::*;

struct FooterColumn {
    title: &'static str,
    links: &'static [(&'static str, &'static str)],
}

const COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        title: "Platform",
        links: &[
            ("About", "/about"),
            ("Community", "/community"),
            ("Organizers", "/organizers"),
        ],
    },
    FooterColumn {
        title: "Support",
        links: &[("FAQ", "/faq"), ("Contact", "/contact")],
    },
    FooterColumn {
        title: "Legal",
        links: &[("Privacy policy", "/privacy"), ("Terms of service", "/terms")],
    },
];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__inner">
                <div class="footer__brand">
                    <span class="navbar__logo">"UinSports"</span>
                    <p class="footer__tagline">
                        "The network where athletes, teams and organizers find each other."
                    </p>
                </div>
                {COLUMNS
                    .iter()
                    .map(|column| {
                        view! {
                            <div class="footer__column">
                                <div class="footer__column-title">{column.title}</div>
                                {column
                                    .links
                                    .iter()
                                    .map(|(label, href)| {
                                        view! {
                                            <a class="footer__link" href=*href>
                                                {*label}
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="footer__bottom">"© 2026 UinSports. All rights reserved."</div>
        </footer>
    }
}
