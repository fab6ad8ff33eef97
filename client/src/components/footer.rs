//! Static site footer.

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

use leptos::prelude::*;

#[derive(Clone, Copy)]
struct FooterSection {
    title: &'static str,
    links: &'static [&'static str],
}

const SECTIONS: &[FooterSection] = &[
    FooterSection {
        title: "For Job Seekers",
        links: &["Browse Jobs", "Career Advice", "Upload Resume", "Job Alerts"],
    },
    FooterSection {
        title: "For Employers",
        links: &["Post a Job", "Browse Candidates", "Recruiting Solutions", "Pricing"],
    },
    FooterSection { title: "About Us", links: &["Our Story", "Press", "Careers", "Contact Us"] },
];

const SOCIAL_ICONS: &[&str] = &["📘", "🐦", "📸", "🔗"];

const COPYRIGHT: &str = "© 2024 JobPlatform. All rights reserved.";

/// Footer with link columns. Every link is a placeholder.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__inner">
                {SECTIONS
                    .iter()
                    .map(|section| {
                        view! {
                            <div class="site-footer__section">
                                <h3 class="site-footer__title">{section.title}</h3>
                                {section
                                    .links
                                    .iter()
                                    .map(|link| view! { <a href="#" class="site-footer__link">{*link}</a> })
                                    .collect_view()}
                            </div>
                        }
                    })
                    .collect_view()}
                <div class="site-footer__section">
                    <h3 class="site-footer__title">"Connect With Us"</h3>
                    <div>
                        {SOCIAL_ICONS
                            .iter()
                            .map(|icon| view! { <a href="#" class="site-footer__social">{*icon}</a> })
                            .collect_view()}
                    </div>
                </div>
                <div class="site-footer__copyright">
                    {COPYRIGHT}
                    " | "
                    <a href="#" class="site-footer__link">"Privacy Policy"</a>
                    " | "
                    <a href="#" class="site-footer__link">"Terms of Service"</a>
                </div>
            </div>
        </footer>
    }
}
