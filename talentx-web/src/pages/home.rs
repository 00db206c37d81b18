use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;

use crate::routes::MainRoute;

const FEATURES: &[(&str, &str, IconId)] = &[
    (
        "AI-Powered Matching",
        "Our AI analyzes skills and preferences to match you with the right opportunities.",
        IconId::HeroiconsOutlineSparkles,
    ),
    (
        "Premium Talent Pool",
        "Access thousands of verified AI/ML professionals and data scientists.",
        IconId::HeroiconsOutlineUsers,
    ),
    (
        "Lightning Fast",
        "Apply and connect in minutes with a streamlined hiring process.",
        IconId::HeroiconsOutlineBolt,
    ),
    (
        "Verified Profiles",
        "Candidates go through a rigorous verification process.",
        IconId::HeroiconsOutlineShieldCheck,
    ),
];

const STATS: &[(&str, &str)] = &[
    ("10K+", "Active Talents"),
    ("5K+", "Companies"),
    ("50K+", "Job Matches"),
    ("98%", "Satisfaction"),
];

/// Public landing page with its own slim navbar and footer.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let (i18n, ..) = use_translation();

    html! {
        <div class="min-h-screen bg-base-200">
            <nav class="navbar sticky top-0 z-50 bg-base-100 border-b border-base-300">
                <div class="flex-1">
                    <Link<MainRoute> to={MainRoute::Home} classes="btn btn-ghost text-lg font-bold gap-2">
                        <Icon icon_id={IconId::HeroiconsSolidBriefcase} class="w-6 h-6 text-primary" />
                        { i18n.t("app.title") }
                    </Link<MainRoute>>
                </div>
                <div class="flex items-center gap-3">
                    <Link<MainRoute> to={MainRoute::Login} classes="btn btn-ghost btn-sm">
                        { i18n.t("header.login") }
                    </Link<MainRoute>>
                    <Link<MainRoute> to={MainRoute::Signup} classes="btn btn-primary btn-sm">
                        { i18n.t("header.signup") }
                    </Link<MainRoute>>
                </div>
            </nav>

            <section class="py-20 text-center px-4">
                <div class="badge badge-primary badge-outline gap-2 mb-6">
                    <Icon icon_id={IconId::HeroiconsOutlineSparkles} class="w-4 h-4" />
                    { i18n.t("app.tagline") }
                </div>
                <h1 class="text-4xl md:text-6xl font-bold mb-6">
                    {"Find Your Dream AI/ML Job"}
                    <br />
                    {"or Hire Top Talent"}
                </h1>
                <p class="text-lg text-base-content/70 max-w-3xl mx-auto mb-8">
                    {"Connect with leading companies and AI professionals through an intelligent matching system."}
                </p>
                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <Link<MainRoute> to={MainRoute::Signup} classes="btn btn-primary btn-lg">
                        {"Find Jobs"}
                        <Icon icon_id={IconId::HeroiconsOutlineArrowRight} class="w-5 h-5" />
                    </Link<MainRoute>>
                    <Link<MainRoute> to={MainRoute::Signup} classes="btn btn-lg">
                        {"Post a Job"}
                        <Icon icon_id={IconId::HeroiconsOutlineBriefcase} class="w-5 h-5" />
                    </Link<MainRoute>>
                </div>
                <div class="mt-16 grid grid-cols-2 md:grid-cols-4 gap-6 max-w-4xl mx-auto">
                    { for STATS.iter().map(|(value, label)| html! {
                        <div class="text-center">
                            <div class="text-3xl md:text-4xl font-bold text-primary">{ *value }</div>
                            <div class="text-sm text-base-content/60 mt-1">{ *label }</div>
                        </div>
                    }) }
                </div>
            </section>

            <section class="py-20 bg-base-100">
                <div class="max-w-6xl mx-auto px-4">
                    <div class="text-center mb-16">
                        <h2 class="text-3xl md:text-4xl font-bold mb-4">{"Why Choose TalentX?"}</h2>
                        <p class="text-lg text-base-content/70">
                            {"Built with modern technology for the best hiring and job search experience."}
                        </p>
                    </div>
                    <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6">
                        { for FEATURES.iter().map(|(title, description, icon)| html! {
                            <div class="card bg-base-200 hover:shadow-lg transition-shadow">
                                <div class="card-body">
                                    <Icon icon_id={*icon} class="w-8 h-8 text-primary" />
                                    <h3 class="card-title text-lg">{ *title }</h3>
                                    <p class="text-base-content/70">{ *description }</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="py-20 bg-primary text-primary-content text-center px-4">
                <h2 class="text-3xl md:text-4xl font-bold mb-4">{"Ready to Transform Your Hiring?"}</h2>
                <p class="text-lg opacity-80 mb-8">
                    {"Join thousands of companies and professionals already using TalentX."}
                </p>
                <Link<MainRoute> to={MainRoute::Signup} classes="btn btn-lg">
                    {"Get Started Free"}
                    <Icon icon_id={IconId::HeroiconsOutlineArrowRight} class="w-5 h-5" />
                </Link<MainRoute>>
            </section>

            <footer class="footer footer-center p-8 bg-neutral text-neutral-content">
                <div>
                    <p class="font-bold flex items-center gap-2">
                        <Icon icon_id={IconId::HeroiconsSolidBriefcase} class="w-5 h-5" />
                        { i18n.t("app.title") }
                    </p>
                    <p>{ i18n.t("footer.copyright") }</p>
                </div>
            </footer>
        </div>
    }
}
