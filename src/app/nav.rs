use leptos::prelude::*;
use leptos_router::components::*;

use crate::{
    content::{NAV_LINKS, PROFILE},
    scroll::ScrollState,
};

#[component]
pub fn NavBar() -> impl IntoView {
    let scroll = expect_context::<Signal<ScrollState>>();
    let active = Memo::new(move |_| scroll.with(|s| s.active_section_id.clone()));
    let scrolled = Memo::new(move |_| scroll.with(|s| s.scroll_y > 8.0));

    view! {
        <header class=move || {
            if scrolled.get() {
                "fixed top-0 inset-x-0 z-50 transition-colors duration-300 bg-slate-900/80 backdrop-blur-md border-b border-slate-700/50"
            } else {
                "fixed top-0 inset-x-0 z-50 transition-colors duration-300 bg-transparent"
            }
        }>
            <nav class="max-w-6xl mx-auto px-4 h-16 flex items-center justify-between">
                <a href="#home" class="text-xl font-bold gradient-text">
                    {PROFILE.initials}
                </a>
                <ul class="hidden md:flex items-center gap-6">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            let id = link.id;
                            let is_active = move || active.with(|a| a == id);
                            view! {
                                <li>
                                    <a
                                        href=format!("#{id}")
                                        class=move || {
                                            if is_active() { "nav-link nav-link-active" } else { "nav-link" }
                                        }
                                        aria-current=move || is_active().then_some("location")
                                    >
                                        {link.label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <A
                    href="/cards"
                    attr:class="text-sm px-3 py-1.5 rounded-md border border-slate-600 text-slate-300 hover:text-white hover:border-slate-400 transition-colors"
                >
                    "Business Cards"
                </A>
            </nav>
        </header>
    }
}
